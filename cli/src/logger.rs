use std::env;

use clap::Args;
use tracing::Level;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Crates whose events follow the level flags.
const CRATES: [&str; 4] = ["hedwig", "armor", "packet", "pubkey"];

fn directives(level: Option<Level>) -> String {
    let env = env::var("RUST_LOG").unwrap_or_default();
    match level {
        Some(level) => {
            let level = level.to_string().to_lowercase();
            let crates: Vec<String> = CRATES
                .iter()
                .map(|name| format!("{name}={level}"))
                .collect();
            format!("{},{env}", crates.join(","))
        }
        None => env,
    }
}

/// Installs a compact stderr subscriber filtered by `RUST_LOG` and `level`.
pub(crate) fn init(level: Option<Level>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse(directives(level))?;

    let formatter = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Log level flags shared by every subcommand
#[derive(Debug, Args)]
pub(crate) struct LogConfig {
    /// Enable debug + info + warning + error logging
    #[arg(long, global = true)]
    debug: bool,

    /// Enable info + warning + error logging
    #[arg(long, global = true)]
    info: bool,

    /// Enable warning + error logging
    #[arg(long, global = true)]
    warn: bool,

    /// Enable error logging
    #[arg(long, global = true)]
    error: bool,
}

impl LogConfig {
    pub(crate) fn level(&self) -> Option<Level> {
        if self.debug {
            Some(Level::DEBUG)
        } else if self.info {
            Some(Level::INFO)
        } else if self.warn {
            Some(Level::WARN)
        } else if self.error {
            Some(Level::ERROR)
        } else {
            None
        }
    }
}
