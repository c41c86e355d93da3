use clap::{Parser, Subcommand};

mod armor;
mod error;
mod key;
mod logger;
mod output;
mod utils;

use error::Result;

use crate::armor::ArmorCommands;
use crate::key::KeyCommands;
use crate::logger::LogConfig;

#[derive(Parser)]
#[command(name = "hedwig")]
#[command(about = "OpenPGP armored RSA public key toolkit", long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LogConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Public key operations
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// ASCII armor operations
    Armor {
        #[command(subcommand)]
        command: ArmorCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log.level())?;

    match cli.command {
        Commands::Key { command } => match command {
            KeyCommands::Inspect { config } => {
                key::inspect::execute(config)?;
            }
        },
        Commands::Armor { command } => match command {
            ArmorCommands::Decode { config } => {
                armor::decode::execute(config)?;
            }
            ArmorCommands::Encode { config } => {
                armor::encode::execute(config)?;
            }
        },
    }

    Ok(())
}
