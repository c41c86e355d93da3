pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// Inspect the RSA public key of an armored key block
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}
