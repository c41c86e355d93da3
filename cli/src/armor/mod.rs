pub(crate) mod decode;
pub(crate) mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ArmorCommands {
    /// Verify an armored block and write the packet bytes
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Armor binary packet data
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
}
