use std::io::{self, Write};
use std::str::FromStr;

use ::armor::{Armor, RawPacket};
use clap::Args;
use hedwig::decoder::Decoder;

use crate::error::Result;
use crate::utils::{armor_body, format_hex_dump, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the armored file. If not specified, reads from stdin
    file: Option<String>,

    /// Output as hexadecimal dump instead of binary
    #[arg(long)]
    hex: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let contents = String::from_utf8(input_bytes)?;

    let armor = Armor::from_str(armor_body(&contents))?;
    let packet: RawPacket = armor.decode()?;

    if config.hex {
        print!("{}", format_hex_dump(packet.as_bytes()));
    } else {
        io::stdout().write_all(packet.as_bytes())?;
    }

    Ok(())
}
