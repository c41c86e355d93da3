use ::armor::Armor;
use clap::Args;
use hedwig::encoder::Encoder;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the binary packet file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let armor: Armor = input_bytes.encode()?;
    println!("{}", armor);
    Ok(())
}
