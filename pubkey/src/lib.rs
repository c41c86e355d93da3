//! # pubkey
//!
//! Reads the RSA public key out of an ASCII armored OpenPGP key block.
//!
//! ```text
//! armored text → Armor → RawPacket → PacketHeader (tag 6) + body → KeyMaterial → RsaPublicKey
//! ```
//!
//! Every stage either hands a validated, narrowed view of the packet bytes
//! to the next one or fails the whole read. The decoded packet buffer is
//! wiped when the read returns, whatever the outcome.
//!
//! ```ignore
//! let key = pubkey::read_public_key(armored)?;
//! println!("{} bit key, e = {}", key.key_size(), key.exponent());
//! ```

use std::str::FromStr;

use armor::{Armor, RawPacket};
use hedwig::decoder::{DecodableFrom, Decoder};
use tracing::debug;

pub mod error;
pub mod key;
pub mod material;
pub mod mpi;
pub mod options;

pub use error::{Error, KeyError, Result};
pub use key::{RsaPublicKey, assemble};
pub use material::{KeyMaterial, PublicKeyAlgorithm, parse_public_key_material};
pub use mpi::Mpi;
pub use options::{MpiLength, ParseOptions};

/// Reads an RSA public key from the body of an armored key block.
///
/// `armored` is `<base64 data>=<base64 checksum>`, line wrapped or not, without
/// the `-----BEGIN PGP PUBLIC KEY BLOCK-----` framing.
pub fn read_public_key(armored: &str) -> Result<RsaPublicKey> {
    read_public_key_with(armored, &ParseOptions::default())
}

/// Like [`read_public_key`] with explicit options.
pub fn read_public_key_with(armored: &str, options: &ParseOptions) -> Result<RsaPublicKey> {
    if armored.len() > options.max_input_len() {
        return Err(Error::InputTooLarge {
            limit: options.max_input_len(),
            actual: armored.len(),
        });
    }
    let armor = Armor::from_str(armored)?;
    let packet: RawPacket = armor.decode()?;
    debug!(len = packet.len(), "dearmored key block");
    read_packet(&packet, options)
}

fn read_packet(raw: &RawPacket, options: &ParseOptions) -> Result<RsaPublicKey> {
    let (header, consumed) = packet::parse_header(raw.as_bytes())?;
    let rest = &raw.as_bytes()[consumed..];
    // A body shorter than declared is left to the key material parser, which
    // reports the field that runs out.
    let body = &rest[..rest.len().min(header.body_length() as usize)];
    debug!(
        body_length = header.body_length(),
        available = body.len(),
        "parsed public key packet header"
    );

    let material = parse_public_key_material(body, options)?;
    debug!(
        version = material.version(),
        creation_time = material.creation_time(),
        modulus_bits = material.modulus().bit_length(),
        exponent_bits = material.exponent().bit_length(),
        "parsed key material"
    );

    let key = assemble(material.modulus(), material.exponent())?;
    debug!(key_size = key.key_size(), "assembled RSA public key");
    Ok(key)
}

impl DecodableFrom<Armor> for RsaPublicKey {}

impl Decoder<Armor, RsaPublicKey> for Armor {
    type Error = Error;

    fn decode(&self) -> Result<RsaPublicKey> {
        let packet: RawPacket = self.decode()?;
        packet.decode()
    }
}

impl DecodableFrom<RawPacket> for RsaPublicKey {}

impl Decoder<RawPacket, RsaPublicKey> for RawPacket {
    type Error = Error;

    fn decode(&self) -> Result<RsaPublicKey> {
        read_packet(self, &ParseOptions::default())
    }
}
