pub mod crc24;
pub mod error;

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error::Error;
use hedwig::decoder::{DecodableFrom, Decoder};
use hedwig::encoder::{EncodableTo, Encoder};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use crc24::crc24;

const CHECKSUM_MARKER: char = '=';
const CHECKSUM_LEN: usize = 3;
const LINE_WIDTH: usize = 64;

/*
ref: https://www.rfc-editor.org/rfc/rfc4880#section-6.2

Only the armor body is handled here; the caller strips the
"-----BEGIN PGP PUBLIC KEY BLOCK-----" lines and armor headers.

body     = base64 data, wrapped or not
checksum = "=" base64(crc24(data)) -- always 4 characters
*/

/// An armored OpenPGP body split into its data and checksum segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    data: String,     // base64 encoded data
    checksum: String, // base64 encoded CRC-24
}

impl Armor {
    pub fn new(data: String, checksum: String) -> Self {
        Armor { data, checksum }
    }

    /// Armors `data`, computing its checksum.
    pub fn from_bytes(data: &[u8]) -> Self {
        let crc = crc24(data).to_be_bytes();
        Armor {
            data: STANDARD.encode(data),
            checksum: STANDARD.encode(&crc[1..]),
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl FromStr for Armor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The data segment may end in base64 padding, so only the last
        // marker separates the checksum.
        let splitter = s.rfind(CHECKSUM_MARKER).ok_or(Error::MissingChecksum)?;
        let data = strip_whitespace(&s[..splitter]);
        let checksum = strip_whitespace(&s[splitter + 1..]);
        trace!(
            data_len = data.len(),
            checksum_len = checksum.len(),
            "split armor"
        );
        Ok(Armor { data, checksum })
    }
}

impl Display for Armor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Wrap on character boundaries; `data` is not guaranteed to be ASCII.
        let mut rest = self.data.as_str();
        while !rest.is_empty() {
            let end = rest
                .char_indices()
                .nth(LINE_WIDTH)
                .map_or(rest.len(), |(i, _)| i);
            let (line, tail) = rest.split_at(end);
            writeln!(f, "{}", line)?;
            rest = tail;
        }
        write!(f, "{}{}", CHECKSUM_MARKER, self.checksum)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Packet bytes recovered from an armored block.
///
/// The buffer is wiped when the value is dropped, so key material does not
/// outlive the parse that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct RawPacket {
    bytes: Vec<u8>,
}

impl RawPacket {
    pub fn new(bytes: Vec<u8>) -> Self {
        RawPacket { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overwrites the packet bytes with zeros, keeping the length.
    fn wipe(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }
}

impl AsRef<[u8]> for RawPacket {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for RawPacket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawPacket")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Zeroize for RawPacket {
    fn zeroize(&mut self) {
        self.wipe();
        self.bytes.zeroize();
    }
}

impl Drop for RawPacket {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RawPacket {}

impl DecodableFrom<Armor> for RawPacket {}

impl Decoder<Armor, RawPacket> for Armor {
    type Error = Error;

    fn decode(&self) -> Result<RawPacket, Self::Error> {
        // Wrapped right away so a rejected payload is wiped as well.
        let packet = RawPacket::new(STANDARD.decode(self.data()).map_err(Error::Encoding)?);
        let checksum = STANDARD
            .decode(self.checksum())
            .map_err(Error::Encoding)?;
        if checksum.len() != CHECKSUM_LEN {
            return Err(Error::MalformedChecksum {
                length: checksum.len(),
            });
        }
        let declared = u32::from_be_bytes([0, checksum[0], checksum[1], checksum[2]]);
        let computed = crc24(packet.as_bytes());
        if declared != computed {
            return Err(Error::ChecksumMismatch { declared, computed });
        }
        trace!(len = packet.len(), "armor checksum verified");
        Ok(packet)
    }
}

impl DecodableFrom<String> for Armor {}

impl Decoder<String, Armor> for String {
    type Error = Error;

    fn decode(&self) -> Result<Armor, Self::Error> {
        Armor::from_str(self)
    }
}

impl DecodableFrom<&str> for Armor {}

impl Decoder<&str, Armor> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Armor, Self::Error> {
        Armor::from_str(self)
    }
}

impl EncodableTo<Vec<u8>> for Armor {}

impl Encoder<Vec<u8>, Armor> for Vec<u8> {
    type Error = Error;

    fn encode(&self) -> Result<Armor, Self::Error> {
        Ok(Armor::from_bytes(self))
    }
}
