use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when decoding armored OpenPGP data.
///
/// An armored block is `<base64 data>=<base64 checksum>`; the checksum is a
/// CRC-24 over the decoded data (RFC 4880 section 6.1).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `=` separates the data from the checksum
    #[error("missing armor checksum")]
    MissingChecksum,

    /// Either segment is not valid base64
    #[error("base64 decode: {0}")]
    Encoding(DecodeError),

    /// The checksum segment did not decode to exactly three bytes
    #[error("armor checksum must be 3 bytes, got {length}")]
    MalformedChecksum { length: usize },

    /// The CRC-24 of the decoded data differs from the declared checksum
    #[error("armor checksum mismatch: declared {declared:06X}, computed {computed:06X}")]
    ChecksumMismatch { declared: u32, computed: u32 },
}
