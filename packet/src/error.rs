use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid packet marker in header byte 0x{0:02x}")]
    InvalidMarker(u8),
    #[error("new format packet length in header byte 0x{0:02x} is not supported")]
    UnsupportedLengthEncoding(u8),
    #[error("indeterminate packet length is not supported")]
    IndeterminateLength,
    #[error("unexpected packet tag: {0}")]
    UnexpectedTag(u8),
    #[error("packet header truncated: need {needed} bytes, got {available}")]
    TruncatedHeader { needed: usize, available: usize },
    #[error("packet body truncated: declared {declared} bytes, got {available}")]
    TruncatedBody { declared: u32, available: usize },
}
