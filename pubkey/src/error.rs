use thiserror::Error;

/// Errors raised while reading the body of a public key packet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unsupported key material version {0} (only version 4 is supported)")]
    UnsupportedVersion(u8),

    #[error("unsupported public key algorithm {0} (only RSA is supported)")]
    UnsupportedAlgorithm(u8),

    #[error("{field}: need {needed} bytes, {available} remaining")]
    TruncatedData {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("{field}: integer has {actual} significant bits, MPI declares {declared}")]
    InvalidIntegerEncoding {
        field: &'static str,
        declared: u16,
        actual: u64,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("armor: {0}")]
    Armor(#[from] armor::error::Error),

    #[error("packet: {0}")]
    Packet(#[from] packet::Error),

    #[error("key material: {0}")]
    Key(#[from] KeyError),

    #[error("armored input is {actual} bytes, limit is {limit}")]
    InputTooLarge { limit: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
