use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("armor error: {0}")]
    Armor(#[from] ::armor::error::Error),

    #[error("public key error: {0}")]
    Pubkey(#[from] pubkey::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install logger: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
