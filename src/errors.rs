use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input line could not be parsed.
    #[error("line {line}: {msg}")]
    InvalidFormat { line: usize, msg: String },

    /// A word sequence handed over as sorted was not.
    #[error("words are not sorted: word #{index} sorts before its predecessor")]
    Unsorted { index: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_format<S: Into<String>>(line: usize, msg: S) -> Error {
        Error::InvalidFormat { line, msg: msg.into() }
    }
}
