use spacebio_api::ApiError;
use thiserror::Error;

/// All the ways a navigator operation can fail
///
/// Views show these inline; none of them is fatal to the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(e) => Error::Network(e.to_string()),
            ApiError::Timeout => Error::Timeout,
            ApiError::Http { status, message } => Error::Http { status, message },
            ApiError::Decode(msg) => Error::Decode(msg),
        }
    }
}
