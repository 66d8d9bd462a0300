use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Error indicating a page cannot be loaded, because a critical resource does not exist.
    /// For example the page /u/<user>/<id> cannot be loaded, because no such snippet exists.
    #[error("The requested {0} with id {1} does not exist")]
    NotFound(&'static str, String),

    #[error("{0}: {1}")]
    UnhandledStatus(u16, String),

    #[error("Error {0}: {1}")]
    ApiError(u16, String),

    #[error(transparent)]
    Reqwasm(#[from] reqwasm::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Coarse classification used to pick a log line and leave rendering
/// decisions to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The failure happened in the network transport.
    Network,
    Unknown,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Reqwasm(_) => ErrorKind::Network,
            _ => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        let err = Error::ApiError(500, "oops".to_owned());
        assert_eq!(err.kind(), ErrorKind::Unknown);

        let err: Error = serde_json::from_str::<u8>("[]").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Unknown);

        let err = Error::NotFound("snippet", "alice:abc123".to_owned());
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn messages() {
        let err = Error::ApiError(422, "name taken".to_owned());
        assert_eq!(err.to_string(), "Error 422: name taken");

        let err = Error::NotFound("snippet", "alice:abc123".to_owned());
        assert_eq!(
            err.to_string(),
            "The requested snippet with id alice:abc123 does not exist"
        );
    }
}
