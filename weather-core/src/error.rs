use thiserror::Error;

/// Failure of a single weather request.
///
/// Every variant is recoverable: the caller reports it and the program ends normally.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with something other than `200 OK`.
    #[error("Status code: {0}")]
    Status(u16),

    /// DNS, connect, timeout or body-read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body decoded but did not have the shape we read from.
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid service URL '{0}'")]
    InvalidUrl(String),
}

impl FetchError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        FetchError::Malformed(detail.into())
    }
}
