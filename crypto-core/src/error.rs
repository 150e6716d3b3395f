use thiserror::Error;

/// Failure of a single market-data request. The console reports it and shows the menu again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Anything other than `200 OK`.
    #[error("Status code: {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON shape the endpoint documents.
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid service URL '{0}'")]
    InvalidUrl(String),
}
