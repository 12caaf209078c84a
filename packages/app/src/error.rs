/// Why the dish list could not be loaded.
///
/// A cancelled request is not one of these; it is dropped without a trace beyond a debug log.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never got an answer.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something other than success.
    #[error("server answered with status {0}")]
    Status(u16),

    /// The body was not a list of dishes.
    #[error("malformed dish list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API promises unique names; the client does not paper over a broken promise.
    #[error("more than one dish is named {0:?}")]
    DuplicateDish(String),
}
