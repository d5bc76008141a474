use thiserror::Error;

/// A remote directory fetch failed.
///
/// One settlement of an initialization task is handed to every waiter, so
/// the error is `Clone` and carries only owned text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("not authorized: {0}")]
    Auth(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("directory service error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("fetch task aborted: {0}")]
    Aborted(String),
}
