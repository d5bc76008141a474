//! Mapping of transport and API failures onto `FetchError`

use reqwest::StatusCode;
use sd_core::FetchError;

/// Classify a `reqwest` failure.
pub(crate) fn from_reqwest(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = error.status() {
        from_status(status)
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else {
        FetchError::Network(error.to_string())
    }
}

pub(crate) fn from_status(status: StatusCode) -> FetchError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Auth(status.to_string()),
        StatusCode::NOT_FOUND => FetchError::NotFound(status.to_string()),
        StatusCode::TOO_MANY_REQUESTS => FetchError::Api("ratelimited".to_string()),
        _ => FetchError::Network(format!("unexpected status {}", status)),
    }
}

/// Classify the `error` code of an `"ok": false` response.
pub(crate) fn from_api_error(code: &str) -> FetchError {
    match code {
        "user_not_found" | "bot_not_found" | "users_not_found" => {
            FetchError::NotFound(code.to_string())
        }
        "invalid_auth" | "not_authed" | "account_inactive" | "token_revoked"
        | "token_expired" | "missing_scope" => FetchError::Auth(code.to_string()),
        _ => FetchError::Api(code.to_string()),
    }
}
