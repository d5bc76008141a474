use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sd_core::{
    BotId, BotInfoResponse, DirectoryClientPort, FetchError, TeamId, UserId, UserInfoResponse,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{from_api_error, from_reqwest, from_status};
use crate::config::ApiConfig;

/// Identity of the token owner, as reported by `auth.test`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthIdentity {
    pub team_id: TeamId,
    pub user_id: UserId,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Directory client speaking the Slack Web API over HTTPS.
///
/// Every method is a `GET {base_url}/{method}` authorized with a bearer
/// token. Slack reports most failures as HTTP 200 with `"ok": false`; those
/// are mapped by their `error` code.
pub struct SlackDirectoryClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SlackDirectoryClient {
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Ask the service who the token belongs to.
    #[instrument(skip(self))]
    pub async fn auth_test(&self) -> Result<AuthIdentity, FetchError> {
        self.call("auth.test", &[]).await
    }

    async fn call<T>(&self, method: &str, query: &[(&str, &str)]) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        debug!(%url, "Calling directory service");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(from_status(status));
        }

        let body: Value = response.json().await.map_err(from_reqwest)?;
        decode_envelope(body)
    }
}

/// Unwrap an `{"ok": ..., "error": ...}` envelope into its payload.
fn decode_envelope<T>(body: Value) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    match body.get("ok").and_then(Value::as_bool) {
        Some(true) => serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string())),
        Some(false) => {
            let code = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown_error");
            Err(from_api_error(code))
        }
        None => Err(FetchError::Decode("response has no \"ok\" field".to_string())),
    }
}

#[async_trait]
impl DirectoryClientPort for SlackDirectoryClient {
    #[instrument(skip(self, id), fields(user_id = %id))]
    async fn fetch_user_info(&self, id: &UserId) -> Result<UserInfoResponse, FetchError> {
        self.call("users.info", &[("user", id.as_str())]).await
    }

    #[instrument(skip(self, id), fields(bot_id = %id))]
    async fn fetch_bot_info(&self, id: &BotId) -> Result<BotInfoResponse, FetchError> {
        self.call("bots.info", &[("bot", id.as_str())]).await
    }
}
