//! services/client/src/adapters/transport.rs
//!
//! The shared HTTP plumbing used by the service adapters: URL building, bearer
//! authentication, response envelopes and status-to-`PortError` mapping.

use crate::config::Config;
use learning_assistant_core::ports::{PortError, PortResult};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Successful responses arrive either bare or wrapped as `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// The body of a failed response.
#[derive(Deserialize, Default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Maps a non-success status and its body to a `PortError`.
pub(crate) fn error_from_status(status: StatusCode, body: &[u8]) -> PortError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let message = parsed.message.or(parsed.error).unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized,
        StatusCode::NOT_FOUND => PortError::NotFound(message),
        _ => PortError::Network(message),
    }
}

/// A configured HTTP client for the learning-assistant API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.auth_token.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and decodes the (possibly enveloped) JSON payload.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> PortResult<T> {
        let body = self.send(request).await?;
        serde_json::from_slice::<Envelope<T>>(&body)
            .map(Envelope::into_inner)
            .map_err(|e| PortError::Unexpected(format!("Malformed response body: {}", e)))
    }

    /// Sends the request and ignores any successful body.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> PortResult<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> PortResult<Vec<u8>> {
        let response: Response = request
            .send()
            .await
            .map_err(|e| PortError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PortError::Network(e.to_string()))?;
        debug!("{} ({} bytes)", status, body.len());

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(error_from_status(status, &body))
        }
    }
}
