use std::time::Instant;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Handle to the admin REST API of one uidcloud server.
///
/// Holds the base URL and the bearer token for the lifetime of the client.
/// The token is set at construction and only ever read afterwards; acquiring
/// or refreshing it is the caller's problem. The client is cheap to clone
/// and safe to share across in-flight calls.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl AdminClient {
    /// Creates a client with default transport settings.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, access_token)
    }

    /// Creates a client on top of a caller-configured [`reqwest::Client`],
    /// for TLS or proxy settings this crate does not own.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            access_token: access_token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one request with the bearer token attached and returns the raw
    /// response. Transport failures surface as [`ClientError::Transport`];
    /// status handling is the caller's job.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let mut builder = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.access_token);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        debug!(method = %method, url = %url, "admin api request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "admin api response"
        );
        Ok(response)
    }

    /// Gate on the one status code an operation accepts. Any other status
    /// rejects with the response body as the error detail.
    pub(crate) async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
        let status = response.status();
        if status != expected {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus { status, body });
        }
        Ok(response)
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub(crate) fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<String>>()
        .join("&");
    url.push('?');
    url.push_str(&query);
}
