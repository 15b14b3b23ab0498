//! Shared HTTP plumbing for the nutrition backend client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use nutrifolio_core::errors::{Error, RemoteError, Result};

/// Production endpoint of the nutrition backend.
pub const DEFAULT_BASE_URL: &str = "https://api.nutrifolio.app/v1";

/// HTTP client for the nutrition backend.
///
/// A single instance is shared by all resource traits. Requests carry the
/// session bearer token when one is configured; there is no retry logic
/// here, retry policy belongs to the caller.
pub struct NutritionApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl NutritionApiClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Attaches the session's bearer token to every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Network(format!("Request to {} timed out: {}", path, e))
            } else {
                RemoteError::Network(format!("Request to {} failed: {}", path, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(path, status, message));
        }
        Ok(response)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        debug!("GET {}", path);
        self.execute(self.client.get(self.url(path)), path).await
    }

    pub(crate) async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response> {
        debug!("POST {}", path);
        self.execute(self.client.post(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn put<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response> {
        debug!("PUT {}", path);
        self.execute(self.client.put(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        debug!("DELETE {}", path);
        self.execute(self.client.delete(self.url(path)), path).await
    }

    pub(crate) async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Deserialization(format!("{}: {}", path, e)).into())
    }
}

/// Percent-encodes a caller-supplied path segment.
pub(crate) fn seg(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Maps a non-2xx status to the core error taxonomy. 404 is absence, not
/// failure; everything else surfaces as an HTTP error with the body text.
pub(crate) fn status_error(path: &str, status: StatusCode, message: String) -> Error {
    if status == StatusCode::NOT_FOUND {
        RemoteError::NotFound(path.to_string()).into()
    } else {
        RemoteError::Http {
            status: status.as_u16(),
            message,
        }
        .into()
    }
}
