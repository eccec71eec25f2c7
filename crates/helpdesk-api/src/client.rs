//! HTTP client for the helpdesk REST API.
//!
//! All requests are JSON over HTTP against a fixed base origin. When a
//! bearer token is set it is attached uniformly as an `Authorization`
//! header. Non-2xx answers are mapped to typed errors, preferring the
//! `message` field of the response body over a fixed fallback text.

use helpdesk_core::auth::TokenSink;
use helpdesk_core::error::{HelpdeskError, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::RwLock;

/// Client for the remote helpdesk API.
///
/// One instance is shared (via `Arc`) by every use case; it implements the
/// per-domain API traits from `helpdesk-core` plus [`TokenSink`] so the auth
/// use case can rotate the bearer token in place.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client against the given base origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn current_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(map_transport_error)?;
        check_status(response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self.send(self.request(Method::GET, path)).await?;
        parse_body(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(request).await?;
        parse_body(response).await
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        tracing::debug!(path, "POST");
        let request = self.request(Method::POST, path).json(body);
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PATCH");
        let request = self.request(Method::PATCH, path).json(body);
        let response = self.send(request).await?;
        parse_body(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        tracing::debug!(path, "DELETE");
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

impl TokenSink for ApiClient {
    fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the server's `message` field from an error body, if any.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

/// Maps a non-2xx status plus its body to a typed error.
pub(crate) fn map_status_error(status: StatusCode, body: &str) -> HelpdeskError {
    let message = parse_error_message(body);
    if status == StatusCode::CONFLICT {
        return HelpdeskError::conflict(
            message.unwrap_or_else(|| "The resource already exists".to_string()),
        );
    }
    HelpdeskError::api(status.as_u16(), message)
}

fn map_transport_error(err: reqwest::Error) -> HelpdeskError {
    if err.is_connect() {
        HelpdeskError::network(format!("could not reach the server: {err}"))
    } else if err.is_timeout() {
        HelpdeskError::network(format!("request timed out: {err}"))
    } else {
        HelpdeskError::network(err.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| String::new());
    Err(map_status_error(status, &body))
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(map_transport_error)?;
    serde_json::from_slice(&bytes).map_err(HelpdeskError::from)
}
