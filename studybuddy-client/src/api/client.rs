//! Guarded HTTP client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::CancellationToken;
use crate::auth::SESSION_EXPIRED_MESSAGE;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::navigator::{Navigator, LOGIN_PAGE};
use crate::session::Session;

/// HTTP client bound to a session.
///
/// Requests are built with [`ApiClient::request`], which attaches the JSON
/// content type and the bearer token, and dispatched with [`ApiClient::send`].
/// Any response other than 401 is handed back untouched.
pub struct ApiClient {
    http_client: Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_http_client(Client::new(), base_url, session, navigator)
    }

    pub fn from_config(
        config: &ApiConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_http_client(
            http_client,
            &config.base_url,
            session,
            navigator,
        ))
    }

    fn with_http_client(
        http_client: Client,
        base_url: &str,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Start a request to `endpoint`, relative to the API base URL.
    pub fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, self.url(endpoint))
            .header(CONTENT_TYPE, "application/json");

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request, ending the session if the server answers 401.
    ///
    /// On 401 the session is cleared and the navigator is sent to the login
    /// page before `Error::SessionExpired` is returned, so the caller may find
    /// the page already gone.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("API rejected session token ({})", response.url().path());
            self.expire_session();
            return Err(Error::SessionExpired);
        }

        Ok(response)
    }

    /// Like [`ApiClient::send`], but gives up as soon as `cancel` fires.
    ///
    /// A cancelled request never touches the session.
    pub async fn send_cancellable(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request cancelled");
                Err(Error::Cancelled)
            }
            result = self.send(request) => result,
        }
    }

    /// Send a request without the 401 handling, giving up as soon as `cancel`
    /// fires.
    ///
    /// For background calls whose failure must not end the session. The
    /// response comes back whatever its status.
    pub async fn send_unguarded(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request cancelled");
                Err(Error::Cancelled)
            }
            result = request.send() => Ok(result?),
        }
    }

    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.send(self.request(Method::GET, endpoint)).await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<Response> {
        self.send(self.request(Method::POST, endpoint).json(body)).await
    }

    /// GET `endpoint` and decode a successful JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.get(endpoint).await?;
        decode_json(response).await
    }

    fn expire_session(&self) {
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear session: {}", e);
        }
        if let Err(e) = self.session.stash_message(SESSION_EXPIRED_MESSAGE) {
            tracing::error!("Failed to queue session message: {}", e);
        }
        self.navigator.navigate(LOGIN_PAGE);
    }
}

/// Decode a JSON body, turning non-success statuses into `Error::Status`.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build an `Error::Status`, preferring the server's `message` field.
pub(crate) async fn status_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Error::Status {
        status: status.as_u16(),
        message: message_from_body(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string()),
    }
}

pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
