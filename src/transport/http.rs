//! Native transport: reqwest with a private cookie jar.
//!
//! Used by the `session-check` binary and integration tests. The jar plays
//! the role of the browser's cookie store, so the session and CSRF cookies
//! set by the backend are replayed on later requests.

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{find_cookie, RawResponse, Transport};
use crate::config::ClientSettings;
use crate::error::ApiError;

pub struct HttpTransport {
    client: Client,
    jar: Arc<Jar>,
    settings: ClientSettings,
}

impl HttpTransport {
    pub fn new(settings: ClientSettings) -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(settings.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to build HTTP client with cookie jar: {}. Session cookies will not persist.",
                    e
                );
                Client::default()
            });

        Self {
            client,
            jar,
            settings,
        }
    }

    /// Current CSRF cookie value as the jar would send it to `url`.
    fn csrf_token_for(&self, url: &url::Url) -> Option<String> {
        let header = self.jar.cookies(url)?;
        let raw = header.to_str().ok()?;
        find_cookie(raw, &self.settings.csrf_cookie_name)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<RawResponse, ApiError> {
        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        debug!(path, status, "Backend response");
        Ok(RawResponse { status, body })
    }

    fn map_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.settings.request_timeout().as_secs())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, ApiError> {
        let url = self.settings.endpoint(path)?;
        debug!(path, "GET");
        self.send(self.client.get(url), path).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.settings.endpoint(path)?;
        let csrf = self.csrf_token_for(&url);
        debug!(path, csrf = csrf.is_some(), "POST");

        let mut request = self.client.post(url);
        if let Some(token) = csrf {
            request = request.header(self.settings.csrf_header_name.as_str(), token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        self.send(request, path).await
    }

    fn has_csrf_token(&self) -> bool {
        self.settings
            .endpoint("/")
            .ok()
            .and_then(|url| self.csrf_token_for(&url))
            .is_some()
    }
}
