//! WASM transport: `gloo-net` requests with `credentials: include`.
//!
//! The browser owns the session cookie. The CSRF cookie is readable
//! (not HttpOnly), so its value is copied from `document.cookie` into the
//! CSRF header on every POST.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsCast;
use web_sys::{AbortSignal, HtmlDocument, RequestCredentials};

use super::{find_cookie, RawResponse, Transport};
use crate::config::ClientSettings;
use crate::error::ApiError;

pub struct BrowserTransport {
    settings: ClientSettings,
}

impl BrowserTransport {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn csrf_token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        find_cookie(&cookies, &self.settings.csrf_cookie_name)
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let signal = AbortSignal::timeout_with_u32(self.settings.request_timeout_millis());
        let builder = builder
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .header("Accept", "application/json");

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| self.map_error(e))?;

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(path, status, "Backend response");
        Ok(RawResponse { status, body })
    }

    fn map_error(&self, e: gloo_net::Error) -> ApiError {
        match e {
            gloo_net::Error::JsError(js) if js.name == "TimeoutError" => {
                ApiError::Timeout(self.settings.request_timeout().as_secs())
            }
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, ApiError> {
        let url = self.settings.endpoint(path)?;
        tracing::debug!(path, "GET");
        self.send(Request::get(url.as_str()), path, None).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.settings.endpoint(path)?;
        let csrf = self.csrf_token();
        tracing::debug!(path, csrf = csrf.is_some(), "POST");

        let mut builder = Request::post(url.as_str());
        if let Some(token) = csrf {
            builder = builder.header(&self.settings.csrf_header_name, &token);
        }
        self.send(builder, path, body).await
    }

    fn has_csrf_token(&self) -> bool {
        self.csrf_token().is_some()
    }
}
