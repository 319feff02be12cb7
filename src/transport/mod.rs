//! HTTP transport to the stadium backend.
//!
//! The backend authenticates with a session cookie and guards mutating
//! requests with a double-submit CSRF token: `GET /auth/csrf/` sets a cookie,
//! and every POST echoes its value in a header. Both names come from
//! [`ClientSettings`](crate::config::ClientSettings).
//!
//! Two implementations exist: [`http::HttpTransport`] (native, reqwest with a
//! private cookie jar) and [`browser::BrowserTransport`] (WASM, `fetch` with
//! the page's cookies). Tests script their own.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
#[cfg(test)]
pub(crate) mod scripted;

/// Transport used by the console on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = browser::BrowserTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = http::HttpTransport;

/// Status and body of a completed exchange. Non-2xx is not an error at this
/// level: login and ticket validation report rejections in the body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`ApiError::Status`] unless 2xx.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                code: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body whatever the status, for endpoints that explain
    /// rejections in JSON. A non-2xx body that isn't JSON is a status error.
    pub fn json_any_status<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match serde_json::from_str(&self.body) {
            Ok(value) => Ok(value),
            Err(_) if !self.is_success() => Err(ApiError::Status {
                code: self.status,
                body: self.body,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// One request/response exchange with the backend, cookies included.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<RawResponse, ApiError>;

    /// POST a JSON body, presenting the CSRF header when the cookie is set.
    async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError>;

    /// Whether a CSRF cookie is currently available to echo.
    fn has_csrf_token(&self) -> bool;
}

/// Look up one cookie in a `Cookie:` style header (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
