//! Configuration management
//!
//! [`ClientSettings`] is shared by the WASM console and native tools. The
//! browser build has no filesystem or environment, so its overrides are
//! baked in at compile time (`STADIUM_API_URL`, `STADIUM_REQUIRE_AUTH`).
//! Native binaries layer a config file and `STADIUM_*` environment variables
//! on top via [`load_config`].

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::ApiError;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Double-submit CSRF names used by the backend. Configuration constants,
/// never derived from responses.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Backend root, e.g. `http://127.0.0.1:8000/api`
    pub api_base_url: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    /// Upper bound on every backend request
    pub request_timeout_secs: u64,
    /// Redirect anonymous visitors away from the operations pages.
    /// When false every page is public and the shell only shows who is signed in.
    pub require_authentication: bool,
    pub dashboard_poll_secs: u64,
    pub crowd_poll_secs: u64,
    pub energy_poll_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STADIUM_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER.to_string(),
            request_timeout_secs: 10,
            require_authentication: option_env!("STADIUM_REQUIRE_AUTH")
                .map(parse_flag)
                .unwrap_or(true),
            dashboard_poll_secs: 30,
            crowd_poll_secs: 10,
            energy_poll_secs: 30,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Timeout for `AbortSignal.timeout`, which takes a u32 of milliseconds.
    pub fn request_timeout_millis(&self) -> u32 {
        self.request_timeout().as_millis().min(u32::MAX as u128) as u32
    }

    /// Absolute URL for an API path. The base may carry a path prefix
    /// (`/api`), so this appends rather than resolving.
    pub fn endpoint(&self, path: &str) -> Result<url::Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(url::Url::parse(&joined)?)
    }

    /// Make these the settings the console renders with. The first call
    /// wins; returns whether this one did.
    pub fn install(self) -> bool {
        INSTALLED.set(self).is_ok()
    }

    /// Settings installed at startup, else the compile-time defaults (always
    /// the case in the browser).
    pub fn current() -> Self {
        INSTALLED.get().cloned().unwrap_or_default()
    }
}

static INSTALLED: OnceLock<ClientSettings> = OnceLock::new();

// =============================================================================
// Native configuration (server feature)
// =============================================================================

#[cfg(feature = "server")]
pub use native::*;

#[cfg(feature = "server")]
mod native {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::PathBuf;

    use super::ClientSettings;

    #[derive(Debug, Deserialize)]
    pub struct Config {
        #[serde(default = "default_port")]
        pub port: u16,

        #[serde(default)]
        pub client: ClientSettings,
    }

    fn default_port() -> u16 {
        8080
    }

    pub fn get_config_dir() -> PathBuf {
        directories::ProjectDirs::from("io", "smart-stadium", "smart-stadium")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn load_config() -> Result<Config> {
        let config_dir = get_config_dir();

        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", 8080)?
            // Load from config file if it exists
            .add_source(
                ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                    .required(false),
            )
            // Override with environment variables (STADIUM_PORT, STADIUM_CLIENT__API_BASE_URL, etc.)
            .add_source(
                ::config::Environment::with_prefix("STADIUM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let settings = ClientSettings {
            api_base_url: "http://127.0.0.1:8000/api/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.endpoint("/auth/user/").unwrap().as_str(),
            "http://127.0.0.1:8000/api/auth/user/"
        );
        assert_eq!(
            settings.endpoint("dashboard-data").unwrap().as_str(),
            "http://127.0.0.1:8000/api/dashboard-data"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        let settings = ClientSettings {
            api_base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.endpoint("/auth/csrf/"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_csrf_names_are_constants() {
        let settings = ClientSettings::default();
        assert_eq!(settings.csrf_cookie_name, "csrftoken");
        assert_eq!(settings.csrf_header_name, "X-CSRFToken");
    }

    #[test]
    fn test_request_timeout_millis_saturates() {
        let mut settings = ClientSettings::default();
        assert_eq!(settings.request_timeout_millis(), 10_000);

        settings.request_timeout_secs = 5_000_000;
        assert_eq!(settings.request_timeout_millis(), u32::MAX);
    }

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"require_authentication": false}"#).unwrap();
        assert!(!settings.require_authentication);
        assert_eq!(settings.crowd_poll_secs, 10);
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[cfg(feature = "server")]
    #[test]
    #[serial_test::serial]
    fn test_load_config_env_overrides() {
        std::env::set_var("STADIUM_PORT", "4100");
        std::env::set_var("STADIUM_CLIENT__REQUIRE_AUTHENTICATION", "false");
        std::env::set_var("STADIUM_CLIENT__API_BASE_URL", "http://stadium.local/api");

        let config = load_config();

        std::env::remove_var("STADIUM_PORT");
        std::env::remove_var("STADIUM_CLIENT__REQUIRE_AUTHENTICATION");
        std::env::remove_var("STADIUM_CLIENT__API_BASE_URL");

        let config = config.unwrap();
        assert_eq!(config.port, 4100);
        assert!(!config.client.require_authentication);
        assert_eq!(config.client.api_base_url, "http://stadium.local/api");
        assert_eq!(config.client.csrf_header_name, "X-CSRFToken");
    }

    #[cfg(feature = "server")]
    #[test]
    #[serial_test::serial]
    fn test_loaded_settings_reach_console() {
        std::env::set_var("STADIUM_CLIENT__REQUIRE_AUTHENTICATION", "false");
        let config = load_config();
        std::env::remove_var("STADIUM_CLIENT__REQUIRE_AUTHENTICATION");
        let config = config.unwrap();

        assert!(config.client.clone().install());
        assert!(!config.client.clone().install(), "second install must not win");

        let rendered = ClientSettings::current();
        assert!(!rendered.require_authentication);
        assert_eq!(rendered, config.client);
    }
}
