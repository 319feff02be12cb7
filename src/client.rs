//! Typed client for the stadium backend.
//!
//! Thin: one method per endpoint, decoding into `stadium-types`. Session
//! semantics (what a failure means for the signed-in user) live in
//! [`crate::session`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use stadium_types::venue::TicketScan;
use stadium_types::{
    AuthResponse, Credentials, CrowdZone, CurrentUserResponse, DashboardData, EnergyOverview,
    MerchandiseItem, RegistrationProfile, SystemLog, Ticket, TicketValidation,
};

use crate::error::ApiError;
use crate::transport::Transport;

pub const CSRF_PATH: &str = "/auth/csrf/";
pub const CURRENT_USER_PATH: &str = "/auth/user/";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Ask the backend to set the CSRF cookie. The body is ignored.
    pub async fn fetch_csrf(&self) -> Result<(), ApiError> {
        self.transport.get(CSRF_PATH).await?.ensure_success()?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<CurrentUserResponse, ApiError> {
        self.transport
            .get(CURRENT_USER_PATH)
            .await?
            .ensure_success()?
            .json()
    }

    /// Rejections (HTTP 400, `success: false`) come back as `Ok`.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, credentials).await
    }

    pub async fn register(&self, profile: &RegistrationProfile) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, profile).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.transport.post(LOGOUT_PATH, None).await?.ensure_success()?;
        Ok(())
    }

    // =========================================================================
    // Venue data
    // =========================================================================

    pub async fn fetch_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.transport.get(path).await?.ensure_success()?.json()
    }

    pub async fn dashboard_data(&self) -> Result<DashboardData, ApiError> {
        self.fetch_json("/dashboard-data").await
    }

    pub async fn crowd_zones(&self) -> Result<Vec<CrowdZone>, ApiError> {
        self.fetch_json("/crowd/").await
    }

    pub async fn energy_overview(&self) -> Result<EnergyOverview, ApiError> {
        self.fetch_json("/energy/").await
    }

    pub async fn tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.fetch_json("/tickets/").await
    }

    pub async fn merchandise(&self) -> Result<Vec<MerchandiseItem>, ApiError> {
        self.fetch_json("/merchandise/").await
    }

    pub async fn system_logs(&self) -> Result<Vec<SystemLog>, ApiError> {
        self.fetch_json("/logs/").await
    }

    /// Scan a ticket at the gate. Not-found, already-scanned and fraud
    /// rejections are `Ok` with `valid: false`.
    pub async fn validate_ticket(&self, code: &str) -> Result<TicketValidation, ApiError> {
        let scan = TicketScan {
            code: code.trim().to_string(),
        };
        self.post_json("/validate-ticket", &scan).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)?;
        self.transport
            .post(path, Some(&body))
            .await?
            .json_any_status()
    }
}
