//! SessionStore - the single source of truth for "who is signed in"
//!
//! Wraps the backend's cookie session:
//! - `bootstrap()` once at startup: CSRF handshake, then current-user check
//! - `login()` / `register()`: set the identity on explicit success
//! - `logout()`: always clears the identity, whatever the backend says
//!
//! Every operation draws a ticket from a monotonic counter when it starts.
//! A result is applied only if no operation with a later ticket has applied
//! already, so a slow bootstrap cannot resurrect a session the operator has
//! since logged out of. Bootstrap resolves the loading state either way.
//!
//! Failures never escape: bootstrap fails closed to anonymous, and
//! login/register report a boolean with an [`AuthFailure`] reason.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use stadium_types::{AuthResponse, Credentials, RegistrationProfile, UserIdentity};

use super::state::{LoadingState, Session};
use crate::client::ApiClient;
use crate::error::{ApiError, AuthFailure};
use crate::transport::Transport;

/// Result of a login or registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub success: bool,
    /// Set exactly when `success` is false
    pub failure: Option<AuthFailure>,
}

impl AuthOutcome {
    fn succeeded() -> Self {
        Self {
            success: true,
            failure: None,
        }
    }

    fn failed(failure: AuthFailure) -> Self {
        Self {
            success: false,
            failure: Some(failure),
        }
    }
}

#[derive(Default)]
struct SessionCell {
    session: Session,
    /// Last ticket handed out
    issued: u64,
    /// Ticket of the last operation whose result was applied
    applied: u64,
    bootstrap_started: bool,
}

struct Inner<T> {
    client: ApiClient<T>,
    cell: Mutex<SessionCell>,
}

/// Explicitly constructed, shared by handle. Clones observe the same cell.
pub struct SessionStore<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for SessionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for SessionStore<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Transport> SessionStore<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                cell: Mutex::new(SessionCell::default()),
            }),
        }
    }

    /// Client sharing this session's cookies, for page data.
    pub fn client(&self) -> &ApiClient<T> {
        &self.inner.client
    }

    pub fn snapshot(&self) -> Session {
        self.cell().session.clone()
    }

    fn cell(&self) -> MutexGuard<'_, SessionCell> {
        // The cell holds plain data; a panic elsewhere can't leave it torn
        self.inner.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> u64 {
        let mut cell = self.cell();
        cell.issued += 1;
        cell.issued
    }

    /// Apply `update` unless a later operation already has. Returns whether
    /// it was applied.
    fn commit(&self, ticket: u64, update: impl FnOnce(&mut Session)) -> bool {
        let mut cell = self.cell();
        if ticket < cell.applied {
            return false;
        }
        update(&mut cell.session);
        cell.applied = ticket;
        true
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Reconcile with the backend once at startup.
    ///
    /// Resolves the loading state exactly once; later calls return the
    /// current snapshot without touching the network.
    pub async fn bootstrap(&self) -> Session {
        let ticket = {
            let mut cell = self.cell();
            if cell.bootstrap_started {
                debug!("Session bootstrap already started");
                return cell.session.clone();
            }
            cell.bootstrap_started = true;
            cell.issued += 1;
            cell.issued
        };

        let identity = match self.check_session().await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Session check failed, continuing signed out: {}", e);
                None
            }
        };

        let mut cell = self.cell();
        cell.session.loading = LoadingState::Resolved;
        if ticket >= cell.applied {
            cell.session.identity = identity;
            cell.applied = ticket;
        } else {
            debug!(ticket, applied = cell.applied, "Discarding stale session check");
        }

        info!(status = %cell.session.status(), "Session resolved");
        cell.session.clone()
    }

    async fn check_session(&self) -> Result<Option<UserIdentity>, ApiError> {
        self.inner.client.fetch_csrf().await?;
        Ok(self.inner.client.current_user().await?.identity())
    }

    pub async fn login(&self, credentials: &Credentials) -> AuthOutcome {
        let ticket = self.begin();
        self.ensure_csrf().await;
        let result = self.inner.client.login(credentials).await;
        self.finish_auth("login", ticket, result)
    }

    /// Create an account; the backend signs it in on success.
    pub async fn register(&self, profile: &RegistrationProfile) -> AuthOutcome {
        let ticket = self.begin();
        self.ensure_csrf().await;
        let result = self.inner.client.register(profile).await;
        self.finish_auth("register", ticket, result)
    }

    /// Sign out. The identity is cleared even if the request fails.
    pub async fn logout(&self) -> Session {
        let ticket = self.begin();
        if let Err(e) = self.inner.client.logout().await {
            warn!("Logout request failed, clearing local session anyway: {}", e);
        }

        if !self.commit(ticket, |session| session.identity = None) {
            debug!(ticket, "Logout superseded by a newer session operation");
        } else {
            info!("Signed out");
        }
        self.snapshot()
    }

    /// Mutating calls need the CSRF cookie; bootstrap normally sets it, but
    /// a login can race bootstrap and logout drops the cookie.
    async fn ensure_csrf(&self) {
        if self.inner.client.transport().has_csrf_token() {
            return;
        }
        if let Err(e) = self.inner.client.fetch_csrf().await {
            debug!("CSRF handshake before auth request failed: {}", e);
        }
    }

    fn finish_auth(
        &self,
        operation: &'static str,
        ticket: u64,
        result: Result<AuthResponse, ApiError>,
    ) -> AuthOutcome {
        let user = match result {
            Ok(AuthResponse {
                success: true,
                user: Some(user),
                ..
            }) => user,
            Ok(AuthResponse { success: true, .. }) => {
                warn!(operation, "Backend reported success without a user");
                return AuthOutcome::failed(AuthFailure::Malformed);
            }
            Ok(AuthResponse { error, .. }) => {
                info!(operation, reason = ?error, "Rejected by backend");
                return AuthOutcome::failed(AuthFailure::Rejected { message: error });
            }
            Err(e) => {
                warn!(operation, "Request failed: {}", e);
                return AuthOutcome::failed(AuthFailure::from(&e));
            }
        };

        let username = user.username.clone();
        if self.commit(ticket, |session| session.identity = Some(user)) {
            info!(operation, username = %username, "Signed in");
            AuthOutcome::succeeded()
        } else {
            debug!(operation, ticket, "Result superseded by a newer session operation");
            AuthOutcome::failed(AuthFailure::Superseded)
        }
    }
}
