//! Session context for the Dioxus app.
//!
//! One [`SessionStore`] is constructed at the app root and shared with every
//! page through context. A signal mirrors the store so components re-render
//! when the session changes.

use dioxus::prelude::*;

use stadium_types::{Credentials, RegistrationProfile};

use crate::client::ApiClient;
use crate::config::ClientSettings;
use crate::session::{AccessPolicy, AuthOutcome, Session, SessionStore};
use crate::transport::PlatformTransport;

#[derive(Clone)]
pub struct SessionContext {
    /// Reactive copy of the store's cell
    pub state: Signal<Session>,
    pub store: SessionStore<PlatformTransport>,
    pub policy: AccessPolicy,
    pub settings: ClientSettings,
}

impl SessionContext {
    pub fn session(&self) -> Session {
        self.state.read().clone()
    }

    pub async fn login(&self, credentials: Credentials) -> AuthOutcome {
        let outcome = self.store.login(&credentials).await;
        self.sync();
        outcome
    }

    pub async fn register(&self, profile: RegistrationProfile) -> AuthOutcome {
        let outcome = self.store.register(&profile).await;
        self.sync();
        outcome
    }

    pub async fn logout(&self) {
        self.store.logout().await;
        self.sync();
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.store.snapshot());
    }
}

/// Create the session context at the app root and start the bootstrap check.
pub fn use_session_provider() -> SessionContext {
    let state = use_signal(Session::pending);

    let ctx = use_context_provider(|| {
        let settings = ClientSettings::current();
        let transport = PlatformTransport::new(settings.clone());
        SessionContext {
            state,
            store: SessionStore::new(ApiClient::new(transport)),
            policy: AccessPolicy {
                require_authentication: settings.require_authentication,
            },
            settings,
        }
    });

    // Effects only run in the browser, so SSR always renders the pending state
    let bootstrap_ctx = ctx.clone();
    use_effect(move || {
        let ctx = bootstrap_ctx.clone();
        spawn(async move {
            ctx.store.bootstrap().await;
            ctx.sync();
        });
    });

    ctx
}

/// Session context provided by [`use_session_provider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
