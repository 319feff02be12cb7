//! Route guard decision, independent of the UI framework.

use super::state::{Session, SessionStatus};

pub const LOGIN_ROUTE: &str = "/login";

/// Public pages; everything in [`GUARDED_ROUTES`] sits behind the gate.
pub const PUBLIC_ROUTES: [&str; 3] = ["/", "/login", "/register"];

pub const GUARDED_ROUTES: [&str; 7] = [
    "/dashboard",
    "/crowd",
    "/ticketing",
    "/energy",
    "/merchandise",
    "/analytics",
    "/sustainability",
];

/// Whether anonymous visitors may see the operations pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub require_authentication: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            require_authentication: true,
        }
    }
}

impl AccessPolicy {
    pub fn open() -> Self {
        Self {
            require_authentication: false,
        }
    }
}

/// What the gate does for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session check still running: show a placeholder, navigate nowhere
    Loading,
    /// Send the visitor elsewhere; `replace` keeps the guarded page out of history
    Redirect { to: &'static str, replace: bool },
    /// Render the shell with the requested page inside
    Render,
}

pub fn decide(session: &Session, policy: AccessPolicy) -> GateDecision {
    if !policy.require_authentication {
        return GateDecision::Render;
    }
    match session.status() {
        SessionStatus::Unknown => GateDecision::Loading,
        SessionStatus::Anonymous => GateDecision::Redirect {
            to: LOGIN_ROUTE,
            replace: true,
        },
        SessionStatus::Authenticated(_) => GateDecision::Render,
    }
}

/// Gate decision for an arbitrary path; public pages always render.
pub fn decide_for_path(path: &str, session: &Session, policy: AccessPolicy) -> GateDecision {
    if is_guarded(path) {
        decide(session, policy)
    } else {
        GateDecision::Render
    }
}

pub fn is_guarded(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    GUARDED_ROUTES
        .iter()
        .any(|route| trimmed == *route || trimmed.starts_with(&format!("{route}/")))
}
