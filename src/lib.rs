//! Smart Stadium - operations console for a stadium's venue systems.
//!
//! This library provides:
//! - A session store that tracks who is signed in against a cookie-session backend
//! - The protected-route gate in front of the operations pages
//! - Typed access to the backend's ticketing, crowd, energy and retail data
//! - Web UI (Dioxus + Pico CSS), rendered on the server and hydrated in the browser

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Session core (shared)
pub mod client;
pub mod config;
pub mod error;
pub mod insights;
pub mod session;
pub mod transport;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;

pub use client::ApiClient;
pub use error::{ApiError, AuthFailure};
pub use session::{AccessPolicy, AuthOutcome, GateDecision, Session, SessionStore};
