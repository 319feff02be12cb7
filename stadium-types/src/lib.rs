//! Shared wire protocol types for the Smart Stadium operations API.
//!
//! This crate defines the types that cross the boundary between the
//! stadium backend (a session-cookie REST API) and its consumers:
//! - the Dioxus operations console (WASM client)
//! - the `session-check` diagnostic binary
//!
//! # Modules
//! - [`auth`] - Session identity and auth endpoint payloads
//! - [`venue`] - Crowd zones, energy meters, tickets, merchandise, logs
//! - [`dashboard`] - Aggregated dashboard payload

pub mod auth;
pub mod dashboard;
pub mod venue;

mod money;

// Re-export commonly used types at crate root
pub use auth::{AuthResponse, Credentials, CurrentUserResponse, RegistrationProfile, UserIdentity};
pub use dashboard::{ActivityEntry, DashboardData};
pub use venue::{
    CrowdPrediction, CrowdZone, EnergyMeter, EnergyOverview, MerchandiseItem, RiskLevel,
    SystemLog, Ticket, TicketScan, TicketValidation, UsagePoint, ZoneStatus,
};
