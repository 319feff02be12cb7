//! Shared UI components for the Dioxus fullstack web UI.

pub mod cards;
pub mod gate;
pub mod layout;
pub mod nav;

pub use cards::{ErrorCard, KpiCard, LoadingCard, PageHeader};
pub use gate::AuthGate;
pub use layout::{PublicFrame, Shell};
pub use nav::Nav;
