//! Dioxus fullstack page components.
//!
//! Public pages render inside [`PublicFrame`](crate::app::components::PublicFrame);
//! the operations pages render inside the gate's shell.

mod analytics;
mod crowd;
mod dashboard;
mod energy;
mod landing;
mod login;
mod merchandise;
mod not_found;
mod register;
mod sustainability;
mod ticketing;

pub use analytics::Analytics;
pub use crowd::Crowd;
pub use dashboard::Dashboard;
pub use energy::Energy;
pub use landing::Landing;
pub use login::Login;
pub use merchandise::Merchandise;
pub use not_found::NotFound;
pub use register::Register;
pub use sustainability::Sustainability;
pub use ticketing::Ticketing;
