//! Session state, the store that synchronizes it with the backend, and the
//! route gate built on top of it.

pub mod gate;
pub mod state;
pub mod store;

pub use gate::{decide, AccessPolicy, GateDecision};
pub use state::{LoadingState, Session, SessionStatus};
pub use store::{AuthOutcome, SessionStore};
