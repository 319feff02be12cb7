//! Client-side belief about who is signed in.

use stadium_types::UserIdentity;

/// Whether the startup session check has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Pending,
    Resolved,
}

/// Snapshot of the session cell.
///
/// While [`LoadingState::Pending`] the identity is not authoritative: the
/// backend may still vouch for a cookie the client doesn't know about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(crate) identity: Option<UserIdentity>,
    pub(crate) loading: LoadingState,
}

/// What the session means for routing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStatus<'a> {
    /// Bootstrap still running and nobody has signed in meanwhile
    Unknown,
    Anonymous,
    Authenticated(&'a UserIdentity),
}

impl Session {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading
    }

    pub fn is_resolved(&self) -> bool {
        self.loading == LoadingState::Resolved
    }

    /// The signed-in operator, for display.
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    pub fn status(&self) -> SessionStatus<'_> {
        match (&self.identity, self.loading) {
            // An explicit login during bootstrap is authoritative
            (Some(user), _) => SessionStatus::Authenticated(user),
            (None, LoadingState::Pending) => SessionStatus::Unknown,
            (None, LoadingState::Resolved) => SessionStatus::Anonymous,
        }
    }
}

impl std::fmt::Display for SessionStatus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown (session check pending)"),
            Self::Anonymous => write!(f, "anonymous"),
            Self::Authenticated(user) => write!(f, "authenticated as {}", user.username),
        }
    }
}
