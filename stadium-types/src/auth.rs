//! Auth endpoint payloads.
//!
//! The backend authenticates with a session cookie. These are the bodies
//! exchanged with `/auth/user/`, `/auth/login/` and `/auth/register/`.

use serde::{Deserialize, Serialize};

/// Identity of the logged-in operator, as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,

    /// Empty when the backend omits it
    #[serde(default)]
    pub email: String,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Two-letter initials for avatar badges ("monu sharma" -> "MS").
    pub fn initials(&self) -> String {
        let mut initials: String = self
            .username
            .split(|c: char| c.is_whitespace() || c == '_' || c == '.' || c == '-')
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            initials.push('?');
        }
        initials.to_uppercase()
    }
}

/// Login form submission. Never persisted.
#[derive(Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the secret out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form submission.
#[derive(Clone, Serialize, PartialEq)]
pub struct RegistrationProfile {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `GET /auth/user/` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentUserResponse {
    pub is_authenticated: bool,

    /// Present only when authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,
}

impl CurrentUserResponse {
    /// The identity the response vouches for, if any.
    ///
    /// An authenticated flag without a user body is treated as anonymous.
    pub fn identity(self) -> Option<UserIdentity> {
        if self.is_authenticated {
            self.user
        } else {
            None
        }
    }
}

/// `POST /auth/login/` and `POST /auth/register/` response.
///
/// Rejections come back with HTTP 400 and `success: false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,

    /// Human-readable rejection reason ("Invalid credentials", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
