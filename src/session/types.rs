//! Response types for the Authentication Service endpoints.

use serde::{Deserialize, Serialize};

/// Role names the service issues today. The `role` field stays an opaque
/// string on the wire so unknown roles pass through untouched.
pub mod role {
    pub const STUDENT: &str = "student";
    pub const ADVISOR: &str = "advisor";
    pub const ADMIN: &str = "admin";
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

impl UserProfile {
    /// Name shown to the user: full name when present, email otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
