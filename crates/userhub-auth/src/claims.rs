use serde::{Deserialize, Serialize};
use userhub_models::{Role, UserId};

/// Claims carried by an access token.
///
/// Serialized as `{"userId": "...", "role": "USER", "iat": 0, "exp": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
