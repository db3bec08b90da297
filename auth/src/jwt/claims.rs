use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a short-lived access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username, absent when the token was minted from a refresh token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create access claims for a user, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username to embed, if known
    /// * `ttl` - Lifetime of the token
    pub fn for_user(user_id: impl ToString, username: Option<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Minimal claim set of a refresh token: the user id and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn for_user(user_id: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
