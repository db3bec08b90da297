use chrono::Duration;

use super::claims::AccessClaims;
use super::claims::RefreshClaims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Mints and verifies the two token kinds of a session.
///
/// Access and refresh tokens are signed with distinct secrets, so a token of
/// one kind never verifies as the other.
pub struct TokenIssuer {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `access_secret` - Secret for access tokens
    /// * `refresh_secret` - Secret for refresh tokens
    /// * `access_ttl` - Lifetime of access tokens
    /// * `refresh_ttl` - Lifetime of refresh tokens
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Sign a new access token for a user.
    pub fn sign_access(
        &self,
        user_id: impl ToString,
        username: Option<String>,
    ) -> Result<String, JwtError> {
        let claims = AccessClaims::for_user(user_id, username, self.access_ttl);
        self.access.encode(&claims)
    }

    /// Sign a new refresh token carrying only the user id.
    pub fn sign_refresh(&self, user_id: impl ToString) -> Result<String, JwtError> {
        let claims = RefreshClaims::for_user(user_id, self.refresh_ttl);
        self.refresh.encode(&claims)
    }

    /// Verify an access token's signature and expiry.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.access.decode(token)
    }

    /// Verify a refresh token's signature and expiry.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `InvalidToken` - Signature mismatch or malformed token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, JwtError> {
        self.refresh.decode(token)
    }
}
