use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Tokens handed out by a successful login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived bearer token
    pub access_token: String,
    /// Long-lived token, delivered to the client as a cookie
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(token_issuer: TokenIssuer) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }

    /// Reject a login for an identifier that matched no account.
    ///
    /// Pays for one password verification against a decoy digest so the
    /// failure takes as long as a wrong password would.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_decoy(password);
        AuthenticationError::InvalidCredentials
    }

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Subject of both tokens
    /// * `username` - Username embedded in the access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is unreadable)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let user_id = user_id.to_string();
        let access_token = self
            .token_issuer
            .sign_access(&user_id, Some(username.to_string()))?;
        let refresh_token = self.token_issuer.sign_refresh(&user_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Mint a fresh access token from a refresh token.
    ///
    /// The refresh token itself is left untouched (no rotation).
    ///
    /// # Errors
    /// * `TokenExpired` / `InvalidToken` - Refresh token rejected
    /// * `EncodingFailed` - New token could not be signed
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, JwtError> {
        let claims = self.token_issuer.verify_refresh(refresh_token)?;
        self.token_issuer.sign_access(claims.sub, None)
    }

    /// Validate and decode an access token.
    pub fn validate_access_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.token_issuer.verify_access(token)
    }
}
