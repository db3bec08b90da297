//! Authentication utilities library
//!
//! Provides the session primitives used by the CollegeMedia backend:
//! - Password hashing (Argon2id)
//! - Access/refresh JWT issuance and verification
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_long",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//! let refresh = issuer.sign_refresh("user123").unwrap();
//! let claims = issuer.verify_refresh(&refresh).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenIssuer};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_long",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! ));
//!
//! // Register: hash password
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify and issue tokens
//! let pair = auth.authenticate("password123", &hash, "user123", "alice").unwrap();
//!
//! // Refresh: mint a new access token
//! let access_token = auth.refresh_access_token(&pair.refresh_token).unwrap();
//! let claims = auth.validate_access_token(&access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::RefreshClaims;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
