//! Client for the CollegeMedia auth service.
//!
//! ```no_run
//! use auth_client::AuthClient;
//! use auth_client::LoginData;
//!
//! # async fn run() -> Result<(), auth_client::ClientError> {
//! let client = AuthClient::new("http://localhost:4000")?;
//! let user = client
//!     .login(&LoginData {
//!         email_or_username: "janedoe".to_string(),
//!         password: "secret1".to_string(),
//!     })
//!     .await?;
//! println!("signed in as {}", user.username);
//!
//! // Later, once the access token has expired:
//! client.refresh_token().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod models;

pub use client::AuthClient;
pub use errors::ClientError;
pub use models::LoginData;
pub use models::RegisterData;
pub use models::User;
