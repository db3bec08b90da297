use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::debug;
use tracing::warn;

use crate::errors::ClientError;
use crate::models::ErrorBody;
use crate::models::LoginData;
use crate::models::LoginResponse;
use crate::models::RefreshResponse;
use crate::models::RegisterData;
use crate::models::User;

/// Typed client for the auth HTTP API.
///
/// The refresh token lives in the client's cookie jar and is sent back
/// automatically; the access token is cached in memory only.
pub struct AuthClient {
    base_url: String,
    http: Client,
    access_token: RwLock<Option<String>>,
}

impl AuthClient {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:4000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            access_token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, data: &RegisterData) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(data)
            .send()
            .await?;

        parse(response).await
    }

    /// Sign in and cache the returned access token.
    pub async fn login(&self, data: &LoginData) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(data)
            .send()
            .await?;

        let LoginResponse { access_token, user } = parse(response).await?;
        *self.access_token.write().await = Some(access_token);
        debug!(user_id = %user.id, "Signed in");

        Ok(user)
    }

    /// Clear the refresh cookie on the server and drop the cached token.
    ///
    /// The local token is cleared even when the call fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.http.post(self.url("/auth/logout")).send().await;
        *self.access_token.write().await = None;

        parse::<serde_json::Value>(result?).await.map(|_| ())
    }

    /// Fetch the signed-in user's profile.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        let token = self
            .access_token
            .read()
            .await
            .clone()
            .ok_or(ClientError::MissingToken)?;

        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        parse(response).await
    }

    /// Exchange the refresh cookie for a new access token and cache it.
    pub async fn refresh_token(&self) -> Result<String, ClientError> {
        let response = self.http.post(self.url("/auth/refresh")).send().await?;

        let RefreshResponse { access_token } = parse(response).await?;
        *self.access_token.write().await = Some(access_token.clone());

        Ok(access_token)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }
}

/// Decode a success body, or turn the server's `{"error": ...}` into
/// [`ClientError::Api`].
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    warn!(status = status.as_u16(), error = %message, "Auth request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
