#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenIssuer;
use auth_service::config::CookieConfig;
use auth_service::domain::user::errors::UserError;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::models::Username;
use auth_service::domain::user::ports::UserRepository;
use auth_service::domain::user::service::UserService;
use auth_service::inbound::http::router::create_router;
use tokio::sync::RwLock;

pub const ACCESS_SECRET: &[u8] = b"test-access-secret-for-jwt-signing-32-bytes";
pub const REFRESH_SECRET: &[u8] = b"test-refresh-secret-for-jwt-signing-32-byte";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(repository.clone()));
        let authenticator = Arc::new(Authenticator::new(test_token_issuer()));

        let router = create_router(user_service, authenticator, CookieConfig::default());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            api_client: new_client(),
            token_issuer: test_token_issuer(),
        }
    }

    /// Register a user with the given username and a derived email.
    pub async fn register(&self, username: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({
                "fullName": "Jane Doe",
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the access token; the refresh cookie lands in the client's jar.
    pub async fn login(&self, email_or_username: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({
                "emailOrUsername": email_or_username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["accessToken"].as_str().unwrap().to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// POST with an explicit `Cookie` header on a client without a cookie jar.
    pub fn post_with_cookie(&self, path: &str, cookie: &str) -> reqwest::RequestBuilder {
        reqwest::Client::new()
            .post(format!("{}{}", self.address, path))
            .header(reqwest::header::COOKIE, cookie)
    }
}

pub fn new_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client")
}

pub fn test_token_issuer() -> TokenIssuer {
    TokenIssuer::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        chrono::Duration::minutes(15),
        chrono::Duration::days(7),
    )
}

/// Repository backed by a map, enforcing the same uniqueness rules as the
/// `users` table constraints.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub async fn stored(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned()
    }

    pub async fn remove(&self, id: &UserId) {
        self.users.write().await.remove(id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_email_or_username(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == identifier || u.username.as_str() == identifier)
            .cloned())
    }
}
