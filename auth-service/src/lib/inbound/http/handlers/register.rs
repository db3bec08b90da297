use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldIssues;
use crate::domain::user::models::parse_date_of_birth;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<PublicUserData>, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
///
/// Missing fields decode as empty strings so they are reported by validation
/// alongside every other issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    dob: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let mut issues = FieldIssues::new();

        let full_name = issues.check("fullName", FullName::new(self.full_name));
        let username = issues.check("username", Username::new(self.username));
        let email = issues.check("email", EmailAddress::new(self.email));
        let password = issues.check("password", Password::new(self.password));
        let date_of_birth = match self.dob.as_deref().filter(|dob| !dob.trim().is_empty()) {
            Some(raw) => issues.check("dob", parse_date_of_birth(raw)),
            None => None,
        };

        let (Some(full_name), Some(username), Some(email), Some(password)) =
            (full_name, username, email, password)
        else {
            return Err(issues.into_error());
        };
        issues.into_result()?;

        Ok(RegisterCommand {
            full_name,
            username,
            email,
            password,
            date_of_birth,
        })
    }
}

/// Public projection of a user; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserData {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for PublicUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.as_str().to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
