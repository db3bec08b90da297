use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use super::register::PublicUserData;
use super::ApiError;
use super::ApiSuccess;
use super::FieldIssues;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginIdentifier;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;

/// Same message for an unknown identifier and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let Json(body) = body?;
    let (identifier, password) = body.validate()?;

    let user = match state.user_service.get_user_by_login(&identifier).await {
        Ok(user) => user,
        Err(UserError::InvalidCredentials) => {
            state.authenticator.reject_unknown_user(password.expose());
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let tokens = state
        .authenticator
        .authenticate(
            password.expose(),
            &user.password_hash,
            user.id,
            user.username.as_str(),
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    tracing::info!(user_id = %user.id, "User logged in");

    let jar = jar.add(state.refresh_cookie.issue(tokens.refresh_token));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                access_token: tokens.access_token,
                user: (&user).into(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    #[serde(default)]
    email_or_username: String,
    #[serde(default)]
    password: String,
}

impl LoginRequestBody {
    fn validate(self) -> Result<(LoginIdentifier, Password), ApiError> {
        let mut issues = FieldIssues::new();

        let identifier = issues.check(
            "emailOrUsername",
            LoginIdentifier::new(self.email_or_username),
        );
        let password = issues.check("password", Password::new(self.password));

        match (identifier, password) {
            (Some(identifier), Some(password)) => Ok((identifier, password)),
            _ => Err(issues.into_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
    pub user: PublicUserData,
}
