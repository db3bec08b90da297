use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;

pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

/// Message returned for every 500; the cause only goes to the log.
const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl ToString) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    Validation(Vec<FieldIssue>),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldIssue::new("body", rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed with server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::new(SERVER_ERROR_MESSAGE),
                )
            }
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData {
                    error: "Invalid input".to_string(),
                    details: Some(details),
                },
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::new(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ApiErrorData::new(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorData::new(msg)),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound("Not found".to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(ref e) => {
                ApiError::Validation(vec![FieldIssue::new("id", e)])
            }
            UserError::InvalidFullName(ref e) => {
                ApiError::Validation(vec![FieldIssue::new("fullName", e)])
            }
            UserError::InvalidUsername(ref e) => {
                ApiError::Validation(vec![FieldIssue::new("username", e)])
            }
            UserError::InvalidEmail(ref e) => {
                ApiError::Validation(vec![FieldIssue::new("email", e)])
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Error body: `{"error": "...", "details": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldIssue>>,
}

impl ApiErrorData {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Collects field issues while a request body is validated, so the client
/// sees every problem at once.
#[derive(Debug, Default)]
pub struct FieldIssues(Vec<FieldIssue>);

impl FieldIssues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the value on success, record the issue under `field` otherwise.
    pub fn check<T, E: ToString>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(FieldIssue::new(field, e));
                None
            }
        }
    }

    pub fn into_error(self) -> ApiError {
        ApiError::Validation(self.0)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}
