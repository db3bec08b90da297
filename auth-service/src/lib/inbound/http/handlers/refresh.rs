use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Mint a new access token from the refresh cookie.
///
/// The refresh token is not rotated; it stays valid until it expires.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let refresh_token = jar
        .get(state.refresh_cookie.name())
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("No refresh token".to_string()))?;

    let access_token = state
        .authenticator
        .refresh_access_token(&refresh_token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Refresh token rejected");
            ApiError::Unauthorized("Invalid refresh token".to_string())
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData { access_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponseData {
    pub access_token: String,
}
