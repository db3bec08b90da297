use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use super::health::OkResponseData;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Clear the refresh cookie. Idempotent: there is no server-side session.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<OkResponseData>) {
    let jar = jar.add(state.refresh_cookie.removal());

    (jar, ApiSuccess::new(StatusCode::OK, OkResponseData::ok()))
}
