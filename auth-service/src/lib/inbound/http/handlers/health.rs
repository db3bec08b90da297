use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn health() -> ApiSuccess<OkResponseData> {
    ApiSuccess::new(StatusCode::OK, OkResponseData::ok())
}

/// `{"ok": true}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OkResponseData {
    pub ok: bool,
}

impl OkResponseData {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
