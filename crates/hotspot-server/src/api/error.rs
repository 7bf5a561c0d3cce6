//! HTTP mapping for `HotspotError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hotspot_core::error::{ClientCode, HotspotError};

/// Wrapper so handlers can `?` core errors straight into a JSON response.
#[derive(Debug)]
pub struct ApiError(pub HotspotError);

impl From<HotspotError> for ApiError {
    fn from(e: HotspotError) -> Self {
        Self(e)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ClientCode::MeasurementFailed => StatusCode::SERVICE_UNAVAILABLE,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let body = json!({
            "error": {
                "code": code.as_str(),
                "msg": self.0.to_string(),
            }
        });
        (status_for(code), Json(body)).into_response()
    }
}
