use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod message;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
	r#type: &'static str,
	status: u16,
	description: String,
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}
