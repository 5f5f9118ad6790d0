use crate::message::MessageError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

impl From<MessageError> for ApiErrorResponse {
	fn from(error: MessageError) -> Self {
		use MessageError::*;
		match error {
			InvalidInput => ApiErrorResponse {
				r#type: "invalid-input",
				status: StatusCode::BAD_REQUEST.as_u16(),
				description: error.to_string(),
			},
			NotFound => ApiErrorResponse {
				r#type: "message-not-found",
				status: StatusCode::NOT_FOUND.as_u16(),
				description: error.to_string(),
			},
			Database(_) => ApiErrorResponse {
				r#type: "internal-error",
				status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
				description: "Internal server error".to_string(),
			},
		}
	}
}

impl IntoResponse for MessageError {
	fn into_response(self) -> Response {
		if let MessageError::Database(database_error) = &self {
			error!(?database_error, "Request failed: {database_error}");
		}
		ApiErrorResponse::from(self).into_response()
	}
}
