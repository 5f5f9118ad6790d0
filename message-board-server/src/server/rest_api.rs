use crate::context::ApplicationContext;
use crate::database::{Database, Repository};
use crate::message::MessageError;
use crate::server::rest_api::models::{
	CreateMessageRequest, JsonObject, MessageResponse, UpdateMessageRequest, from_object,
};
use crate::server::rest_api::response::Created;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::debug;

mod error;
mod models;
mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/messages", get(list_messages).post(create_message))
		.route("/messages/{id}", patch(update_message).delete(delete_message))
}

async fn list_messages(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
) -> Result<Json<Vec<MessageResponse>>, MessageError> {
	let mut connection = database.connection().await?;
	let messages = repository.message().list(connection.as_mut()).await?;

	Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

async fn create_message(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	request: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Created<Json<MessageResponse>>, MessageError> {
	let Some(CreateMessageRequest {
		username: Some(username),
		body: Some(body),
	}) = request.ok().and_then(|Json(object)| from_object(object))
	else {
		return Err(MessageError::InvalidInput);
	};

	let mut connection = database.connection().await?;
	let message = repository
		.message()
		.create(connection.as_mut(), &username, &body)
		.await?;
	debug!(id = message.id, username = %message.username, "Created message");

	Ok(Created(Json(message.into())))
}

async fn update_message(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	id: Result<Path<String>, PathRejection>,
	request: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Json<MessageResponse>, MessageError> {
	let id = message_id(id)?;
	let Some(UpdateMessageRequest { body: Some(body) }) = request.ok().and_then(|Json(object)| from_object(object)) else {
		return Err(MessageError::InvalidInput);
	};

	let mut connection = database.connection().await?;
	let message = repository
		.message()
		.update_body(connection.as_mut(), id, &body)
		.await?;
	debug!(id, "Updated message");

	Ok(Json(message.into()))
}

async fn delete_message(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, MessageError> {
	let id = message_id(id)?;

	let mut connection = database.connection().await?;
	repository.message().remove(connection.as_mut(), id).await?;
	debug!(id, "Deleted message");

	Ok(StatusCode::NO_CONTENT)
}

/// Only plain digit sequences name a message, anything else (signs included) matches nothing.
fn message_id(id: Result<Path<String>, PathRejection>) -> Result<i64, MessageError> {
	id.ok()
		.and_then(|Path(id)| parse_message_id(&id))
		.ok_or(MessageError::NotFound)
}

fn parse_message_id(segment: &str) -> Option<i64> {
	if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	segment.parse().ok()
}
