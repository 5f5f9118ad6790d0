use crate::message::model::Message;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

/// Decodes a request from a JSON object. Going through the object first keeps
/// JSON arrays from being accepted as positional struct fields.
pub fn from_object<Request: DeserializeOwned>(object: JsonObject) -> Option<Request> {
	serde_json::from_value(Value::Object(object)).ok()
}

/// Fields are optional so that a missing key can be told apart from an empty value.
#[derive(Deserialize)]
pub struct CreateMessageRequest {
	pub username: Option<String>,
	pub body: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateMessageRequest {
	pub body: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
	pub id: i64,
	pub username: String,
	pub body: String,
	pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
	fn from(
		Message {
			id,
			username,
			body,
			created_at,
		}: Message,
	) -> Self {
		Self {
			id,
			username,
			body,
			created_at,
		}
	}
}
