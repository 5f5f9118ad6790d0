use crate::database::error::DatabaseError;
use thiserror::Error;

pub mod model;
pub mod repository;

#[derive(Error, Debug)]
pub enum MessageError {
	#[error("Invalid input")]
	InvalidInput,
	#[error("Message not found")]
	NotFound,
	#[error("Failed to access messages: {0}")]
	Database(#[source] DatabaseError),
}

impl From<DatabaseError> for MessageError {
	fn from(error: DatabaseError) -> Self {
		match error {
			DatabaseError::NotFound(_) => Self::NotFound,
			other => Self::Database(other),
		}
	}
}
