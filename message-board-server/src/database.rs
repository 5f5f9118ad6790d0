use crate::database::error::DatabaseError;
use crate::message::repository::MessageRepository;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use std::any::{Any, type_name};

pub mod error;
pub mod sqlite;

#[async_trait]
pub trait Database: Send + Sync {
	async fn migrate(&self) -> Result<(), DatabaseError>;

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError>;
}

assert_obj_safe!(Database);

/// A connection checked out of a [`Database`]. Dropping it hands it back.
pub trait Connection: Any + Send {
	fn type_name(&self) -> &'static str {
		type_name::<Self>()
	}
}

assert_obj_safe!(Connection);

pub trait Repository: MessageRepository + Send + Sync + 'static {
	fn message(&self) -> &dyn MessageRepository;
}

assert_obj_safe!(Repository);
