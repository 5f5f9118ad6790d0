use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::message::model;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
	/// All messages, oldest first.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::Message>, DatabaseError>;
	async fn get(&self, connection: &mut dyn Connection, id: i64) -> Result<Option<model::Message>, DatabaseError>;
	async fn create(
		&self,
		connection: &mut dyn Connection,
		username: &str,
		body: &str,
	) -> Result<model::Message, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if there is no message with the given `id`.
	async fn update_body(
		&self,
		connection: &mut dyn Connection,
		id: i64,
		body: &str,
	) -> Result<model::Message, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if there is no message with the given `id`.
	async fn remove(&self, connection: &mut dyn Connection, id: i64) -> Result<(), DatabaseError>;
}

assert_obj_safe!(MessageRepository);
