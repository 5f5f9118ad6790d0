use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::message::model::Message;
use crate::message::repository::MessageRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{query, query_as};

#[async_trait]
impl MessageRepository for SqliteRepository {
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Message>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, username, body, created_at
			FROM messages
			ORDER BY created_at ASC, id ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn get(&self, connection: &mut dyn Connection, id: i64) -> Result<Option<Message>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, username, body, created_at
			FROM messages
			WHERE id = ?1",
		)
		.bind(id)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(&self, connection: &mut dyn Connection, username: &str, body: &str) -> Result<Message, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO messages(username, body) VALUES (?1, ?2)
			RETURNING
				id,
				username,
				body,
				created_at",
		)
		.bind(username)
		.bind(body)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn update_body(&self, connection: &mut dyn Connection, id: i64, body: &str) -> Result<Message, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"UPDATE messages
			SET body = ?1
			WHERE id = ?2
			RETURNING
				id,
				username,
				body,
				created_at",
		)
		.bind(body)
		.bind(id)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn remove(&self, connection: &mut dyn Connection, id: i64) -> Result<(), DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let result = query(r"DELETE FROM messages WHERE id = ?1")
			.bind(id)
			.execute(connection)
			.await?;
		if result.rows_affected() == 0 {
			return Err(DatabaseError::NotFound(anyhow!("No message with id {id}")));
		}

		Ok(())
	}
}
