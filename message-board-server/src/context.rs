use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub database: Arc<dyn Database>,
	pub repository: Arc<dyn Repository>,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let database = SqliteDatabase::connect(&configuration.database.url, configuration.database.max_connections).await?;
		database.migrate().await?;

		Ok(Self {
			configuration,
			database: Arc::new(database),
			repository: Arc::new(SqliteRepository),
		})
	}
}
