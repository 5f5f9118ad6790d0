use crate::database::error::{DatabaseError, IntoStoreResult};
use crate::database::{Connection, Database, Repository};
use crate::message::repository::MessageRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, migrate};
use std::any::Any;
use std::ops::DerefMut;
use std::str::FromStr;

mod message;

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
		let options = SqliteConnectOptions::from_str(database_url)
			.connection_error("Invalid database URL")?
			.create_if_missing(true);

		// An in-memory database only lives as long as one of its connections,
		// keep exactly one open for the lifetime of the pool.
		let pool_options = if is_in_memory(database_url) {
			SqlitePoolOptions::new()
				.max_connections(1)
				.min_connections(1)
				.idle_timeout(None)
				.max_lifetime(None)
		} else {
			SqlitePoolOptions::new().max_connections(max_connections)
		};

		let pool = pool_options
			.connect_with(options)
			.await
			.connection_error("Failed to connect to database")?;

		Ok(Self { pool })
	}
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn migrate(&self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}
}

impl Connection for PoolConnection<Sqlite> {}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn message(&self) -> &dyn MessageRepository {
		self
	}
}

fn is_in_memory(database_url: &str) -> bool {
	database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;
	connection
		.downcast_mut::<PoolConnection<Sqlite>>()
		.map(DerefMut::deref_mut)
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
