use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Message {
	pub id: i64,
	pub username: String,
	pub body: String,
	pub created_at: DateTime<Utc>,
}
