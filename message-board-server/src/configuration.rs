use serde::Deserialize;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	pub address: SocketAddr,
	pub log_filters: String,
	pub database: DatabaseConfiguration,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DatabaseConfiguration {
	/// e.g. `sqlite://app.db` or `sqlite::memory:`
	pub url: String,
	#[serde(default = "default_max_connections")]
	pub max_connections: u32,
}

const fn default_max_connections() -> u32 {
	5
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}
