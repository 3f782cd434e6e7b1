use anyhow::{bail, Context};
use std::env;

/// Connection settings for the target database, passed explicitly into the
/// initializer so tests can inject a throwaway database URL.
#[derive(Debug)]
pub struct Config {
	pub database_url: String,
}

impl Config {
	pub fn from_env() -> anyhow::Result<Self> {
		let database_url =
			env::var("DATABASE_URL").context("DATABASE_URL must be set in the environment or .env file")?;
		if database_url.is_empty() {
			bail!("DATABASE_URL is empty");
		}
		Ok(Self { database_url })
	}
}
