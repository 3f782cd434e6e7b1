use diesel::prelude::*;

use crate::{config::Config, error::SetupError};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
	id SERIAL PRIMARY KEY,
	name VARCHAR(100) NOT NULL,
	username VARCHAR(50) UNIQUE NOT NULL,
	email VARCHAR(100) UNIQUE NOT NULL,
	phone_number VARCHAR(20) UNIQUE,
	password_hash VARCHAR(255) NOT NULL,
	face_descriptor REAL[],
	balance NUMERIC(10, 2) DEFAULT 0.00
);";

const CREATE_TRANSACTIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS transactions (
	id SERIAL PRIMARY KEY,
	sender_id INTEGER NOT NULL,
	recipient_account_number VARCHAR(50) NOT NULL,
	amount NUMERIC(10, 2) NOT NULL,
	timestamp TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP,
	FOREIGN KEY (sender_id) REFERENCES users (id)
);";

pub fn connect(database_url: &str) -> Result<PgConnection, SetupError> {
	let conn = PgConnection::establish(database_url)?;
	log::info!("Connection successful.");
	Ok(conn)
}

/// Ensures the `users` and `transactions` tables exist.
///
/// Both statements are conditioned on table absence, so re-running never
/// errors on pre-existing tables and never alters existing structure. They
/// run inside one transaction: either both tables are committed or neither
/// is. The connection is owned by this call and dropped on every exit path.
pub fn initialize_schema(config: &Config) -> Result<(), SetupError> {
	let mut conn = connect(&config.database_url)?;
	log::info!("Creating tables...");
	conn.transaction(|conn| {
		diesel::sql_query(CREATE_USERS_TABLE).execute(conn)?;
		diesel::sql_query(CREATE_TRANSACTIONS_TABLE).execute(conn)?;
		Ok(())
	})
}
