use std::sync::{Mutex, MutexGuard, PoisonError};

use diesel::prelude::*;

use crate::config::Config;

// The schema tests share one live database; hold this while a test drops
// and recreates the tables so runs do not race each other.
static DB_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_db() -> MutexGuard<'static, ()> {
	DB_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn test_config() -> Config {
	dotenv::dotenv().ok();
	let database_url = std::env::var("TEST_DATABASE_URL")
		.or_else(|_| std::env::var("DATABASE_URL"))
		.expect("TEST_DATABASE_URL or DATABASE_URL must be set");
	Config { database_url }
}

pub fn connect(config: &Config) -> PgConnection {
	PgConnection::establish(&config.database_url).expect("failed to connect to the test database")
}

pub fn reset_db(conn: &mut PgConnection) {
	diesel::sql_query("DROP TABLE IF EXISTS transactions")
		.execute(conn)
		.expect("failed to drop transactions");
	diesel::sql_query("DROP TABLE IF EXISTS users CASCADE")
		.execute(conn)
		.expect("failed to drop users");
}
