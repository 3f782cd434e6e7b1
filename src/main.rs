mod config;
mod db;
mod error;
mod models;
mod schema;
#[cfg(test)]
mod tests;

use dotenv::dotenv;
use env_logger::Env;

use crate::config::Config;

fn main() {
	dotenv().ok();
	env_logger::init_from_env(Env::default().default_filter_or("info"));

	println!("Connecting to the database...");
	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			log::error!("Configuration error: {:?}", e);
			println!("Error connecting to or setting up the database: {}", e);
			println!("Database connection closed.");
			return;
		},
	};

	match db::initialize_schema(&config) {
		Ok(()) => println!("Tables created successfully."),
		Err(e) => {
			log::error!("Schema setup failed: {:?}", e);
			println!("Error connecting to or setting up the database: {}", e);
		},
	}
	println!("Database connection closed.");
}
