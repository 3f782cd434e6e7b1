use thiserror::Error;

/// Failures the schema initializer distinguishes for its callers.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("failed to connect to the database: {0}")]
	ConnectionFailed(#[from] diesel::ConnectionError),
	#[error("failed to set up the schema: {0}")]
	StatementFailed(#[from] diesel::result::Error),
}
