pub mod db;
pub mod qdrant;
pub mod schema;
pub mod songs;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn env_dsn() -> Option<String> {
	std::env::var("CADENCE_PG_DSN").ok()
}
