pub mod database;
pub mod errors;
pub mod logging;
pub mod remote;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use remote::RemoteCatalogConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
