mod database;
mod logging;

pub use database::init_database;
pub use logging::{init_logging, LogTarget};

use fertibase_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).map_err(|e| anyhow::anyhow!(e))
}
