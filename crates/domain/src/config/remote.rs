use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the resolver fetches catalog records from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteCatalogConfig {
    /// Base URL including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Extra attempts for single-record lookups after a transport failure.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl RemoteCatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RemoteCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_retries() -> u32 {
    1
}
