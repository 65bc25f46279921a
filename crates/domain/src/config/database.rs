use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file. `None` runs the service on an in-memory database.
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Copy the embedded catalog into empty tables at startup.
    #[serde(default)]
    pub seed_from_static: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        match &self.path {
            Some(path) => format!("sqlite:{}", path),
            None => "sqlite::memory:".to_string(),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.is_none()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: default_max_connections(),
            seed_from_static: false,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}
