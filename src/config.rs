use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "cats_db";
pub const DEFAULT_COLLECTION: &str = "cats";
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatshellConfig {
    /// MongoDB connection string
    pub mongo_uri: String,

    /// Name of the database holding the cat collection
    pub database: String,

    /// Name of the cat collection
    pub collection: String,

    /// How long to wait for a suitable server before giving up (default: 5 seconds)
    pub server_selection_timeout_ms: u64,
}

impl Default for CatshellConfig {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            server_selection_timeout_ms: DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        }
    }
}

impl CatshellConfig {
    /// Function to create and initialize a new configuration
    ///
    /// Settings are read from the optional TOML file first, then overridden by
    /// `CATSHELL_*` environment variables. Nothing is written to disk.
    pub fn new(path: &Option<String>) -> Result<CatshellConfig> {
        let mut builder = Config::builder();

        if let Some(p) = path {
            let path = Path::new(p.as_str());
            if !path.exists() {
                return Err(anyhow!("Config file {} does not exist", p));
            }
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow!("Could not convert path to string"))?;
            builder = builder.add_source(config::File::with_name(path_str));
        }

        // E.g., `CATSHELL_MONGO_URI=mongodb://db:27017 ./catshell`
        builder = builder.add_source(config::Environment::with_prefix("CATSHELL"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        Self::from_map(&config)
    }

    fn from_map(config: &HashMap<String, String>) -> Result<CatshellConfig> {
        let text = |key: &str, default: &str| -> String {
            match config.get(key) {
                Some(v) if !v.trim().is_empty() => v.trim().to_string(),
                _ => default.to_string(),
            }
        };

        let server_selection_timeout_ms = match config.get("server_selection_timeout_ms") {
            Some(s) => s.trim().parse().map_err(|_| {
                anyhow!(
                    "server_selection_timeout_ms must be a number of milliseconds, got '{}'",
                    s
                )
            })?,
            None => DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        };

        Ok(CatshellConfig {
            mongo_uri: text("mongo_uri", DEFAULT_MONGO_URI),
            database: text("database", DEFAULT_DATABASE),
            collection: text("collection", DEFAULT_COLLECTION),
            server_selection_timeout_ms,
        })
    }

    /// Get the server selection timeout as Duration
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.server_selection_timeout_ms)
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        [
            format!("MongoDB URI:        {}", self.mongo_uri),
            format!("Database:           {}", self.database),
            format!("Collection:         {}", self.collection),
            format!(
                "Selection Timeout:  {} ms",
                self.server_selection_timeout_ms
            ),
        ]
        .join("\n")
    }
}
