//! MongoDB connection management
//!
//! This module opens the single client connection used for the whole session
//! and verifies that a server answers before any record operation runs.

use anyhow::anyhow;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Collection};
use std::fmt;
use tracing::{debug, info};

use crate::config::CatshellConfig;

/// Application name reported to the server in the connection handshake
const APP_NAME: &str = "catshell";

/// Fatal startup failure
///
/// Both variants end the process; they only differ in the diagnostic shown.
#[derive(Debug)]
pub enum BootstrapError {
    /// No server answered within the selection timeout
    Unreachable(anyhow::Error),
    /// Any other failure while building the client or probing the server
    Connection(anyhow::Error),
}

impl BootstrapError {
    fn from_driver(e: mongodb::error::Error) -> Self {
        if matches!(e.kind.as_ref(), ErrorKind::ServerSelection { .. }) {
            BootstrapError::Unreachable(e.into())
        } else {
            BootstrapError::Connection(e.into())
        }
    }

    /// User-facing diagnostic printed before exiting
    pub fn diagnostic(&self) -> String {
        match self {
            BootstrapError::Unreachable(_) => {
                "Error: Unable to connect to MongoDB. Check if the server is running.".to_string()
            }
            BootstrapError::Connection(e) => {
                format!("Error: An error occurred connecting to MongoDB: {}", e)
            }
        }
    }
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Unreachable(e) => write!(f, "MongoDB unreachable: {}", e),
            BootstrapError::Connection(e) => write!(f, "MongoDB connection error: {}", e),
        }
    }
}

impl std::error::Error for BootstrapError {}

/// Open connection to the cat collection
///
/// `MongoConn` owns the driver client for the lifetime of the session. The
/// client is released when the value is dropped.
pub struct MongoConn {
    client: Client,
    database: String,
    collection: String,
    server_version: String,
}

impl MongoConn {
    /// Connect to the server described by `config` and run the liveness probe
    ///
    /// The driver connects lazily, so the `buildInfo` probe is what actually
    /// waits for server selection. No retry is attempted.
    pub fn connect(config: &CatshellConfig) -> Result<Self, BootstrapError> {
        let mut options = ClientOptions::parse(config.mongo_uri.as_str())
            .run()
            .map_err(BootstrapError::from_driver)?;
        options.server_selection_timeout = Some(config.server_selection_timeout());
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(BootstrapError::from_driver)?;

        debug!(
            "probing MongoDB server (timeout {} ms)",
            config.server_selection_timeout_ms
        );
        let build_info = client
            .database("admin")
            .run_command(doc! { "buildInfo": 1 })
            .run()
            .map_err(BootstrapError::from_driver)?;

        let server_version = build_info
            .get_str("version")
            .map_err(|e| BootstrapError::Connection(anyhow!("Malformed buildInfo reply: {}", e)))?
            .to_string();

        info!(
            "connected to MongoDB {}, using {}.{}",
            server_version, config.database, config.collection
        );

        Ok(MongoConn {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
            server_version,
        })
    }

    /// Version string reported by the server at startup
    pub fn server_version(&self) -> &str {
        self.server_version.as_str()
    }

    /// Typed handle to the configured collection
    pub fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.client
            .database(self.database.as_str())
            .collection::<T>(self.collection.as_str())
    }
}
