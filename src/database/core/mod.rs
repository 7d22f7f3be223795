//! Core database infrastructure
//!
//! This module provides the foundational database components used throughout catshell:
//! - `MongoConn`: MongoDB client bootstrap and collection handles
//! - `BootstrapError`: fatal startup failures

mod connection;

pub use connection::{BootstrapError, MongoConn};
