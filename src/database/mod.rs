//! Database module
//!
//! This module provides all database functionality for catshell, organized into:
//!
//! - **core**: Connection bootstrap (MongoDB client, liveness probe, startup errors)
//! - **cats**: The cat record type and the stores that hold it
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/           # Foundation
//! │   └── connection  # MongoConn client wrapper and BootstrapError
//! │
//! └── cats/           # Record storage
//!     ├── record      # CatRecord (insert form), StoredCat (raw stored document)
//!     ├── store       # CatStore trait (the collection contract)
//!     ├── repository  # CatRepository (MongoDB)
//!     └── memory      # MemoryCatStore (in-memory, for tests)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use catshell::config::CatshellConfig;
//! use catshell::database::{CatRecord, CatRepository, CatStore, MongoConn};
//!
//! let config = CatshellConfig::new(&None)?;
//! let conn = MongoConn::connect(&config)?;
//! let repo = CatRepository::new(&conn);
//!
//! let id = repo.insert(&CatRecord::new("Whiskers", 3, "fluffy,loud"))?;
//! println!("stored {}", id);
//! ```

pub mod cats;
pub mod core;

pub use cats::{CatRecord, CatRepository, CatStore, MemoryCatStore, StoredCat, UpdateCounts};
pub use core::{BootstrapError, MongoConn};
