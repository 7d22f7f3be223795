#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Catshell - An interactive MongoDB shell for cat records
//!
//! Catshell connects to one MongoDB collection at startup and offers a fixed
//! text menu to add, list, find, update and delete cat records. It can be used
//! as both a command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | Config, database, lenses and the shell loop | `mongodb`, `config` |
//! | `cli` | The `catshell` binary | `clap`, `tracing-subscriber` |
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - **[`config`]**: Configuration management (TOML file and `CATSHELL_*` variables)
//! - **[`database`]**: MongoDB bootstrap and the cat record stores
//!   - `core`: `MongoConn` connection and `BootstrapError`
//!   - `cats`: `CatRecord`, `StoredCat`, the `CatStore` trait, `CatRepository`, `MemoryCatStore`
//! - **[`lens`]**: Business operations returning typed outcomes
//!   - `cats`: `CatLens` with add, list, find, update-age, add-feature, delete
//! - **[`shell`]**: The interactive menu loop
//!
//! # Quick Start Examples
//!
//! ## Record Operations
//!
//! ```rust,ignore
//! use catshell::database::{CatRepository, MongoConn};
//! use catshell::lens::cats::{CatAddArgs, CatAgeArgs, CatLens, UpdateOutcome};
//! use catshell::CatshellConfig;
//!
//! let config = CatshellConfig::new(&None)?;
//! let conn = MongoConn::connect(&config)?;
//! let repo = CatRepository::new(&conn);
//! let lens = CatLens::new(&repo);
//!
//! let added = lens.add(&CatAddArgs::new("Whiskers", 3, "fluffy,loud"))?;
//! println!("stored as {}", added.id);
//!
//! if lens.update_age(&CatAgeArgs::new("Whiskers", 4))? == UpdateOutcome::Modified {
//!     println!("happy birthday");
//! }
//! ```
//!
//! ## Interactive Shell
//!
//! ```rust,ignore
//! use catshell::database::MemoryCatStore;
//! use catshell::Shell;
//!
//! let store = MemoryCatStore::new();
//! let stdin = std::io::stdin();
//! Shell::new(&store, stdin.lock(), std::io::stdout()).run()?;
//! ```

pub mod config;
pub mod database;
pub mod lens;
pub mod shell;

// =============================================================================
// Configuration
// =============================================================================

pub use config::CatshellConfig;

// =============================================================================
// Database Module - Re-export commonly used types
// =============================================================================

pub use database::{
    BootstrapError, CatRecord, CatRepository, CatStore, MemoryCatStore, MongoConn, StoredCat,
    UpdateCounts,
};

// =============================================================================
// Lens and Shell
// =============================================================================

pub use lens::cats::CatLens;
pub use shell::{MenuChoice, Shell};
