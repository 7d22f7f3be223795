//! Lens module
//!
//! This module provides high-level "lens" abstractions that hold the business
//! logic of catshell on top of a store. Lenses return typed outcomes and leave
//! presentation to their caller (the interactive shell).
//!
//! # Architecture
//!
//! Each lens module exports:
//! - A **Lens struct** (e.g., `CatLens`) - the main entry point for all operations
//! - **Args structs** - input arguments for lens methods
//! - **Output types** - return types of lens methods
//!
//! # Usage
//!
//! ```rust,ignore
//! use catshell::database::MemoryCatStore;
//! use catshell::lens::cats::{CatAddArgs, CatLens};
//!
//! let store = MemoryCatStore::new();
//! let lens = CatLens::new(&store);
//! let added = lens.add(&CatAddArgs::new("Whiskers", 3, "fluffy,loud"))?;
//! ```

pub mod cats;
