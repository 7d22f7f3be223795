//! Cat record storage
//!
//! The [`CatStore`] trait is the seam between the record operations and the
//! collection. [`CatRepository`] talks to MongoDB; [`MemoryCatStore`] keeps
//! records in memory and stands in for the server in tests.

mod memory;
mod record;
mod repository;
mod store;

pub use memory::MemoryCatStore;
pub use record::{CatRecord, StoredCat};
pub use repository::CatRepository;
pub use store::{CatStore, UpdateCounts};
