//! Cat lens
//!
//! This module provides the cat record operations. Arguments arrive already
//! parsed; each operation issues exactly one call to the store and returns a
//! typed outcome.

pub mod args;
pub mod types;

pub use args::{parse_age, CatAddArgs, CatAgeArgs, CatFeatureArgs};
pub use types::{AddOutcome, DeleteAllOutcome, DeleteOutcome, FindOutcome, UpdateOutcome};

use crate::database::{CatStore, StoredCat};
use anyhow::Result;
use tracing::debug;

/// Cat lens for managing cat records
///
/// This lens provides high-level operations for:
/// - Adding, listing and finding cats
/// - Updating a cat's age or appending a characteristic
/// - Deleting one cat by name or every cat
pub struct CatLens<'a> {
    store: &'a dyn CatStore,
}

impl<'a> CatLens<'a> {
    /// Create a new cat lens over any store
    pub fn new(store: &'a dyn CatStore) -> Self {
        Self { store }
    }

    /// Insert a new cat
    pub fn add(&self, args: &CatAddArgs) -> Result<AddOutcome> {
        let id = self.store.insert(&args.to_record())?;
        debug!("added cat {:?} as {}", args.name, id);
        Ok(AddOutcome { id })
    }

    /// Every cat in the collection's natural order, as stored
    pub fn list_all(&self) -> Result<Vec<StoredCat>> {
        self.store.find_all()
    }

    /// First cat with exactly this name
    pub fn find_by_name(&self, name: &str) -> Result<FindOutcome> {
        Ok(match self.store.find_by_name(name)? {
            Some(cat) => FindOutcome::Found(cat),
            None => FindOutcome::NotFound,
        })
    }

    /// Set the age of the first cat with this name
    pub fn update_age(&self, args: &CatAgeArgs) -> Result<UpdateOutcome> {
        let counts = self.store.set_age(&args.name, args.age)?;
        Ok(counts.into())
    }

    /// Append a characteristic to the first cat with this name
    pub fn add_feature(&self, args: &CatFeatureArgs) -> Result<UpdateOutcome> {
        let counts = self.store.push_feature(&args.name, &args.feature)?;
        Ok(counts.into())
    }

    /// Delete the first cat with this name
    pub fn delete_by_name(&self, name: &str) -> Result<DeleteOutcome> {
        Ok(match self.store.delete_by_name(name)? {
            0 => DeleteOutcome::NotFound,
            _ => DeleteOutcome::Deleted,
        })
    }

    /// Delete every cat
    pub fn delete_all(&self) -> Result<DeleteAllOutcome> {
        let deleted = self.store.delete_all()?;
        Ok(DeleteAllOutcome { deleted })
    }
}
