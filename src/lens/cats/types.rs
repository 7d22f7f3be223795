//! Cat lens types
//!
//! Typed results of the cat record operations. "Not found" and "unchanged"
//! are outcomes here, not errors.

use mongodb::bson::oid::ObjectId;

use crate::database::{StoredCat, UpdateCounts};

/// Result of adding a cat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Identifier assigned by the collection
    pub id: ObjectId,
}

/// Result of looking a cat up by name
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome {
    Found(StoredCat),
    NotFound,
}

/// Result of an update-one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A record matched and was changed
    Modified,
    /// A record matched but already had the requested value
    Unchanged,
    /// No record has that name
    NotFound,
}

impl From<UpdateCounts> for UpdateOutcome {
    fn from(counts: UpdateCounts) -> Self {
        match (counts.matched, counts.modified) {
            (0, _) => UpdateOutcome::NotFound,
            (_, 0) => UpdateOutcome::Unchanged,
            _ => UpdateOutcome::Modified,
        }
    }
}

/// Result of deleting a cat by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Result of deleting every cat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAllOutcome {
    pub deleted: u64,
}
