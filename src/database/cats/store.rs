use anyhow::Result;
use mongodb::bson::oid::ObjectId;

use super::{CatRecord, StoredCat};

/// Counts reported by an update-one call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    /// Documents matching the filter (0 or 1)
    pub matched: u64,
    /// Documents actually changed (0 or 1)
    pub modified: u64,
}

/// Document collection holding cat records
///
/// Every method issues exactly one call against the collection. Matching by
/// name is exact and the single-document variants act on the first match.
/// Errors are operation-level failures; the caller decides how to report them.
pub trait CatStore {
    /// Insert a new record and return the identifier the collection assigned
    fn insert(&self, cat: &CatRecord) -> Result<ObjectId>;

    /// Every stored document in natural order, as stored
    fn find_all(&self) -> Result<Vec<StoredCat>>;

    /// First stored document whose `name` equals `name`
    fn find_by_name(&self, name: &str) -> Result<Option<StoredCat>>;

    /// Set `age` on the first record named `name`
    fn set_age(&self, name: &str, age: i64) -> Result<UpdateCounts>;

    /// Push `feature` onto the `feature` array of the first record named `name`
    fn push_feature(&self, name: &str, feature: &str) -> Result<UpdateCounts>;

    /// Delete the first record named `name`, returning the deleted count
    fn delete_by_name(&self, name: &str) -> Result<u64>;

    /// Delete every record, returning the deleted count
    fn delete_all(&self) -> Result<u64>;
}
