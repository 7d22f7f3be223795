use anyhow::{anyhow, Result};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::sync::Collection;
use tracing::debug;

use super::{CatRecord, CatStore, StoredCat, UpdateCounts};
use crate::database::core::MongoConn;

/// MongoDB-backed cat repository
///
/// Inserts go through the typed `CatRecord` handle; reads use raw documents
/// so records written by other tools are returned untouched.
pub struct CatRepository {
    records: Collection<CatRecord>,
    documents: Collection<Document>,
}

impl CatRepository {
    /// Create a repository over the collection configured for `conn`
    pub fn new(conn: &MongoConn) -> Self {
        Self {
            records: conn.collection(),
            documents: conn.collection(),
        }
    }
}

impl CatStore for CatRepository {
    fn insert(&self, cat: &CatRecord) -> Result<ObjectId> {
        debug!("insert_one name={:?}", cat.name);
        let result = self.records.insert_one(cat).run()?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("Unexpected _id type in reply: {}", result.inserted_id))
    }

    fn find_all(&self) -> Result<Vec<StoredCat>> {
        debug!("find all");
        let cursor = self.documents.find(doc! {}).run()?;
        let docs = cursor.collect::<mongodb::error::Result<Vec<_>>>()?;
        Ok(docs.into_iter().map(StoredCat::from).collect())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<StoredCat>> {
        debug!("find_one name={:?}", name);
        let found = self.documents.find_one(doc! { "name": name }).run()?;
        Ok(found.map(StoredCat::from))
    }

    fn set_age(&self, name: &str, age: i64) -> Result<UpdateCounts> {
        debug!("update_one $set age={} name={:?}", age, name);
        let result = self
            .documents
            .update_one(doc! { "name": name }, doc! { "$set": { "age": age } })
            .run()?;
        Ok(UpdateCounts {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    fn push_feature(&self, name: &str, feature: &str) -> Result<UpdateCounts> {
        debug!("update_one $push feature={:?} name={:?}", feature, name);
        let result = self
            .documents
            .update_one(doc! { "name": name }, doc! { "$push": { "feature": feature } })
            .run()?;
        Ok(UpdateCounts {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    fn delete_by_name(&self, name: &str) -> Result<u64> {
        debug!("delete_one name={:?}", name);
        let result = self.documents.delete_one(doc! { "name": name }).run()?;
        Ok(result.deleted_count)
    }

    fn delete_all(&self) -> Result<u64> {
        debug!("delete_many");
        let result = self.documents.delete_many(doc! {}).run()?;
        Ok(result.deleted_count)
    }
}
