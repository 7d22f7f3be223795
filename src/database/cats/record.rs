use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use std::fmt;

/// A cat about to be inserted
///
/// `features` is the free-form text given when the cat is added. The
/// `feature` list grown by later characteristic appends is a separate key
/// that only exists on stored documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatRecord {
    pub name: String,
    pub age: i64,
    pub features: String,
}

impl CatRecord {
    pub fn new(name: &str, age: i64, features: &str) -> Self {
        CatRecord {
            name: name.to_string(),
            age,
            features: features.to_string(),
        }
    }
}

/// A cat document as read back from the collection
///
/// The document is kept exactly as stored: fields written by other tools
/// survive, and nothing is filled in. Accessors return `None` when a field is
/// missing or has an unexpected type.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCat {
    doc: Document,
}

impl StoredCat {
    pub fn new(doc: Document) -> Self {
        StoredCat { doc }
    }

    pub fn id(&self) -> Option<ObjectId> {
        self.doc.get_object_id("_id").ok()
    }

    pub fn name(&self) -> Option<&str> {
        self.doc.get_str("name").ok()
    }

    /// Integer age; doubles and other types yield `None`
    pub fn age(&self) -> Option<i64> {
        match self.doc.get("age") {
            Some(Bson::Int32(v)) => Some(i64::from(*v)),
            Some(Bson::Int64(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn features(&self) -> Option<&str> {
        self.doc.get_str("features").ok()
    }

    /// String entries of the appended `feature` array
    pub fn feature(&self) -> Vec<&str> {
        match self.doc.get_array("feature") {
            Ok(items) => items.iter().filter_map(Bson::as_str).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}

impl From<Document> for StoredCat {
    fn from(doc: Document) -> Self {
        StoredCat::new(doc)
    }
}

impl fmt::Display for StoredCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc)
    }
}
