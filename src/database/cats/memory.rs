use anyhow::{anyhow, Result};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{to_document, Bson, Document};
use std::cell::{Cell, RefCell};

use super::{CatRecord, CatStore, StoredCat, UpdateCounts};

/// In-memory cat store
///
/// Keeps raw documents and mirrors the collection's first-match semantics
/// without a server. Every trait call is counted, and the store can be told
/// to fail all calls, which makes it usable as a test double for the lens
/// and the shell.
#[derive(Debug, Default)]
pub struct MemoryCatStore {
    docs: RefCell<Vec<Document>>,
    calls: Cell<usize>,
    failure: RefCell<Option<String>>,
}

impl MemoryCatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    /// Number of documents currently held
    pub fn len(&self) -> usize {
        self.docs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.borrow().is_empty()
    }

    /// Copy of all documents, without counting as a store call
    pub fn snapshot(&self) -> Vec<StoredCat> {
        self.docs.borrow().iter().cloned().map(StoredCat::from).collect()
    }

    /// Store a document as-is, without counting as a store call
    ///
    /// An `_id` is added when the document has none, as the server does.
    pub fn insert_document(&self, mut doc: Document) -> ObjectId {
        let id = match doc.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                let mut with_id = Document::new();
                with_id.insert("_id", id);
                for (key, value) in doc {
                    with_id.insert(key, value);
                }
                doc = with_id;
                id
            }
        };
        self.docs.borrow_mut().push(doc);
        id
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    fn begin_call(&self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.borrow().as_ref() {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.docs
            .borrow()
            .iter()
            .position(|d| d.get_str("name").ok() == Some(name))
    }
}

impl CatStore for MemoryCatStore {
    fn insert(&self, cat: &CatRecord) -> Result<ObjectId> {
        self.begin_call()?;
        Ok(self.insert_document(to_document(cat)?))
    }

    fn find_all(&self) -> Result<Vec<StoredCat>> {
        self.begin_call()?;
        Ok(self.snapshot())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<StoredCat>> {
        self.begin_call()?;
        let docs = self.docs.borrow();
        Ok(self
            .position(name)
            .map(|idx| StoredCat::from(docs[idx].clone())))
    }

    fn set_age(&self, name: &str, age: i64) -> Result<UpdateCounts> {
        self.begin_call()?;
        let Some(idx) = self.position(name) else {
            return Ok(UpdateCounts::default());
        };
        let mut docs = self.docs.borrow_mut();
        let modified = if docs[idx].get("age") == Some(&Bson::Int64(age)) {
            0
        } else {
            docs[idx].insert("age", age);
            1
        };
        Ok(UpdateCounts {
            matched: 1,
            modified,
        })
    }

    fn push_feature(&self, name: &str, feature: &str) -> Result<UpdateCounts> {
        self.begin_call()?;
        let Some(idx) = self.position(name) else {
            return Ok(UpdateCounts::default());
        };
        let mut docs = self.docs.borrow_mut();
        let doc = &mut docs[idx];
        match doc.get_mut("feature") {
            Some(Bson::Array(items)) => items.push(Bson::from(feature)),
            Some(other) => {
                return Err(anyhow!(
                    "The field 'feature' must be an array but is of type {:?}",
                    other.element_type()
                ))
            }
            None => {
                doc.insert("feature", vec![feature]);
            }
        }
        Ok(UpdateCounts {
            matched: 1,
            modified: 1,
        })
    }

    fn delete_by_name(&self, name: &str) -> Result<u64> {
        self.begin_call()?;
        match self.position(name) {
            Some(idx) => {
                self.docs.borrow_mut().remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_all(&self) -> Result<u64> {
        self.begin_call()?;
        let mut docs = self.docs.borrow_mut();
        let count = docs.len() as u64;
        docs.clear();
        Ok(count)
    }
}
