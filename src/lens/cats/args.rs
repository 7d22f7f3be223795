//! Cat lens arguments
//!
//! Input structures for the cat record operations. Numeric input is parsed
//! here, at the boundary, so a bad value never reaches the store.

use anyhow::{anyhow, Result};

use crate::database::CatRecord;

/// Parse an age typed by the user
///
/// Surrounding whitespace is ignored; anything that is not an integer is
/// rejected.
pub fn parse_age(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("Cat age must be an integer, got '{}'", input.trim()))
}

/// Arguments for adding a cat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatAddArgs {
    pub name: String,
    pub age: i64,
    /// Comma-separated characteristics, stored verbatim
    pub features: String,
}

impl CatAddArgs {
    pub fn new(name: &str, age: i64, features: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            features: features.to_string(),
        }
    }

    pub fn to_record(&self) -> CatRecord {
        CatRecord::new(&self.name, self.age, &self.features)
    }
}

/// Arguments for changing a cat's age
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatAgeArgs {
    pub name: String,
    pub age: i64,
}

impl CatAgeArgs {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// Arguments for appending a characteristic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatFeatureArgs {
    pub name: String,
    pub feature: String,
}

impl CatFeatureArgs {
    pub fn new(name: &str, feature: &str) -> Self {
        Self {
            name: name.to_string(),
            feature: feature.to_string(),
        }
    }
}
