//! Global custom property element
//!
//! Syntax
//!
//!     BA_ "<name>" <value>;
//!
//! Only the file-level form is modeled here; `BA_` records that target a
//! node, message or signal carry an extra subject token and are recorded
//! against that entity instead.

use serde::{Deserialize, Serialize};

/// Value of a custom property: a quoted string or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
}

/// A file-level custom property declared by a `BA_` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: PropertyValue,
}

impl CustomProperty {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
