//! Network node element
//!
//! Syntax
//!
//!     BU_: <node-name>*
//!
//! Nodes are the ECUs on the bus. A node is declared by name only; comments
//! are attached later by `CM_ BU_` records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A network node (ECU) declared in the `BU_:` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub comment: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
