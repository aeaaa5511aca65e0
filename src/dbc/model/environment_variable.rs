//! Environment variable element
//!
//! Syntax
//!
//!     EV_ <name>: <type> [<min>|<max>] "<unit>" <initial> <id> <access> <node>{,<node>};
//!
//! Environment variables model values that live outside any message, used
//! mostly by restbus simulation tools. The type field is 0 for integer,
//! 1 for float, 2 for string.

use serde::{Deserialize, Serialize};

/// Data type of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvDataType {
    Integer,
    Float,
    Text,
}

/// An environment variable declared by an `EV_` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub data_type: EnvDataType,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    pub initial_value: f64,
    pub ev_id: u32,
    /// Raw access-type token (e.g. `DUMMY_NODE_VECTOR0`).
    pub access: String,
    pub nodes: Vec<String>,
    pub comment: Option<String>,
}
