//! In-memory model of a parsed DBC database
//!
//! The model is the immutable output of a parse: a [`Dbc`] aggregate holding
//! nodes, messages, environment variables and global custom properties.
//! Entity types are plain data; the aggregate only hands out references, so
//! a returned model cannot be mutated by callers.
//!
//! All types derive serde so downstream export collaborators (DBC writers,
//! spreadsheet writers) can consume the model without re-walking it.

pub mod custom_property;
pub mod dbc;
pub mod environment_variable;
pub mod message;
pub mod node;
pub mod signal;

pub use custom_property::{CustomProperty, PropertyValue};
pub use dbc::Dbc;
pub use environment_variable::{EnvDataType, EnvironmentVariable};
pub use message::Message;
pub use node::Node;
pub use signal::{ByteOrder, Signal, ValueSign};
