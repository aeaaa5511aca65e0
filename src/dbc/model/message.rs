//! Message element
//!
//! Syntax
//!
//!     BO_ <can-id> <name>: <size> <transmitter>
//!
//! A message owns the signals declared on the `SG_` lines that follow it.
//! The size is the payload length in bytes; the transmitter is the name of
//! the sending node (`Vector__XXX` when unassigned).

use super::Signal;
use serde::{Deserialize, Serialize};

/// A CAN message declared by a `BO_` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub name: String,
    /// Payload size in bytes.
    pub size: u16,
    pub transmitter: String,
    pub signals: Vec<Signal>,
    pub comment: Option<String>,
}

impl Message {
    pub fn new(id: u32, name: impl Into<String>, size: u16, transmitter: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            transmitter: transmitter.into(),
            signals: Vec::new(),
            comment: None,
        }
    }

    /// Look up an owned signal by name.
    pub fn signal_by_name(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|signal| signal.name == name)
    }
}
