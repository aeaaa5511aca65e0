//! Signal element
//!
//! Syntax
//!
//!     SG_ <name> [M|m<k>] : <start>|<length>@<byte-order><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receiver>{,<receiver>}
//!
//! A signal describes how a value is packed into its parent message's
//! payload. `@1` is little-endian (Intel), `@0` big-endian (Motorola);
//! the sign marker is `+` for unsigned and `-` for signed. The optional
//! multiplexing token is `M` for the multiplexor signal and `m<k>` for a
//! signal multiplexed by value `k`.

use serde::{Deserialize, Serialize};

/// Byte order of a signal inside the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// `@0`, Motorola
    BigEndian,
    /// `@1`, Intel
    LittleEndian,
}

/// Signedness marker of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSign {
    /// `+`
    Unsigned,
    /// `-`
    Signed,
}

/// A signal declared by an `SG_` record, owned by the message it follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    /// Raw multiplexing token (`M` or `m<k>`), if present.
    pub multiplexing: Option<String>,
    pub start_bit: u16,
    pub length: u16,
    pub byte_order: ByteOrder,
    pub value_sign: ValueSign,
    pub factor: f64,
    pub offset: f64,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    pub receivers: Vec<String>,
    pub comment: Option<String>,
}

impl Signal {
    /// Apply factor and offset to a raw payload value.
    pub fn physical_value(&self, raw: f64) -> f64 {
        raw * self.factor + self.offset
    }
}
