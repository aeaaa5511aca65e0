//! # dbc-parser
//!
//! A parser for the CAN DBC database format.
//!
//! DBC files are line-oriented: every record starts with a distinct literal
//! keyword (`BU_:`, `BO_`, `SG_`, `CM_`, ...) and quoted text payloads may
//! span several physical lines. The parser routes each line to the record
//! parser that recognizes its prefix, accumulates parsed facts into a
//! builder, and reports malformed-but-recognized records through an
//! observer side channel instead of failing. A whole-file parse therefore
//! always completes and always yields a [`dbc::model::Dbc`], however sparse
//! the input.
//!
//! The quickest way in is the loader:
//!
//! ```rust,ignore
//! use dbc_parser::dbc::loader::DbcLoader;
//!
//! let dbc = DbcLoader::from_path("powertrain.dbc")?.parse();
//! for message in dbc.messages() {
//!     println!("{:#x} {}", message.id, message.name);
//! }
//! ```

pub mod dbc;
