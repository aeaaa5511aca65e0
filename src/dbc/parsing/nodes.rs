//! Node list record parser
//!
//! Syntax
//!
//!     BU_: <node-name>*
//!
//! One record declares every node on the bus; an empty list is valid.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::model::Node;
use crate::dbc::observer::ParseFailureObserver;

static NODES_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^BU_\s*:\s*(.*)$").unwrap());
static NODE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_]\w*$").unwrap());

/// Parser for the `BU_:` record.
pub struct NodesLineParser;

impl LineParser for NodesLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        _reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(caps) = NODES_LINE.captures(clean) else {
            return false;
        };

        let names: Vec<&str> = caps[1].split_whitespace().collect();
        if names.iter().all(|name| NODE_NAME.is_match(name)) {
            for name in names {
                builder.add_node(Node::new(name));
            }
        } else {
            observer.node_syntax_error();
        }
        true
    }
}
