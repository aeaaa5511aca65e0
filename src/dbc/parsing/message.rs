//! Message record parser
//!
//! Syntax
//!
//!     BO_ <can-id> <name>: <size> <transmitter>
//!
//! The prefix test requires whitespace after `BO_`, which keeps this parser
//! disjoint from the `BO_TX_BU_` record kind.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::model::Message;
use crate::dbc::observer::ParseFailureObserver;

const MESSAGE_PREFIX: &str = "BO_";

static MESSAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^BO_\s+(\d+)\s+([a-zA-Z_]\w*)\s*:\s*(\d+)\s+([a-zA-Z_]\w*)\s*$").unwrap()
});

/// Parser for the `BO_` record.
pub struct MessageLineParser;

impl LineParser for MessageLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        _reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(after_prefix) = clean.strip_prefix(MESSAGE_PREFIX) else {
            return false;
        };
        if !after_prefix.starts_with(|c: char| c.is_whitespace()) {
            return false;
        }

        match parse_message(clean) {
            Some(message) => builder.add_message(message),
            None => observer.message_syntax_error(),
        }
        true
    }
}

fn parse_message(record: &str) -> Option<Message> {
    let caps = MESSAGE_LINE.captures(record)?;
    let id = caps[1].parse::<u32>().ok()?;
    let size = caps[3].parse::<u16>().ok()?;
    Some(Message::new(id, &caps[2], size, &caps[4]))
}
