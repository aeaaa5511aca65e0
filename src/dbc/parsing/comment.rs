//! Comment record parser
//!
//! Syntax
//!
//!     CM_ SG_ <can-id> <signal-name> "<text>";
//!     CM_ BO_ <can-id> "<text>";
//!     CM_ BU_ <node-name> "<text>";
//!     CM_ EV_ <variable-name> "<text>";
//!     CM_ "<text>";
//!
//! The text field may span physical lines; the record is first reassembled
//! by the shared quote-parity loop, then dispatched on the sub-kind token.
//!
//! The grammar is deliberately permissive, matching the stub records that
//! show up in real-world files:
//!
//!     - a record whose subject cannot be identified (missing sub-kind
//!       fields, non-numeric can-id) is claimed and skipped silently as
//!       long as it carries no quote characters
//!     - an unquoted payload terminated by `;` is accepted as-is
//!     - a payload whose quotes cannot be unambiguously delimited is the
//!       one genuine structural violation: it raises exactly one
//!       `comment_syntax_error` on the observer and records nothing

use once_cell::sync::Lazy;
use regex::Regex;

use super::multiline::assemble_record;
use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::observer::ParseFailureObserver;

const COMMENT_PREFIX: &str = "CM_";

/// Sub-kind heads: subject fields before the text payload. `(?s)` lets the
/// payload capture span the line breaks of a reassembled record.
static SIGNAL_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^CM_\s+SG_\s+(\d+)\s+([a-zA-Z_]\w*)\s+(.*)$").unwrap());
static MESSAGE_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^CM_\s+BO_\s+(\d+)\s+(.*)$").unwrap());
static NODE_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^CM_\s+BU_\s+([a-zA-Z_]\w*)\s+(.*)$").unwrap());
static ENV_VAR_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^CM_\s+EV_\s+([a-zA-Z_]\w*)\s+(.*)$").unwrap());
static FILE_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^CM_\s+(.*)$").unwrap());

/// Outcome of delimiting the text payload of a claimed record.
enum Payload {
    /// Cleanly delimited text, ready for the builder.
    Text(String),
    /// Benign stub: nothing to record, nothing to report.
    Stub,
    /// Quote characters present but not delimitable.
    Broken,
}

/// Parser for `CM_` records. Template for every other record kind.
pub struct CommentLineParser;

impl LineParser for CommentLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(after_prefix) = clean.strip_prefix(COMMENT_PREFIX) else {
            return false;
        };
        // `CM_` alone, or with nothing after the separator, is not claimed.
        if !after_prefix.starts_with(|c: char| c.is_whitespace()) {
            return false;
        }

        // Claimed. Reassemble the logical record before sub-kind dispatch so
        // every sub-kind shares the continuation protocol.
        let record = assemble_record(clean, reader);
        match record.split_whitespace().nth(1) {
            Some("SG_") => signal_comment(&record, builder, observer),
            Some("BO_") => message_comment(&record, builder, observer),
            Some("BU_") => node_comment(&record, builder, observer),
            Some("EV_") => environment_variable_comment(&record, builder, observer),
            _ => file_comment(&record, builder, observer),
        }
        true
    }
}

fn signal_comment(record: &str, builder: &mut dyn DbcBuilder, observer: &mut dyn ParseFailureObserver) {
    let Some(caps) = SIGNAL_HEAD.captures(record) else {
        return head_mismatch(record, observer);
    };
    let Ok(message_id) = caps[1].parse::<u32>() else {
        return head_mismatch(record, observer);
    };
    match parse_payload(&caps[3]) {
        Payload::Text(text) => builder.add_signal_comment(message_id, &caps[2], &text),
        Payload::Stub => {}
        Payload::Broken => observer.comment_syntax_error(),
    }
}

fn message_comment(record: &str, builder: &mut dyn DbcBuilder, observer: &mut dyn ParseFailureObserver) {
    let Some(caps) = MESSAGE_HEAD.captures(record) else {
        return head_mismatch(record, observer);
    };
    let Ok(message_id) = caps[1].parse::<u32>() else {
        return head_mismatch(record, observer);
    };
    match parse_payload(&caps[2]) {
        Payload::Text(text) => builder.add_message_comment(message_id, &text),
        Payload::Stub => {}
        Payload::Broken => observer.comment_syntax_error(),
    }
}

fn node_comment(record: &str, builder: &mut dyn DbcBuilder, observer: &mut dyn ParseFailureObserver) {
    let Some(caps) = NODE_HEAD.captures(record) else {
        return head_mismatch(record, observer);
    };
    match parse_payload(&caps[2]) {
        Payload::Text(text) => builder.add_node_comment(&caps[1], &text),
        Payload::Stub => {}
        Payload::Broken => observer.comment_syntax_error(),
    }
}

fn environment_variable_comment(
    record: &str,
    builder: &mut dyn DbcBuilder,
    observer: &mut dyn ParseFailureObserver,
) {
    let Some(caps) = ENV_VAR_HEAD.captures(record) else {
        return head_mismatch(record, observer);
    };
    match parse_payload(&caps[2]) {
        Payload::Text(text) => builder.add_environment_variable_comment(&caps[1], &text),
        Payload::Stub => {}
        Payload::Broken => observer.comment_syntax_error(),
    }
}

fn file_comment(record: &str, builder: &mut dyn DbcBuilder, observer: &mut dyn ParseFailureObserver) {
    let Some(caps) = FILE_HEAD.captures(record) else {
        // Unreachable for a claimed record, but the contract is to stay quiet.
        return;
    };
    match parse_payload(&caps[1]) {
        Payload::Text(text) => builder.add_file_comment(&text),
        Payload::Stub => {}
        Payload::Broken => observer.comment_syntax_error(),
    }
}

/// A record whose subject fields did not parse: quote-free stubs pass
/// silently, anything carrying quotes cannot be delimited and is reported.
fn head_mismatch(record: &str, observer: &mut dyn ParseFailureObserver) {
    if record.contains('"') {
        observer.comment_syntax_error();
    }
}

/// Delimit the text payload of an otherwise well-targeted record.
///
/// A leading quote starts the canonical form: the text runs to the next
/// quote (or to the end of input for an unterminated literal), and only
/// whitespace may sit between the closing quote and the `;`. Without any
/// quotes the permissive unquoted fallback takes everything up to the last
/// `;`. A quote anywhere else cannot be delimited.
fn parse_payload(rest: &str) -> Payload {
    let rest = rest.trim();
    if let Some(after_quote) = rest.strip_prefix('"') {
        return match after_quote.find('"') {
            Some(end) => {
                let tail = after_quote[end + 1..].trim_start();
                if tail.is_empty() || tail.starts_with(';') {
                    Payload::Text(after_quote[..end].to_string())
                } else {
                    Payload::Broken
                }
            }
            // Input ended before the closing quote: use the assembled text.
            None => Payload::Text(after_quote.to_string()),
        };
    }
    if rest.contains('"') {
        return Payload::Broken;
    }
    match rest.rfind(';') {
        Some(end) => {
            let text = rest[..end].trim_end();
            if text.is_empty() {
                Payload::Stub
            } else {
                Payload::Text(text.to_string())
            }
        }
        None => Payload::Stub,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_text(rest: &str) -> Option<String> {
        match parse_payload(rest) {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    #[test]
    fn test_quoted_payload() {
        assert_eq!(payload_text(r#""hello";"#).as_deref(), Some("hello"));
        assert_eq!(payload_text(r#"  "hello"   ;  "#).as_deref(), Some("hello"));
    }

    #[test]
    fn test_quoted_payload_preserves_inner_whitespace() {
        assert_eq!(payload_text("\" padded \";").as_deref(), Some(" padded "));
    }

    #[test]
    fn test_unterminated_payload_is_best_effort() {
        assert_eq!(
            payload_text("\"first\nsecond").as_deref(),
            Some("first\nsecond")
        );
    }

    #[test]
    fn test_unquoted_fallback() {
        assert_eq!(payload_text("no quotes;").as_deref(), Some("no quotes"));
    }

    #[test]
    fn test_stub_payloads() {
        assert!(matches!(parse_payload(";"), Payload::Stub));
        assert!(matches!(parse_payload("   ;"), Payload::Stub));
        assert!(matches!(parse_payload("dangling"), Payload::Stub));
    }

    #[test]
    fn test_broken_payloads() {
        // Junk between the closing quote and the terminator.
        assert!(matches!(
            parse_payload(r#""Test with incorrect "syntax"";"#),
            Payload::Broken
        ));
        // A quote that doesn't open the payload.
        assert!(matches!(parse_payload(r#"no "quotes";"#), Payload::Broken));
    }
}
