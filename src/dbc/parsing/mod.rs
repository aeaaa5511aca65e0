//! Line dispatch engine
//!
//! This module implements the outer parsing loop that routes each physical
//! line to the record parser that understands it.
//!
//!     Every DBC record kind starts with a distinct literal keyword, so
//!     dispatch needs no backtracking: parsers are tried in a fixed
//!     declaration order and the first one that claims the line wins.
//!     Claiming is independent of payload validity — a parser owns its
//!     record kind whether or not the payload is well formed, which keeps a
//!     single malformed record from derailing the rest of the file.
//!
//!     A claiming parser may pull continuation lines from the provider
//!     (quoted text fields can span physical lines); that consumption is
//!     authoritative before the engine reads the next top-level line.
//!     Lines no parser claims are skipped silently: unrecognized record
//!     kinds are not an error.
//!
//! See [comment](crate::dbc::parsing::comment) for the fully worked record
//! grammar the other parsers are modeled on.

pub mod comment;
pub mod environment_variable;
pub mod message;
pub mod multiline;
pub mod nodes;
pub mod properties;
pub mod signal;

use super::builder::{DbcBuilder, DbcModelBuilder};
use super::line_provider::{NextLineProvider, TextLineProvider};
use super::model::Dbc;
use super::observer::{ParseFailureObserver, SilentFailureObserver};

/// A record-type parser: one per DBC record kind.
///
/// `try_parse` returns `true` when the line belongs to this parser's record
/// kind, even if the payload is malformed; `false` means "not mine" and
/// guarantees nothing was consumed from the provider. On `true` the parser
/// has either recorded complete facts on the builder or reported a
/// malformed payload to the observer — never both for one record, and never
/// partial data.
pub trait LineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool;
}

/// The registered record parsers, in dispatch priority order.
fn line_parsers() -> Vec<Box<dyn LineParser>> {
    vec![
        Box::new(nodes::NodesLineParser),
        Box::new(message::MessageLineParser),
        Box::new(signal::SignalLineParser),
        Box::new(environment_variable::EnvironmentVariableLineParser),
        Box::new(comment::CommentLineParser),
        Box::new(properties::PropertiesLineParser),
    ]
}

/// Drive the provider to exhaustion, dispatching every line.
///
/// The engine never fails: malformed records surface only through the
/// observer and the builder ends up with whatever could be parsed.
pub fn parse_lines(
    reader: &mut dyn NextLineProvider,
    builder: &mut dyn DbcBuilder,
    observer: &mut dyn ParseFailureObserver,
) {
    let parsers = line_parsers();
    while let Some(line) = reader.next_line() {
        for parser in &parsers {
            if parser.try_parse(&line, builder, reader, observer) {
                break;
            }
        }
    }
}

/// Parse an in-memory DBC source, discarding diagnostics.
pub fn parse(source: &str) -> Dbc {
    let mut observer = SilentFailureObserver;
    parse_with_observer(source, &mut observer)
}

/// Parse an in-memory DBC source, reporting malformed records to `observer`.
pub fn parse_with_observer(source: &str, observer: &mut dyn ParseFailureObserver) -> Dbc {
    let mut reader = TextLineProvider::new(source);
    let mut builder = DbcModelBuilder::new();
    parse_lines(&mut reader, &mut builder, observer);
    builder.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::testing::{BuilderCall, RecordingBuilder, RecordingObserver};

    #[test]
    fn test_unrecognized_lines_are_skipped_silently() {
        let mut reader = TextLineProvider::new("VERSION \"1.0\"\n\nxfsgt_ garbage\n");
        let mut builder = RecordingBuilder::new();
        let mut observer = RecordingObserver::new();

        parse_lines(&mut reader, &mut builder, &mut observer);

        assert!(builder.calls.is_empty());
        assert_eq!(observer.total(), 0);
    }

    #[test]
    fn test_skipped_line_does_not_affect_subsequent_parsing() {
        let source = "not a record\nBU_: ECU1\n";
        let mut reader = TextLineProvider::new(source);
        let mut builder = RecordingBuilder::new();
        let mut observer = RecordingObserver::new();

        parse_lines(&mut reader, &mut builder, &mut observer);

        assert_eq!(builder.calls.len(), 1);
        assert!(matches!(&builder.calls[0], BuilderCall::Node(name) if name == "ECU1"));
    }

    #[test]
    fn test_parse_empty_source_yields_empty_model() {
        let dbc = parse("");
        assert!(dbc.nodes().is_empty());
        assert!(dbc.messages().is_empty());
        assert!(dbc.environment_variables().is_empty());
        assert!(dbc.global_properties().is_empty());
    }
}
