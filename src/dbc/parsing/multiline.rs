//! Multi-line quoted-record assembly
//!
//! DBC allows the quoted text field of a record to span any number of
//! physical lines. Reassembly is a bounded pull loop: while the text
//! accumulated so far contains an odd number of `"` characters the closing
//! quote is still outstanding, so the next line is fetched and appended
//! with exactly one line break. The loop stops when the quote count turns
//! even or the provider is exhausted.
//!
//! Exhaustion before the closing quote is a deliberate leniency, not an
//! error: the unterminated text is handed on as assembled and the record
//! parser uses it as the final value.

use crate::dbc::line_provider::NextLineProvider;

/// True while the closing quote of the record's text field is outstanding.
pub(crate) fn has_open_quote(text: &str) -> bool {
    text.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

/// Assemble a logical record starting at `first_line`, pulling continuation
/// lines until every quote is balanced or input ends.
///
/// The first line is expected pre-trimmed by the claiming parser;
/// continuation lines are appended untouched, joined by single `\n`s.
pub(crate) fn assemble_record(first_line: &str, reader: &mut dyn NextLineProvider) -> String {
    let mut record = first_line.to_string();
    while has_open_quote(&record) {
        match reader.next_line() {
            Some(line) => {
                record.push('\n');
                record.push_str(&line);
            }
            None => break,
        }
    }
    record
}
