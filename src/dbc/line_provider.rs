//! Pull-based line source
//!
//! The engine and the record parsers never perform I/O themselves: they pull
//! physical lines, one at a time, from a [`NextLineProvider`]. Exactly one
//! record owns the read cursor at any moment and continuation consumption is
//! forward-only, so no pushback or buffering is needed. Line terminators
//! (LF or CRLF) never reach consumers.

/// Provides the next physical line of input, without its terminator.
///
/// `None` signals end of input; it is the only termination signal the
/// parsing engine knows about.
pub trait NextLineProvider {
    fn next_line(&mut self) -> Option<String>;
}

/// A line provider over an in-memory source string.
///
/// `str::lines` splits on `\n` and strips a trailing `\r`, which normalizes
/// CRLF and LF endings before lines reach the engine.
pub struct TextLineProvider<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> TextLineProvider<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
        }
    }
}

impl NextLineProvider for TextLineProvider<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lf_lines() {
        let mut provider = TextLineProvider::new("one\ntwo\n");
        assert_eq!(provider.next_line().as_deref(), Some("one"));
        assert_eq!(provider.next_line().as_deref(), Some("two"));
        assert_eq!(provider.next_line(), None);
    }

    #[test]
    fn test_crlf_is_normalized() {
        let mut provider = TextLineProvider::new("one\r\ntwo\r\n");
        assert_eq!(provider.next_line().as_deref(), Some("one"));
        assert_eq!(provider.next_line().as_deref(), Some("two"));
        assert_eq!(provider.next_line(), None);
    }

    #[test]
    fn test_empty_source_is_exhausted_immediately() {
        let mut provider = TextLineProvider::new("");
        assert_eq!(provider.next_line(), None);
    }

    #[test]
    fn test_missing_final_newline() {
        let mut provider = TextLineProvider::new("only");
        assert_eq!(provider.next_line().as_deref(), Some("only"));
        assert_eq!(provider.next_line(), None);
    }
}
