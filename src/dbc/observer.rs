//! Syntax failure observation contract
//!
//! Malformed-but-recognized records are reported through this side channel
//! instead of interrupting the parse. The observer never influences control
//! flow: dispatch continues, no builder call is forced or suppressed by it,
//! and the whole-file parse always completes.
//!
//! The offending line is deliberately not part of the event. Callers that
//! need positions can wrap their line provider with a counter and correlate.

/// One notification method per record kind's malformed case.
///
/// All methods default to no-ops so implementors only override the events
/// they care about.
pub trait ParseFailureObserver {
    fn comment_syntax_error(&mut self) {}
    fn node_syntax_error(&mut self) {}
    fn message_syntax_error(&mut self) {}
    fn signal_syntax_error(&mut self) {}
    fn environment_variable_syntax_error(&mut self) {}
    fn property_syntax_error(&mut self) {}
}

/// The default observer: ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFailureObserver;

impl ParseFailureObserver for SilentFailureObserver {}

/// Counts events per record kind, for callers that want strictness on top
/// of the lenient engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingFailureObserver {
    pub comment_errors: usize,
    pub node_errors: usize,
    pub message_errors: usize,
    pub signal_errors: usize,
    pub environment_variable_errors: usize,
    pub property_errors: usize,
}

impl CountingFailureObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.comment_errors
            + self.node_errors
            + self.message_errors
            + self.signal_errors
            + self.environment_variable_errors
            + self.property_errors
    }
}

impl ParseFailureObserver for CountingFailureObserver {
    fn comment_syntax_error(&mut self) {
        self.comment_errors += 1;
    }

    fn node_syntax_error(&mut self) {
        self.node_errors += 1;
    }

    fn message_syntax_error(&mut self) {
        self.message_errors += 1;
    }

    fn signal_syntax_error(&mut self) {
        self.signal_errors += 1;
    }

    fn environment_variable_syntax_error(&mut self) {
        self.environment_variable_errors += 1;
    }

    fn property_syntax_error(&mut self) {
        self.property_errors += 1;
    }
}
