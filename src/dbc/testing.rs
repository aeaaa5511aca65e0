//! Test support: recording doubles for the parsing seams
//!
//! The builder and observer contracts are traits precisely so tests can
//! substitute recording implementations and assert on the exact sequence of
//! calls a parser makes. Used by the crate's own unit and integration
//! tests; exported because downstream collaborators (e.g. a spreadsheet
//! importer feeding the same builder contract) need the same doubles.

use super::builder::DbcBuilder;
use super::line_provider::NextLineProvider;
use super::model::{CustomProperty, EnvironmentVariable, Message, Node, PropertyValue, Signal};
use super::observer::ParseFailureObserver;

/// One recorded builder invocation, with the arguments that matter to
/// assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCall {
    Node(String),
    NodeComment(String, String),
    Message(Message),
    MessageComment(u32, String),
    Signal(Signal),
    SignalComment(u32, String, String),
    EnvironmentVariable(EnvironmentVariable),
    EnvironmentVariableComment(String, String),
    FileComment(String),
    GlobalProperty(String, PropertyValue),
}

/// A builder that records every call instead of accumulating a model.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<BuilderCall>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DbcBuilder for RecordingBuilder {
    fn add_node(&mut self, node: Node) {
        self.calls.push(BuilderCall::Node(node.name));
    }

    fn add_node_comment(&mut self, node_name: &str, comment: &str) {
        self.calls.push(BuilderCall::NodeComment(
            node_name.to_string(),
            comment.to_string(),
        ));
    }

    fn add_message(&mut self, message: Message) {
        self.calls.push(BuilderCall::Message(message));
    }

    fn add_message_comment(&mut self, message_id: u32, comment: &str) {
        self.calls
            .push(BuilderCall::MessageComment(message_id, comment.to_string()));
    }

    fn add_signal(&mut self, signal: Signal) {
        self.calls.push(BuilderCall::Signal(signal));
    }

    fn add_signal_comment(&mut self, message_id: u32, signal_name: &str, comment: &str) {
        self.calls.push(BuilderCall::SignalComment(
            message_id,
            signal_name.to_string(),
            comment.to_string(),
        ));
    }

    fn add_environment_variable(&mut self, variable: EnvironmentVariable) {
        self.calls.push(BuilderCall::EnvironmentVariable(variable));
    }

    fn add_environment_variable_comment(&mut self, variable_name: &str, comment: &str) {
        self.calls.push(BuilderCall::EnvironmentVariableComment(
            variable_name.to_string(),
            comment.to_string(),
        ));
    }

    fn add_file_comment(&mut self, comment: &str) {
        self.calls.push(BuilderCall::FileComment(comment.to_string()));
    }

    fn add_global_property(&mut self, property: CustomProperty) {
        self.calls
            .push(BuilderCall::GlobalProperty(property.name, property.value));
    }
}

/// An observer that counts events per record kind.
///
/// Same shape as `CountingFailureObserver`; lives here so test assertions
/// and the recording builder come from one import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordingObserver {
    pub comment_errors: usize,
    pub node_errors: usize,
    pub message_errors: usize,
    pub signal_errors: usize,
    pub environment_variable_errors: usize,
    pub property_errors: usize,
}

impl RecordingObserver {
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

impl ParseFailureObserver for RecordingObserver {
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

/// A line provider over a fixed list of lines, tracking how many were
/// consumed so tests can assert a declining parser touched nothing.
#[derive(Debug)]
pub struct ArrayLineProvider {
    lines: Vec<String>,
    index: usize,
}

impl ArrayLineProvider {
    pub fn new<S: Into<String>>(lines: Vec<S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    /// Number of lines pulled so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl NextLineProvider for ArrayLineProvider {
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.index)?.clone();
        self.index += 1;
        Some(line)
    }
}
