//! Accumulation contract and the concrete model builder
//!
//! Record parsers never touch the model directly: they call one append-style
//! operation per parsed fact on a [`DbcBuilder`]. Every operation is a pure
//! recording step — the builder does not validate referential integrity
//! (a comment for an id that was never declared is simply dropped, not
//! rejected).
//!
//! Merge policy, fixed and documented here:
//!
//! - comments: last write wins, for every subject kind
//! - duplicate node names, property names: last write wins
//! - duplicate message ids: the later `BO_` record replaces the earlier one
//! - a signal arriving before any message has been declared is dropped
//!
//! [`DbcModelBuilder::finalize`] consumes the builder and moves its contents
//! into the immutable [`Dbc`], so a builder cannot be reused across parses.

use super::model::{CustomProperty, Dbc, EnvironmentVariable, Message, Node, Signal};

/// The accumulation contract: one operation per fact kind.
pub trait DbcBuilder {
    fn add_node(&mut self, node: Node);
    fn add_node_comment(&mut self, node_name: &str, comment: &str);
    fn add_message(&mut self, message: Message);
    fn add_message_comment(&mut self, message_id: u32, comment: &str);
    /// Attach a signal to the most recently added message.
    fn add_signal(&mut self, signal: Signal);
    fn add_signal_comment(&mut self, message_id: u32, signal_name: &str, comment: &str);
    fn add_environment_variable(&mut self, variable: EnvironmentVariable);
    fn add_environment_variable_comment(&mut self, variable_name: &str, comment: &str);
    /// Attach a comment to the whole file.
    fn add_file_comment(&mut self, comment: &str);
    fn add_global_property(&mut self, property: CustomProperty);
}

/// Accumulates parsed facts and finalizes them into a [`Dbc`].
#[derive(Debug, Default)]
pub struct DbcModelBuilder {
    nodes: Vec<Node>,
    messages: Vec<Message>,
    environment_variables: Vec<EnvironmentVariable>,
    global_properties: Vec<CustomProperty>,
    file_comment: Option<String>,
    /// Index into `messages` of the message signals currently attach to.
    current_message: Option<usize>,
}

impl DbcModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the accumulated contents into the immutable model.
    pub fn finalize(self) -> Dbc {
        Dbc::new(
            self.nodes,
            self.messages,
            self.environment_variables,
            self.global_properties,
            self.file_comment,
        )
    }

    fn message_index(&self, id: u32) -> Option<usize> {
        self.messages.iter().position(|message| message.id == id)
    }
}

impl DbcBuilder for DbcModelBuilder {
    fn add_node(&mut self, node: Node) {
        match self.nodes.iter().position(|n| n.name == node.name) {
            Some(index) => self.nodes[index] = node,
            None => self.nodes.push(node),
        }
    }

    fn add_node_comment(&mut self, node_name: &str, comment: &str) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.name == node_name) {
            node.comment = Some(comment.to_string());
        }
    }

    fn add_message(&mut self, message: Message) {
        match self.message_index(message.id) {
            Some(index) => {
                self.messages[index] = message;
                self.current_message = Some(index);
            }
            None => {
                self.messages.push(message);
                self.current_message = Some(self.messages.len() - 1);
            }
        }
    }

    fn add_message_comment(&mut self, message_id: u32, comment: &str) {
        if let Some(index) = self.message_index(message_id) {
            self.messages[index].comment = Some(comment.to_string());
        }
    }

    fn add_signal(&mut self, signal: Signal) {
        let Some(index) = self.current_message else {
            return;
        };
        let signals = &mut self.messages[index].signals;
        match signals.iter().position(|s| s.name == signal.name) {
            Some(slot) => signals[slot] = signal,
            None => signals.push(signal),
        }
    }

    fn add_signal_comment(&mut self, message_id: u32, signal_name: &str, comment: &str) {
        let Some(index) = self.message_index(message_id) else {
            return;
        };
        if let Some(signal) = self.messages[index]
            .signals
            .iter_mut()
            .find(|s| s.name == signal_name)
        {
            signal.comment = Some(comment.to_string());
        }
    }

    fn add_environment_variable(&mut self, variable: EnvironmentVariable) {
        match self
            .environment_variables
            .iter()
            .position(|v| v.name == variable.name)
        {
            Some(index) => self.environment_variables[index] = variable,
            None => self.environment_variables.push(variable),
        }
    }

    fn add_environment_variable_comment(&mut self, variable_name: &str, comment: &str) {
        if let Some(variable) = self
            .environment_variables
            .iter_mut()
            .find(|v| v.name == variable_name)
        {
            variable.comment = Some(comment.to_string());
        }
    }

    fn add_file_comment(&mut self, comment: &str) {
        self.file_comment = Some(comment.to_string());
    }

    fn add_global_property(&mut self, property: CustomProperty) {
        match self
            .global_properties
            .iter()
            .position(|p| p.name == property.name)
        {
            Some(index) => self.global_properties[index] = property,
            None => self.global_properties.push(property),
        }
    }
}
