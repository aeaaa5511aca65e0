//! The immutable database aggregate

use super::{CustomProperty, EnvironmentVariable, Message, Node};
use serde::{Deserialize, Serialize};

/// A fully parsed DBC database.
///
/// Built once by a `DbcModelBuilder` and read-only afterwards: the four
/// collections and the file comment are only exposed by reference. Order of
/// the collections carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dbc {
    nodes: Vec<Node>,
    messages: Vec<Message>,
    environment_variables: Vec<EnvironmentVariable>,
    global_properties: Vec<CustomProperty>,
    file_comment: Option<String>,
}

impl Dbc {
    pub(crate) fn new(
        nodes: Vec<Node>,
        messages: Vec<Message>,
        environment_variables: Vec<EnvironmentVariable>,
        global_properties: Vec<CustomProperty>,
        file_comment: Option<String>,
    ) -> Self {
        Self {
            nodes,
            messages,
            environment_variables,
            global_properties,
            file_comment,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn environment_variables(&self) -> &[EnvironmentVariable] {
        &self.environment_variables
    }

    pub fn global_properties(&self) -> &[CustomProperty] {
        &self.global_properties
    }

    /// The comment attached to the whole file, if any.
    pub fn file_comment(&self) -> Option<&str> {
        self.file_comment.as_deref()
    }

    /// Look up a message by its numeric CAN id.
    pub fn message_by_id(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Look up a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
