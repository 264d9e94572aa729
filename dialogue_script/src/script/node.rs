//! Node definitions - single steps of a conversation.

use serde::{Deserialize, Serialize};

use super::{AssetRef, Choice, TriText};

/// One conversation step: a narrator utterance plus the choices available
/// from it, and an optional background that overrides the ambient background
/// while this node is current.
///
/// A node with no choices is a dead end; scenario validation rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// What the narrator says at this step.
    pub line: TriText,

    /// The selectable actions, in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Background shown while this node is current, overriding whatever
    /// background the session has accumulated.
    pub background: Option<AssetRef>,
}

impl Node {
    /// Create a node with the given narrator line and no choices yet.
    pub fn new(line: TriText) -> Self {
        Self {
            line,
            choices: Vec::new(),
            background: None,
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Add multiple choices.
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.choices.extend(choices);
        self
    }

    /// Set the node-level background override.
    pub fn with_background(mut self, asset: impl Into<AssetRef>) -> Self {
        self.background = Some(asset.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = Node::new(TriText::new("ごちゅうもんは？", "What would you like to order?", "go-chuumon wa?"))
            .with_choice(Choice::goto(TriText::new("ねぎま", "Negima yakitori", "negima"), "add"))
            .with_background("images/menu_izakaya.jpg");

        assert_eq!(node.choices.len(), 1);
        assert_eq!(node.background, Some(AssetRef::new("images/menu_izakaya.jpg")));
    }

    #[test]
    fn test_node_starts_without_choices() {
        let node = Node::new(TriText::new("ありがとうございました！", "Thank you very much!", "arigatou gozaimashita!"));
        assert!(node.choices.is_empty());
    }
}
