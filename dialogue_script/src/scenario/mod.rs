//! Scenario definitions - named conversation graphs with fail-fast validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::script::{AssetRef, ChoiceTarget, Node, NodeId};
use crate::slots::{SlotValue, Slots};

/// Configuration defects in scenario data.
///
/// All of these are unrecoverable: they indicate broken scenario content, not
/// a transient condition, so callers reject the whole scenario.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The entry node id is not a key in the node map.
    #[error("entry node '{0}' is not defined in the scenario")]
    MissingEntryNode(NodeId),

    /// A choice targets a node id that is not a key in the node map.
    #[error("node '{node}' has a choice targeting undefined node '{target}'")]
    DanglingTarget { node: NodeId, target: NodeId },

    /// A node has an empty choice list and would dead-end the conversation.
    #[error("node '{0}' has no choices")]
    NoChoices(NodeId),

    /// A scenario file could not be read.
    #[error("failed to read scenario file: {0}")]
    FileRead(String),

    /// A scenario file is not valid TOML.
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A slot literal in a scenario file is neither a scalar nor a list of
    /// scalars.
    #[error("slot '{slot}' holds a value that is not a scalar or list of scalars")]
    NonScalarSlot { slot: String },
}

/// An immutable named conversation graph: nodes keyed by id, the entry node,
/// the default slot schema, and display metadata.
///
/// Shared read-only by every session; sessions copy `default_slots` at start
/// and never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable identifier for this scenario.
    pub id: String,

    /// Display title.
    pub title: String,

    /// One-line teaser describing the flow.
    #[serde(default)]
    pub blurb: String,

    /// Decorative glyph shown next to the title.
    pub emoji: Option<String>,

    /// Default avatar for the narrator.
    pub npc_avatar: Option<AssetRef>,

    /// Slot values every fresh session starts from.
    #[serde(default)]
    pub default_slots: Slots,

    /// The conversation graph.
    pub nodes: HashMap<NodeId, Node>,

    /// Where fresh sessions begin.
    pub entry: NodeId,

    /// Free-form metadata for downstream layers.
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Scenario {
    /// Create a scenario with the given id and entry node id.
    pub fn new(id: impl Into<String>, entry: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            blurb: String::new(),
            emoji: None,
            npc_avatar: None,
            default_slots: Slots::new(),
            nodes: HashMap::new(),
            entry: entry.into(),
            extra: HashMap::new(),
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the teaser line.
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }

    /// Set the decorative glyph.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set the narrator avatar.
    pub fn with_avatar(mut self, asset: impl Into<AssetRef>) -> Self {
        self.npc_avatar = Some(asset.into());
        self
    }

    /// Add a default slot value.
    pub fn with_default_slot(
        mut self,
        key: impl Into<String>,
        value: impl Into<SlotValue>,
    ) -> Self {
        self.default_slots.assign(key, value);
        self
    }

    /// Add a node to the graph.
    pub fn with_node(mut self, id: impl Into<NodeId>, node: Node) -> Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check the whole graph for configuration defects.
    ///
    /// Rejects a missing entry node, any choice targeting an undefined node,
    /// and any node with an empty choice list. Reset targets are control
    /// signals, not node references, and are not checked against the map.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if !self.nodes.contains_key(&self.entry) {
            return Err(ScriptError::MissingEntryNode(self.entry.clone()));
        }

        for (id, node) in &self.nodes {
            if node.choices.is_empty() {
                return Err(ScriptError::NoChoices(id.clone()));
            }
            for choice in &node.choices {
                if let ChoiceTarget::Goto(target) = &choice.target {
                    if !self.nodes.contains_key(target) {
                        return Err(ScriptError::DanglingTarget {
                            node: id.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate and return the scenario, for builder chains.
    pub fn validated(self) -> Result<Self, ScriptError> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{Choice, TriText};

    fn line(text: &str) -> TriText {
        TriText::new(text, text, text)
    }

    #[test]
    fn test_valid_scenario() {
        let scenario = Scenario::new("greeting", "start")
            .with_title("Greeting")
            .with_node(
                "start",
                Node::new(line("hello")).with_choice(Choice::goto(line("hi"), "end")),
            )
            .with_node(
                "end",
                Node::new(line("bye")).with_choice(Choice::reset(line("again"))),
            );

        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_missing_entry_node_rejected() {
        let scenario = Scenario::new("broken", "start");
        assert!(matches!(
            scenario.validate(),
            Err(ScriptError::MissingEntryNode(id)) if id.as_str() == "start"
        ));
    }

    #[test]
    fn test_dangling_target_rejected() {
        let scenario = Scenario::new("broken", "start").with_node(
            "start",
            Node::new(line("hello")).with_choice(Choice::goto(line("hi"), "nowhere")),
        );

        assert!(matches!(
            scenario.validate(),
            Err(ScriptError::DanglingTarget { target, .. }) if target.as_str() == "nowhere"
        ));
    }

    #[test]
    fn test_empty_choices_rejected() {
        let scenario = Scenario::new("broken", "start").with_node("start", Node::new(line("hello")));

        assert!(matches!(
            scenario.validate(),
            Err(ScriptError::NoChoices(id)) if id.as_str() == "start"
        ));
    }

    #[test]
    fn test_reset_target_is_not_a_node_reference() {
        let scenario = Scenario::new("loop", "start").with_node(
            "start",
            Node::new(line("hello")).with_choice(Choice::reset(line("again"))),
        );

        assert!(scenario.validate().is_ok());
    }
}
