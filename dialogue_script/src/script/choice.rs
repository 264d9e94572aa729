//! Choice definitions - the user-selectable actions of a node.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AssetRef, NodeId, TriText};
use crate::slots::{ScalarValue, SlotValue};

/// Where a choice takes the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChoiceTarget {
    /// Transition to the named node.
    Goto(NodeId),
    /// Restart the conversation from the scenario's entry node, discarding
    /// every accumulated effect. This is a control signal, not a node id.
    Reset,
}

impl ChoiceTarget {
    /// Target the named node.
    pub fn goto(id: impl Into<NodeId>) -> Self {
        ChoiceTarget::Goto(id.into())
    }
}

/// One user-selectable action: a trilingual label, a target, the slot
/// effects to apply, and optional transient-overlay and background assets.
///
/// Immutable once constructed; built with `with_*` chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The label shown to the user.
    pub label: TriText,

    /// Where selecting this choice takes the conversation.
    pub target: ChoiceTarget,

    /// Slot replacements applied on selection. Applied before `append` when
    /// both touch the same slot.
    #[serde(default)]
    pub assign: HashMap<String, SlotValue>,

    /// Slot accumulations applied on selection.
    #[serde(default)]
    pub append: HashMap<String, ScalarValue>,

    /// Transient overlay flashed for a bounded window after selection.
    pub overlay: Option<AssetRef>,

    /// Background swapped in when this choice is selected. Persists across
    /// later nodes until something else overrides it.
    pub background: Option<AssetRef>,
}

impl Choice {
    /// Create a choice with the given label and target.
    pub fn new(label: TriText, target: ChoiceTarget) -> Self {
        Self {
            label,
            target,
            assign: HashMap::new(),
            append: HashMap::new(),
            overlay: None,
            background: None,
        }
    }

    /// Create a choice that transitions to the named node.
    pub fn goto(label: TriText, next: impl Into<NodeId>) -> Self {
        Self::new(label, ChoiceTarget::goto(next))
    }

    /// Create a choice that restarts the conversation.
    pub fn reset(label: TriText) -> Self {
        Self::new(label, ChoiceTarget::Reset)
    }

    /// Add a slot replacement.
    pub fn with_assign(mut self, key: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        self.assign.insert(key.into(), value.into());
        self
    }

    /// Add a slot accumulation.
    pub fn with_append(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.append.insert(key.into(), value.into());
        self
    }

    /// Set the transient overlay asset.
    pub fn with_overlay(mut self, asset: impl Into<AssetRef>) -> Self {
        self.overlay = Some(asset.into());
        self
    }

    /// Set the background asset.
    pub fn with_background(mut self, asset: impl Into<AssetRef>) -> Self {
        self.background = Some(asset.into());
        self
    }
}
