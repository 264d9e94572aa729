//! Declarative TOML scenario files.
//!
//! A scenario file has a `[scenario]` header, an optional `[slots]` table of
//! default slot values, and one `[nodes.<id>]` table per conversation step:
//!
//! ```toml
//! [scenario]
//! id = "greeting"
//! title = "Greeting"
//! entry = "start"
//!
//! [nodes.start]
//! line = { native = "やあ", translation = "Hi", transliteration = "yaa" }
//!
//! [[nodes.start.choices]]
//! label = { native = "またね", translation = "See you", transliteration = "mata ne" }
//! next = "__RESET__"
//! ```
//!
//! A choice's `next` is a node id, or the literal `"__RESET__"` to restart
//! the conversation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::scenario::{Scenario, ScriptError};
use crate::script::{Choice, ChoiceTarget, Node, TriText};
use crate::slots::{ScalarValue, SlotValue};

/// The `next` value that restarts the conversation instead of naming a node.
pub const RESET_SENTINEL: &str = "__RESET__";

#[derive(Debug, Deserialize)]
struct RawScenarioFile {
    scenario: RawScenario,
    #[serde(default)]
    slots: toml::Table,
    #[serde(default)]
    nodes: HashMap<String, RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawScenario {
    id: String,
    title: String,
    #[serde(default)]
    blurb: String,
    emoji: Option<String>,
    entry: String,
    npc_avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    line: TriText,
    #[serde(default)]
    choices: Vec<RawChoice>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChoice {
    label: TriText,
    next: String,
    #[serde(default)]
    assign: toml::Table,
    #[serde(default)]
    append: toml::Table,
    overlay: Option<String>,
    background: Option<String>,
}

impl Scenario {
    /// Load and validate a scenario from a TOML file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::FileRead(e.to_string()))?;
        content.parse()
    }

    /// Parse and validate a scenario from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        content.parse()
    }
}

impl FromStr for Scenario {
    type Err = ScriptError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw: RawScenarioFile = toml::from_str(content)?;

        let mut scenario = Scenario::new(raw.scenario.id, raw.scenario.entry)
            .with_title(raw.scenario.title)
            .with_blurb(raw.scenario.blurb);
        if let Some(emoji) = raw.scenario.emoji {
            scenario = scenario.with_emoji(emoji);
        }
        if let Some(avatar) = raw.scenario.npc_avatar {
            scenario = scenario.with_avatar(avatar);
        }

        for (key, value) in &raw.slots {
            scenario = scenario.with_default_slot(key.as_str(), slot_value(key, value)?);
        }

        for (id, raw_node) in raw.nodes {
            let mut node = Node::new(raw_node.line);
            if let Some(background) = raw_node.background {
                node = node.with_background(background);
            }
            for raw_choice in raw_node.choices {
                node = node.with_choice(convert_choice(raw_choice)?);
            }
            scenario = scenario.with_node(id, node);
        }

        let scenario = scenario.validated()?;
        debug!(
            scenario = %scenario.id,
            nodes = scenario.nodes.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }
}

fn convert_choice(raw: RawChoice) -> Result<Choice, ScriptError> {
    let target = if raw.next == RESET_SENTINEL {
        ChoiceTarget::Reset
    } else {
        ChoiceTarget::goto(raw.next)
    };

    let mut choice = Choice::new(raw.label, target);
    for (key, value) in &raw.assign {
        choice = choice.with_assign(key.as_str(), slot_value(key, value)?);
    }
    for (key, value) in &raw.append {
        choice = choice.with_append(key.as_str(), scalar_value(key, value)?);
    }
    if let Some(overlay) = raw.overlay {
        choice = choice.with_overlay(overlay);
    }
    if let Some(background) = raw.background {
        choice = choice.with_background(background);
    }
    Ok(choice)
}

fn slot_value(slot: &str, value: &toml::Value) -> Result<SlotValue, ScriptError> {
    if let toml::Value::Array(items) = value {
        let values = items
            .iter()
            .map(|item| scalar_value(slot, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SlotValue::List(values))
    } else {
        Ok(SlotValue::Scalar(scalar_value(slot, value)?))
    }
}

fn scalar_value(slot: &str, value: &toml::Value) -> Result<ScalarValue, ScriptError> {
    match value {
        toml::Value::Boolean(b) => Ok(ScalarValue::Bool(*b)),
        toml::Value::Integer(i) => Ok(ScalarValue::Int(*i)),
        toml::Value::Float(f) => Ok(ScalarValue::Float(*f)),
        toml::Value::String(s) => Ok(ScalarValue::Text(s.clone())),
        _ => Err(ScriptError::NonScalarSlot {
            slot: slot.to_string(),
        }),
    }
}
