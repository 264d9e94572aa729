//! The transition engine - advances a session through a scenario graph.
//!
//! One user action (a choice selection or a reset) is exactly one engine
//! invocation, which completes fully before the next render. The engine
//! never mutates the state it is given: it returns a new state, and any
//! error leaves the input untouched.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use dialogue_script::{AssetRef, Choice, ChoiceTarget, Node, NodeId, Scenario};

use crate::clock::Timestamp;
use crate::session::{OverlayState, SessionState};

/// Traversal-time defects.
///
/// Both kinds indicate broken scenario data or broken caller logic, not a
/// transient condition; they propagate as hard failures and are never
/// downgraded to a default node.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A current or target node id has no entry in the scenario's node map.
    /// Scenario validation catches this at load time; hitting it here means
    /// an unvalidated scenario slipped through.
    #[error("node '{0}' is not defined in the scenario")]
    UnknownNode(NodeId),

    /// The caller passed a choice that the current node does not offer.
    /// Transitions must stay confined to the declared graph, so membership
    /// is verified rather than trusted.
    #[error("choice is not offered by node '{0}'")]
    ForeignChoice(NodeId),
}

/// Tunables for the transition engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long a transient overlay stays visible after the choice that
    /// armed it.
    pub overlay_duration: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overlay_duration: Duration::from_secs(3),
        }
    }
}

/// Applies choices to session states over a shared scenario graph.
#[derive(Debug, Clone, Default)]
pub struct TransitionEngine {
    config: EngineConfig,
}

impl TransitionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Look up the session's current node in the scenario.
    pub fn current_node<'a>(
        &self,
        scenario: &'a Scenario,
        state: &SessionState,
    ) -> Result<&'a Node, EngineError> {
        scenario
            .node(&state.current)
            .ok_or_else(|| EngineError::UnknownNode(state.current.clone()))
    }

    /// Apply a selected choice, producing the session's next state.
    ///
    /// Effects, in order: slot replacements, slot accumulations (so a slot
    /// assigned and appended in one choice ends up a list), overlay arming,
    /// background swap, node transition. A `Reset` target short-circuits to
    /// a fresh start instead; none of the choice's other effects survive it.
    ///
    /// The transition is atomic: on any error the returned state never
    /// existed and the input state was not touched.
    pub fn apply_choice(
        &self,
        scenario: &Scenario,
        state: &SessionState,
        choice: &Choice,
        now: Timestamp,
    ) -> Result<SessionState, EngineError> {
        let node = self.current_node(scenario, state)?;
        if !node.choices.contains(choice) {
            return Err(EngineError::ForeignChoice(state.current.clone()));
        }

        let next = match &choice.target {
            ChoiceTarget::Reset => {
                debug!(scenario = %scenario.id, from = %state.current, "conversation reset");
                return Ok(SessionState::start(scenario));
            }
            ChoiceTarget::Goto(next) => next,
        };
        if scenario.node(next).is_none() {
            return Err(EngineError::UnknownNode(next.clone()));
        }

        let mut updated = state.clone();
        for (key, value) in &choice.assign {
            updated.slots.assign(key.clone(), value.clone());
        }
        for (key, value) in &choice.append {
            updated.slots.append(key.clone(), value.clone());
        }
        if let Some(asset) = &choice.overlay {
            updated.overlay = Some(OverlayState {
                asset: asset.clone(),
                expires_at: now + self.config.overlay_duration,
            });
        }
        if let Some(asset) = &choice.background {
            updated.background = Some(asset.clone());
        }
        updated.current = next.clone();

        debug!(
            scenario = %scenario.id,
            from = %state.current,
            to = %updated.current,
            "applied choice"
        );
        Ok(updated)
    }

    /// Resolve the background to display for the session's current node.
    ///
    /// Precedence, highest first: the current node's own background, then
    /// the background the session has accumulated from past choices, then
    /// the fallback. Accumulated backgrounds deliberately persist across
    /// unrelated nodes until something overrides them.
    pub fn resolve_background(
        &self,
        scenario: &Scenario,
        state: &SessionState,
        fallback: &AssetRef,
    ) -> Result<AssetRef, EngineError> {
        let node = self.current_node(scenario, state)?;
        Ok(node
            .background
            .clone()
            .or_else(|| state.background.clone())
            .unwrap_or_else(|| fallback.clone()))
    }
}
