//! Session state - the single mutable record of one running conversation.

mod registry;

pub use registry::*;

use serde::{Deserialize, Serialize};

use dialogue_script::{AssetRef, NodeId, Scenario, Slots};

use crate::clock::Timestamp;

/// A transient overlay armed by a choice, visible until its expiry instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    /// What to flash over the scene.
    pub asset: AssetRef,
    /// The instant the overlay stops being visible.
    pub expires_at: Timestamp,
}

/// The mutable runtime record of one interactive session.
///
/// Everything else in the system is immutable: the scenario is shared
/// read-only between sessions, and this struct is owned by exactly one
/// session at a time. It is mutated only through the transition engine and
/// replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The node the conversation is currently at.
    pub current: NodeId,

    /// Slot values accumulated so far.
    pub slots: Slots,

    /// The active transient overlay, if any. Expiry is evaluated lazily by
    /// comparing against a caller-supplied instant at read time.
    pub overlay: Option<OverlayState>,

    /// The background the session has accumulated from past choices.
    pub background: Option<AssetRef>,
}

impl SessionState {
    /// Start a fresh session: the scenario's entry node, a deep copy of its
    /// default slots, no overlay, and the entry node's own background.
    ///
    /// This is also the reset operation; there is no undo or history stack.
    /// The copied slots never alias the scenario's template.
    pub fn start(scenario: &Scenario) -> Self {
        Self {
            current: scenario.entry.clone(),
            slots: scenario.default_slots.clone(),
            overlay: None,
            background: scenario
                .node(&scenario.entry)
                .and_then(|node| node.background.clone()),
        }
    }

    /// Check whether the overlay should be drawn at the given instant.
    ///
    /// Pure polling predicate: the render path re-evaluates it on every
    /// tick. Nothing proactively clears an expired overlay; an overlay that
    /// is never re-read simply never becomes invisible, which is accepted.
    pub fn overlay_visible(&self, now: Timestamp) -> bool {
        self.overlay
            .as_ref()
            .map_or(false, |overlay| now < overlay.expires_at)
    }

    /// Drop the overlay if it has expired by the given instant.
    ///
    /// Render-path helper: called on state reads, since the engine only
    /// replaces overlays as a side effect of later choices.
    pub fn clear_expired_overlay(&mut self, now: Timestamp) {
        if let Some(overlay) = &self.overlay {
            if now >= overlay.expires_at {
                self.overlay = None;
            }
        }
    }

    /// Snapshot the accumulated slots as JSON for downstream display
    /// (receipts, order summaries).
    pub fn slots_json(&self) -> serde_json::Value {
        self.slots.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue_script::catalog;
    use dialogue_script::SlotValue;
    use std::time::Duration;

    #[test]
    fn test_start_matches_scenario_defaults() {
        let scenario = catalog::izakaya();
        let state = SessionState::start(&scenario);

        assert_eq!(state.current, scenario.entry);
        assert_eq!(state.slots, scenario.default_slots);
        assert!(state.overlay.is_none());
        assert_eq!(
            state.background,
            scenario.node(&scenario.entry).unwrap().background
        );
    }

    #[test]
    fn test_start_deep_copies_default_slots() {
        let scenario = catalog::izakaya();

        let mut first = SessionState::start(&scenario);
        first.slots.assign("n", 3);
        first.slots.append("food", "eihire");

        // A later fresh session still sees the untouched template.
        let second = SessionState::start(&scenario);
        assert_eq!(second.slots, scenario.default_slots);
        assert_eq!(second.slots.get("food"), Some(&SlotValue::List(Vec::new())));
        assert!(second.slots.get("n").is_none());
    }

    #[test]
    fn test_overlay_visibility_window() {
        let scenario = catalog::izakaya();
        let mut state = SessionState::start(&scenario);

        let armed_at = Timestamp::from_secs(10);
        state.overlay = Some(OverlayState {
            asset: "images/hand_raise.png".into(),
            expires_at: armed_at + Duration::from_secs(3),
        });

        assert!(state.overlay_visible(armed_at));
        assert!(state.overlay_visible(armed_at + Duration::from_millis(2_999)));
        assert!(!state.overlay_visible(armed_at + Duration::from_secs(3)));
        assert!(!state.overlay_visible(armed_at + Duration::from_millis(3_001)));
    }

    #[test]
    fn test_no_overlay_is_never_visible() {
        let scenario = catalog::izakaya();
        let state = SessionState::start(&scenario);
        assert!(!state.overlay_visible(Timestamp::ZERO));
    }

    #[test]
    fn test_clear_expired_overlay() {
        let scenario = catalog::izakaya();
        let mut state = SessionState::start(&scenario);
        state.overlay = Some(OverlayState {
            asset: "images/finger_2.png".into(),
            expires_at: Timestamp::from_secs(5),
        });

        // Not yet expired: kept.
        state.clear_expired_overlay(Timestamp::from_secs(4));
        assert!(state.overlay.is_some());

        state.clear_expired_overlay(Timestamp::from_secs(5));
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_slots_json_snapshot() {
        let scenario = catalog::izakaya();
        let mut state = SessionState::start(&scenario);
        state.slots.assign("n", 2);
        state.slots.append("food", "sashimori");

        let json = state.slots_json();
        assert_eq!(json["n"], serde_json::json!(2));
        assert_eq!(json["food"], serde_json::json!(["sashimori"]));
    }
}
