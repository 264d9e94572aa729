//! Session registry - explicit ownership of many independent sessions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use dialogue_script::Scenario;

use super::SessionState;

/// Unique identifier for interactive sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty session ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holds the live sessions of one deployment, keyed by session id.
///
/// Each session's state is independently owned; the registry only names that
/// ownership, it shares nothing between sessions. Access is single-writer
/// per session, so no locking is needed here.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, SessionState>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session on the given scenario.
    pub fn open(&mut self, scenario: &Scenario) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, SessionState::start(scenario));
        debug!(session = %id, scenario = %scenario.id, "opened session");
        id
    }

    /// Get a session's state.
    pub fn get(&self, id: SessionId) -> Option<&SessionState> {
        self.sessions.get(&id)
    }

    /// Get a session's state mutably.
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut SessionState> {
        self.sessions.get_mut(&id)
    }

    /// Store a session's next state, as produced by the transition engine.
    ///
    /// Returns false if the session is unknown.
    pub fn store(&mut self, id: SessionId, state: SessionState) -> bool {
        match self.sessions.get_mut(&id) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    /// Restart a session from the scenario's entry node.
    ///
    /// Returns false if the session is unknown.
    pub fn reset(&mut self, id: SessionId, scenario: &Scenario) -> bool {
        self.store(id, SessionState::start(scenario))
    }

    /// Close a session, returning its final state.
    pub fn close(&mut self, id: SessionId) -> Option<SessionState> {
        let state = self.sessions.remove(&id);
        if state.is_some() {
            debug!(session = %id, "closed session");
        }
        state
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue_script::catalog;

    #[test]
    fn test_open_and_get() {
        let scenario = catalog::izakaya();
        let mut registry = SessionRegistry::new();

        let id = registry.open(&scenario);
        assert_eq!(registry.len(), 1);

        let state = registry.get(id).unwrap();
        assert_eq!(state.current, scenario.entry);
    }

    #[test]
    fn test_sessions_are_independent() {
        let scenario = catalog::izakaya();
        let mut registry = SessionRegistry::new();

        let first = registry.open(&scenario);
        let second = registry.open(&scenario);
        assert_ne!(first, second);

        registry.get_mut(first).unwrap().slots.assign("n", 2);

        assert!(registry.get(second).unwrap().slots.get("n").is_none());
    }

    #[test]
    fn test_reset_restores_entry_state() {
        let scenario = catalog::izakaya();
        let mut registry = SessionRegistry::new();

        let id = registry.open(&scenario);
        registry.get_mut(id).unwrap().slots.assign("pay", "card");

        assert!(registry.reset(id, &scenario));
        assert_eq!(registry.get(id).unwrap().slots, scenario.default_slots);
    }

    #[test]
    fn test_close_removes_session() {
        let scenario = catalog::izakaya();
        let mut registry = SessionRegistry::new();

        let id = registry.open(&scenario);
        assert!(registry.close(id).is_some());
        assert!(registry.is_empty());
        assert!(registry.get(id).is_none());
        assert!(!registry.store(id, SessionState::start(&scenario)));
    }
}
