//! Script building blocks: utterances, choices, and conversation nodes.

mod choice;
mod node;
mod text;

pub use choice::*;
pub use node::*;
pub use text::*;

use serde::{Deserialize, Serialize};

/// Identifier of a node within one scenario's graph.
///
/// Node ids are human-chosen strings ("start", "menu", "bill") rather than
/// generated ids, so scenario files stay readable and diffable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a displayable asset (a path or key).
///
/// The core never loads, decodes, or interprets the referenced bytes; it only
/// carries the reference through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Create an asset reference from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// View the reference as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for AssetRef {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_from_str() {
        let id: NodeId = "start".into();
        assert_eq!(id.as_str(), "start");
        assert_eq!(id, NodeId::new("start"));
    }

    #[test]
    fn test_asset_ref_display() {
        let asset = AssetRef::new("images/izakaya1.jpg");
        assert_eq!(asset.to_string(), "images/izakaya1.jpg");
    }
}
