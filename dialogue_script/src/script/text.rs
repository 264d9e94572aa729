//! Trilingual utterance text.

use serde::{Deserialize, Serialize};

/// One utterance in three parallel representations: native script,
/// translation, and phonetic transliteration.
///
/// All three fields are required; by convention they are non-empty, though
/// that is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriText {
    /// The utterance in its native script.
    pub native: String,
    /// The translated utterance.
    pub translation: String,
    /// A phonetic transliteration of the native text.
    pub transliteration: String,
}

impl TriText {
    /// Create a trilingual utterance.
    pub fn new(
        native: impl Into<String>,
        translation: impl Into<String>,
        transliteration: impl Into<String>,
    ) -> Self {
        Self {
            native: native.into(),
            translation: translation.into(),
            transliteration: transliteration.into(),
        }
    }
}
