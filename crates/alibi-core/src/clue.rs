//! Clues as presented to the player.

use crate::{Fact, IdentityFact};

/// Kind of a clue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ClueKind {
    /// A pairwise fact about two entities.
    Normal,
    /// A fact about the culprit that singles out the solution.
    Identity,
}

/// Structured content of a clue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueContent {
    /// A pairwise fact.
    Fact(Fact),
    /// A statement about the culprit.
    Identity(IdentityFact),
}

/// A clue: its sentence plus the structured content it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Clue {
    id: String,
    text: String,
    content: ClueContent,
}

impl Clue {
    /// Creates a clue.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, content: ClueContent) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            content,
        }
    }

    /// Returns the identifier, such as `h3`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the sentence.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the structured content.
    #[must_use]
    pub fn content(&self) -> &ClueContent {
        &self.content
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> ClueKind {
        match self.content {
            ClueContent::Fact(_) => ClueKind::Normal,
            ClueContent::Identity(_) => ClueKind::Identity,
        }
    }

    /// Returns the pairwise fact of a normal clue.
    #[must_use]
    pub fn fact(&self) -> Option<&Fact> {
        match &self.content {
            ClueContent::Fact(fact) => Some(fact),
            ClueContent::Identity(_) => None,
        }
    }

    /// Returns the culprit statement of an identity clue.
    #[must_use]
    pub fn identity(&self) -> Option<&IdentityFact> {
        match &self.content {
            ClueContent::Fact(_) => None,
            ClueContent::Identity(identity) => Some(identity),
        }
    }
}
