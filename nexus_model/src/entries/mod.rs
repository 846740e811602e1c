//! Knowledge entry definitions.

mod qualia;

pub use qualia::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sources::RandomSource;

/// Unique identifier for knowledge entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single piece of knowledge held by the store.
///
/// Entries are immutable once built: the qualia are drawn during construction
/// and there is no API that changes any field afterwards. Entries serialize
/// for display but never deserialize; external data comes in as
/// [`crate::SeedEntry`] and goes through [`KnowledgeEntry::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeEntry {
    id: EntryId,
    title: String,
    content: String,
    qualia: Qualia,
}

impl KnowledgeEntry {
    /// Build an entry, drawing its qualia from `rng`.
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        content: impl Into<String>,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let entry = Self {
            id,
            title: title.into(),
            content: content.into(),
            qualia: Qualia::draw(rng),
        };
        debug!(
            id = %entry.id,
            truth_score = entry.qualia.truth_score,
            mood = %entry.qualia.mood,
            "knowledge entry created"
        );
        entry
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free text that similarity, collapse and projection operate on.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn qualia(&self) -> &Qualia {
        &self.qualia
    }

    /// Number of characters (not bytes) in the content.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}
