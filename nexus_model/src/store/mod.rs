//! Knowledge store - the fixed, ordered collection of entries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::entries::{EntryId, KnowledgeEntry};
use crate::error::{NexusError, Result};
use crate::sources::RandomSource;

/// Raw material for an entry: everything except the drawn qualia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
}

impl SeedEntry {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: EntryId(id),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The four entries the Nexus starts with.
pub fn default_seeds() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new(
            1,
            "Quantum Truth",
            "The fundamental nature of reality exists in a state of superposition until observed.",
        ),
        SeedEntry::new(
            2,
            "Consciousness",
            "Awareness emerges from complex information processing at quantum scales.",
        ),
        SeedEntry::new(
            3,
            "Ethical Framework",
            "Universal ethics must prioritize consciousness preservation and growth.",
        ),
        SeedEntry::new(
            4,
            "Temporal Continuity",
            "Time is a dimension where cause and effect create the illusion of sequence.",
        ),
    ]
}

/// Ordered, fixed-size collection of knowledge entries.
///
/// There are no mutation operations: entries are built once here and only
/// shared references leave the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeStore {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeStore {
    /// Build the default four-entry store.
    pub fn seeded(rng: &mut dyn RandomSource) -> Self {
        Self {
            entries: default_seeds()
                .into_iter()
                .map(|seed| KnowledgeEntry::new(seed.id, seed.title, seed.content, rng))
                .collect(),
        }
    }

    /// Build a store from seeds, in order. Ids must be unique.
    pub fn from_seeds(
        seeds: impl IntoIterator<Item = SeedEntry>,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for seed in seeds {
            if !seen.insert(seed.id) {
                warn!(id = %seed.id, "rejecting duplicate seed entry");
                return Err(NexusError::DuplicateEntry(seed.id));
            }
            entries.push(KnowledgeEntry::new(seed.id, seed.title, seed.content, rng));
        }

        debug!(count = entries.len(), "knowledge store initialized");
        Ok(Self { entries })
    }

    /// All entries in seed order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter()
    }

    /// Get entry by ID.
    pub fn get(&self, id: EntryId) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry uniformly at random.
    pub fn pick_random(&self, rng: &mut dyn RandomSource) -> Result<&KnowledgeEntry> {
        if self.entries.is_empty() {
            return Err(NexusError::EmptyStore);
        }
        Ok(&self.entries[rng.next_index(self.entries.len())])
    }
}

impl<'a> IntoIterator for &'a KnowledgeStore {
    type Item = &'a KnowledgeEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
