//! Entanglement registry - append-only log of similarity relations.

mod ids;

pub use ids::*;

use nexus_model::{EntryId, KnowledgeEntry, KnowledgeStore, NexusError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::similarity::{BagOfWords, SimilarityMeasure};

/// The two entries an entanglement connects.
///
/// Equality ignores order; creation order is kept for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodePair(pub EntryId, pub EntryId);

impl NodePair {
    pub fn first(&self) -> EntryId {
        self.0
    }

    pub fn second(&self) -> EntryId {
        self.1
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.0 == id || self.1 == id
    }
}

impl PartialEq for NodePair {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl Eq for NodePair {}

/// A recorded relation between two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntanglementRecord {
    pub id: EntanglementId,
    pub nodes: NodePair,
    /// Similarity of the two contents at creation time, in `[0, 1]`.
    pub strength: f64,
}

/// Creates entanglements and keeps every record in creation order.
///
/// Records are never changed or removed. Entangling the same pair twice
/// yields two independent records.
pub struct EntanglementRegistry {
    records: Vec<EntanglementRecord>,
    measure: Box<dyn SimilarityMeasure>,
    ids: Box<dyn IdGenerator>,
}

impl EntanglementRegistry {
    /// Registry using [`BagOfWords`] and time-derived ids from the system clock.
    pub fn new() -> Self {
        Self::with_parts(BagOfWords, ClockIdGenerator::default())
    }

    pub fn with_parts(
        measure: impl SimilarityMeasure + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        Self {
            records: Vec::new(),
            measure: Box::new(measure),
            ids: Box::new(ids),
        }
    }

    /// Entangle two entries.
    ///
    /// Fails with [`NexusError::InvalidReference`] when either entry is absent,
    /// in which case nothing is appended.
    pub fn create_entanglement(
        &mut self,
        a: Option<&KnowledgeEntry>,
        b: Option<&KnowledgeEntry>,
    ) -> Result<EntanglementRecord> {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                warn!("invalid nodes for entanglement");
                return Err(NexusError::invalid_reference("nodes for entanglement"));
            }
        };

        let record = EntanglementRecord {
            id: self.ids.next_id(),
            nodes: NodePair(a.id(), b.id()),
            strength: self.measure.similarity(a.content(), b.content()),
        };
        info!(
            id = %record.id,
            first = %a.id(),
            second = %b.id(),
            strength = record.strength,
            "entanglement created"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Entangle two entries by id, resolving them through `store`.
    pub fn entangle_ids(
        &mut self,
        store: &KnowledgeStore,
        a: EntryId,
        b: EntryId,
    ) -> Result<EntanglementRecord> {
        self.create_entanglement(store.get(a), store.get(b))
    }

    /// All records in creation order.
    pub fn records(&self) -> &[EntanglementRecord] {
        &self.records
    }

    /// The most recently created record.
    pub fn latest(&self) -> Option<&EntanglementRecord> {
        self.records.last()
    }

    /// Records touching `id`.
    pub fn involving(&self, id: EntryId) -> impl Iterator<Item = &EntanglementRecord> {
        self.records.iter().filter(move |r| r.nodes.contains(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for EntanglementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntanglementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntanglementRegistry")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_model::{FixedClock, ScriptedRandom};

    fn store() -> KnowledgeStore {
        KnowledgeStore::seeded(&mut ScriptedRandom::constant(0.5))
    }

    fn registry() -> EntanglementRegistry {
        EntanglementRegistry::with_parts(
            BagOfWords,
            ClockIdGenerator::new(FixedClock::at_millis(1_700_000_000_000)),
        )
    }

    #[test]
    fn test_create_entanglement() {
        let store = store();
        let mut registry = registry();

        let a = store.get(EntryId(1));
        let record = registry.create_entanglement(a, a).unwrap();

        assert_eq!(record.id.0, "ent-1700000000000");
        assert_eq!(record.nodes, NodePair(EntryId(1), EntryId(1)));
        assert_eq!(record.strength, 1.0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.latest(), Some(&record));
    }

    #[test]
    fn test_absent_reference_rejected() {
        let store = store();
        let mut registry = registry();

        let a = store.get(EntryId(1));
        assert!(matches!(
            registry.create_entanglement(a, None),
            Err(NexusError::InvalidReference(_))
        ));
        assert!(matches!(
            registry.create_entanglement(None, a),
            Err(NexusError::InvalidReference(_))
        ));
        assert!(matches!(
            registry.entangle_ids(&store, EntryId(2), EntryId(42)),
            Err(NexusError::InvalidReference(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_repeat_pair_creates_new_record() {
        let store = store();
        let mut registry = registry();

        let first = registry.entangle_ids(&store, EntryId(1), EntryId(4)).unwrap();
        let second = registry.entangle_ids(&store, EntryId(1), EntryId(4)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.strength, second.strength);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_strength_follows_argument_order() {
        let store = store();
        let mut registry = registry();

        let record = registry.entangle_ids(&store, EntryId(4), EntryId(1)).unwrap();
        let expected = crate::similarity::similarity(
            store.get(EntryId(4)).unwrap().content(),
            store.get(EntryId(1)).unwrap().content(),
        );
        assert_eq!(record.strength, expected);
        assert_eq!(record.nodes.first(), EntryId(4));
    }

    #[test]
    fn test_involving() {
        let store = store();
        let mut registry = registry();

        registry.entangle_ids(&store, EntryId(1), EntryId(2)).unwrap();
        registry.entangle_ids(&store, EntryId(2), EntryId(3)).unwrap();
        registry.entangle_ids(&store, EntryId(3), EntryId(4)).unwrap();

        assert_eq!(registry.involving(EntryId(2)).count(), 2);
        assert_eq!(registry.involving(EntryId(4)).count(), 1);
        assert_eq!(registry.involving(EntryId(9)).count(), 0);
    }

    #[test]
    fn test_node_pair_unordered() {
        assert_eq!(NodePair(EntryId(1), EntryId(2)), NodePair(EntryId(2), EntryId(1)));
        assert_ne!(NodePair(EntryId(1), EntryId(2)), NodePair(EntryId(1), EntryId(3)));
    }

    #[test]
    fn test_record_serialization() {
        let store = store();
        let mut registry = registry();
        let record = registry.entangle_ids(&store, EntryId(1), EntryId(3)).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "ent-1700000000000");
        assert_eq!(json["nodes"], serde_json::json!([1, 3]));
    }
}
