//! The Nexus - drives the operators over a knowledge store.
//!
//! Each action follows the same steps:
//! 1. **Pick**: draw the entries it works on from the store
//! 2. **Compute**: run the operator
//! 3. **Display**: hand the result and a refreshed indicator to the sink
//!
//! A failing action logs the error, touches nothing on the sink, and returns
//! the error to the caller. The Nexus owns no timers: the presentation layer
//! calls [`Nexus::tick`] every [`Nexus::tick_interval`].

use nexus_model::{
    Clock, EntryId, KnowledgeEntry, KnowledgeStore, RandomSource, Result, RngSource, SystemClock,
};
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, error};

use crate::collapse::{CollapseOperator, CollapsedResult};
use crate::config::NexusConfig;
use crate::entanglement::{ClockIdGenerator, EntanglementRecord, EntanglementRegistry};
use crate::ethics::{EthicsScorer, ScoredResponse};
use crate::indicators::{round_to, Indicator};
use crate::presentation::PresentationSink;
use crate::similarity::BagOfWords;
use crate::temporal::{TemporalProjector, TemporalTriple};

/// Input handed to the ethics scorer by [`Nexus::anchor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorRequest {
    pub node: KnowledgeEntry,
}

/// What one ambient tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Displayed quantum state in `[0.8, 1.0]`, two decimals.
    pub quantum_state: f64,
    /// Entry that was pulsed, if any.
    pub pulsed: Option<EntryId>,
}

/// Store, operators and sources wired together.
pub struct Nexus {
    config: NexusConfig,
    store: KnowledgeStore,
    registry: EntanglementRegistry,
    collapse: CollapseOperator,
    projector: TemporalProjector,
    scorer: EthicsScorer,
    rng: Box<dyn RandomSource>,
    clock: Rc<dyn Clock>,
}

impl Nexus {
    /// Nexus backed by OS entropy and the system clock.
    pub fn new(config: NexusConfig) -> Result<Self> {
        Self::with_sources(config, RngSource::from_entropy(), Rc::new(SystemClock))
    }

    /// Nexus with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(NexusConfig::default())
    }

    /// Nexus drawing from `rng` and reading time from `clock`.
    ///
    /// Qualia for the seed entries are drawn from `rng` first, in seed order.
    pub fn with_sources(
        config: NexusConfig,
        rng: impl RandomSource + 'static,
        clock: Rc<dyn Clock>,
    ) -> Result<Self> {
        let mut rng: Box<dyn RandomSource> = Box::new(rng);
        config.validate()?;

        let store = KnowledgeStore::from_seeds(config.entries.iter().cloned(), &mut *rng)?;
        let registry =
            EntanglementRegistry::with_parts(BagOfWords, ClockIdGenerator::new(clock.clone()));

        Ok(Self {
            collapse: CollapseOperator::new(config.collapse.clone()),
            projector: TemporalProjector::new(config.temporal.clone())?,
            scorer: EthicsScorer::new(),
            config,
            store,
            registry,
            rng,
            clock,
        })
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn registry(&self) -> &EntanglementRegistry {
        &self.registry
    }

    pub fn config(&self) -> &NexusConfig {
        &self.config
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Entangle two random entries and refresh the truth index.
    pub fn entangle(&mut self, sink: &mut dyn PresentationSink) -> Result<EntanglementRecord> {
        let record = report("entangle", self.try_entangle())?;
        let truth_index = Indicator::truth_index(&mut *self.rng);

        sink.display_quantum_state(record.strength);
        sink.notify_entanglement_created(&record);
        sink.display_indicator(truth_index);
        Ok(record)
    }

    fn try_entangle(&mut self) -> Result<EntanglementRecord> {
        let a = self.store.pick_random(&mut *self.rng)?;
        let b = self.store.pick_random(&mut *self.rng)?;
        self.registry.create_entanglement(Some(a), Some(b))
    }

    /// Collapse a random entry and refresh temporal stability.
    pub fn collapse(&mut self, sink: &mut dyn PresentationSink) -> Result<CollapsedResult> {
        let (entry, result) = report("collapse", self.try_collapse())?;
        let stability = Indicator::temporal_stability(&mut *self.rng);

        sink.notify_collapse(entry, &result);
        sink.display_indicator(stability);
        Ok(result)
    }

    fn try_collapse(&mut self) -> Result<(EntryId, CollapsedResult)> {
        let entry = self.store.pick_random(&mut *self.rng)?;
        let result = self.collapse.collapse(Some(entry), &mut *self.rng)?;
        Ok((entry.id(), result))
    }

    /// Weave a temporal thread for a random entry and refresh the ethical score.
    pub fn weave(&mut self, sink: &mut dyn PresentationSink) -> Result<TemporalTriple> {
        let triple = report("weave", self.try_weave())?;
        let score = Indicator::ethical_score(&mut *self.rng);

        sink.display_temporal_triple(&triple);
        sink.display_indicator(score);
        Ok(triple)
    }

    fn try_weave(&mut self) -> Result<TemporalTriple> {
        let entry = self.store.pick_random(&mut *self.rng)?;
        self.projector.project_at(Some(entry), &*self.clock)
    }

    /// Score a random entry against the ethics frameworks.
    pub fn anchor(
        &mut self,
        sink: &mut dyn PresentationSink,
    ) -> Result<ScoredResponse<AnchorRequest>> {
        let response = report("anchor", self.try_anchor())?;

        debug!(provenance = %response.provenance, "ethics anchored");
        sink.display_ethics_vector(&response.ethics);
        Ok(response)
    }

    fn try_anchor(&mut self) -> Result<ScoredResponse<AnchorRequest>> {
        let node = self.store.pick_random(&mut *self.rng)?.clone();
        self.scorer
            .score(Some(AnchorRequest { node }), &mut *self.rng, &*self.clock)
    }

    /// Ambient activity: refresh the quantum state and maybe pulse an entry.
    ///
    /// Never fails: on an empty store the pulse is skipped.
    pub fn tick(&mut self, sink: &mut dyn PresentationSink) -> TickOutcome {
        let quantum_state = round_to(self.rng.next_in(0.8, 0.2), 2);
        sink.display_quantum_state(quantum_state);

        let mut pulsed = None;
        if self.rng.next_f64() > self.config.ambient.pulse_threshold {
            if let Ok(entry) = self.store.pick_random(&mut *self.rng) {
                sink.pulse(entry.id());
                pulsed = Some(entry.id());
            }
        }

        debug!(quantum_state, ?pulsed, "ambient tick");
        TickOutcome {
            quantum_state,
            pulsed,
        }
    }
}

impl std::fmt::Debug for Nexus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nexus")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Log a failed action before passing the result on.
fn report<T>(action: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        error!(action, %err, "nexus action failed");
    }
    result
}
