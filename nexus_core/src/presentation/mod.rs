//! Presentation sink - the boundary to whatever displays Nexus results.
//!
//! The core computes values and hands them to a sink; the sink owns every
//! visual effect, including timers that revert them. A sink must tolerate
//! being told about entries it no longer shows.

use nexus_model::EntryId;
use serde::Serialize;
use tracing::info;

use crate::collapse::CollapsedResult;
use crate::entanglement::EntanglementRecord;
use crate::ethics::EthicsVector;
use crate::indicators::Indicator;
use crate::temporal::TemporalTriple;

/// Receives computed results for display.
pub trait PresentationSink {
    fn display_quantum_state(&mut self, value: f64);

    fn display_ethics_vector(&mut self, vector: &EthicsVector);

    fn display_temporal_triple(&mut self, triple: &TemporalTriple);

    fn notify_entanglement_created(&mut self, record: &EntanglementRecord);

    fn notify_collapse(&mut self, entry: EntryId, result: &CollapsedResult);

    /// A dashboard indicator changed.
    fn display_indicator(&mut self, _indicator: Indicator) {}

    /// Briefly highlight an entry.
    fn pulse(&mut self, _entry: EntryId) {}
}

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SinkEvent {
    QuantumState { value: f64 },
    EthicsVector { vector: EthicsVector },
    TemporalTriple { triple: TemporalTriple },
    EntanglementCreated { record: EntanglementRecord },
    Collapse { entry: EntryId, result: CollapsedResult },
    Indicator { indicator: Indicator },
    Pulse { entry: EntryId },
}

/// Keeps every call in order. Useful for tests and headless drivers.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&SinkEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PresentationSink for RecordingSink {
    fn display_quantum_state(&mut self, value: f64) {
        self.events.push(SinkEvent::QuantumState { value });
    }

    fn display_ethics_vector(&mut self, vector: &EthicsVector) {
        self.events.push(SinkEvent::EthicsVector { vector: *vector });
    }

    fn display_temporal_triple(&mut self, triple: &TemporalTriple) {
        self.events.push(SinkEvent::TemporalTriple {
            triple: triple.clone(),
        });
    }

    fn notify_entanglement_created(&mut self, record: &EntanglementRecord) {
        self.events.push(SinkEvent::EntanglementCreated {
            record: record.clone(),
        });
    }

    fn notify_collapse(&mut self, entry: EntryId, result: &CollapsedResult) {
        self.events.push(SinkEvent::Collapse {
            entry,
            result: result.clone(),
        });
    }

    fn display_indicator(&mut self, indicator: Indicator) {
        self.events.push(SinkEvent::Indicator { indicator });
    }

    fn pulse(&mut self, entry: EntryId) {
        self.events.push(SinkEvent::Pulse { entry });
    }
}

/// Writes every call to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn display_quantum_state(&mut self, value: f64) {
        info!(quantum_state = value, "quantum state");
    }

    fn display_ethics_vector(&mut self, vector: &EthicsVector) {
        info!(
            utilitarian = vector.utilitarian,
            deontological = vector.deontological,
            virtue = vector.virtue,
            ecological = vector.ecological,
            "ethics vector"
        );
    }

    fn display_temporal_triple(&mut self, triple: &TemporalTriple) {
        info!(
            past = %triple.past,
            present = %triple.present,
            future = %triple.future,
            "temporal thread"
        );
    }

    fn notify_entanglement_created(&mut self, record: &EntanglementRecord) {
        info!(
            id = %record.id,
            first = %record.nodes.first(),
            second = %record.nodes.second(),
            strength = record.strength,
            "entanglement"
        );
    }

    fn notify_collapse(&mut self, entry: EntryId, result: &CollapsedResult) {
        info!(
            %entry,
            definite = result.is_definite(),
            alternative = result.alternative().unwrap_or(""),
            "collapse"
        );
    }

    fn display_indicator(&mut self, indicator: Indicator) {
        info!(indicator = indicator.label(), value = %indicator, "indicator");
    }

    fn pulse(&mut self, entry: EntryId) {
        info!(%entry, "pulse");
    }
}
