//! Identifier generation for entanglement records.

use nexus_model::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an entanglement record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntanglementId(pub String);

impl std::fmt::Display for EntanglementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out a fresh id per creation event.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntanglementId;
}

/// Time-derived ids of the form `ent-<millis>`.
///
/// The generator keeps the latest millisecond it has issued. A request at or
/// before that mark (same millisecond, frozen clock, or a clock that stepped
/// back) reuses the mark with a `-<n>` suffix, so no id is ever repeated.
#[derive(Debug, Clone)]
pub struct ClockIdGenerator<C = SystemClock> {
    clock: C,
    last_millis: Option<i64>,
    repeats: u32,
}

impl<C: Clock> ClockIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_millis: None,
            repeats: 0,
        }
    }
}

impl Default for ClockIdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> IdGenerator for ClockIdGenerator<C> {
    fn next_id(&mut self) -> EntanglementId {
        let millis = self.clock.now_millis();
        match self.last_millis {
            Some(mark) if millis <= mark => {
                self.repeats += 1;
                EntanglementId(format!("ent-{}-{}", mark, self.repeats))
            }
            _ => {
                self.last_millis = Some(millis);
                self.repeats = 0;
                EntanglementId(format!("ent-{}", millis))
            }
        }
    }
}

/// Random ids of the form `ent-<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> EntanglementId {
        EntanglementId(format!("ent-{}", Uuid::new_v4()))
    }
}
