//! Ethics scoring - a four-dimensional vector and its provenance receipt.
//!
//! Each dimension is an independent draw inside a fixed range. None of them
//! depend on the scored input.

use nexus_model::{Clock, NexusError, RandomSource, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Scores along four ethical frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EthicsVector {
    /// In `[0.5, 1.0)`.
    pub utilitarian: f64,
    /// Either `0.0` or `1.0`.
    pub deontological: f64,
    /// In `[0.6, 1.0)`.
    pub virtue: f64,
    /// In `[0.7, 1.0)`.
    pub ecological: f64,
}

impl EthicsVector {
    pub const LABELS: [&'static str; 4] = ["utilitarian", "deontological", "virtue", "ecological"];

    /// Draw a vector: utilitarian, deontological, virtue, ecological, in that order.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        let utilitarian = rng.next_in(0.5, 0.5);
        let deontological = if rng.next_f64() > 0.3 { 1.0 } else { 0.0 };
        let virtue = rng.next_in(0.6, 0.4);
        let ecological = rng.next_in(0.7, 0.3);
        Self {
            utilitarian,
            deontological,
            virtue,
            ecological,
        }
    }

    /// Values in [`EthicsVector::LABELS`] order, e.g. for progress bars.
    pub fn values(&self) -> [f64; 4] {
        [
            self.utilitarian,
            self.deontological,
            self.virtue,
            self.ecological,
        ]
    }
}

/// The scored input together with its vector and receipt.
///
/// Serializes flat: the input's own fields, the four vector fields, and
/// `provenance`. The input must therefore serialize as a map or struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse<T> {
    #[serde(flatten)]
    pub input: T,
    #[serde(flatten)]
    pub ethics: EthicsVector,
    pub provenance: String,
}

impl<T: Serialize> ScoredResponse<T> {
    /// Flat JSON object of the composite. Responses built by
    /// [`EthicsScorer::score`] always render; a hand-built response whose
    /// input is not map-like fails with [`NexusError::Serialization`].
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Stateless scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthicsScorer;

impl EthicsScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `input`, returning a new composite. The input is moved in, never edited.
    ///
    /// The input must serialize as a map or struct so its fields can sit next
    /// to the vector; anything else is rejected with
    /// [`NexusError::InvalidReference`] before any draw is made.
    pub fn score<T: Serialize>(
        &self,
        input: Option<T>,
        rng: &mut dyn RandomSource,
        clock: &dyn Clock,
    ) -> Result<ScoredResponse<T>> {
        let Some(input) = input else {
            warn!("invalid input for ethics validation");
            return Err(NexusError::invalid_reference("input for ethics validation"));
        };
        if !serde_json::to_value(&input)?.is_object() {
            warn!("ethics input has no named fields");
            return Err(NexusError::invalid_reference(
                "input for ethics validation must have named fields",
            ));
        }

        let ethics = EthicsVector::draw(rng);
        let provenance = self.provenance(&ethics, clock)?;
        debug!(%provenance, "ethics recorded");

        Ok(ScoredResponse {
            input,
            ethics,
            provenance,
        })
    }

    /// Receipt embedding a time-derived id and a pretty JSON dump of `vector`.
    pub fn provenance(&self, vector: &EthicsVector, clock: &dyn Clock) -> Result<String> {
        Ok(format!(
            "Blockchain receipt: ETH-{} | Matrix: {}",
            clock.now_millis(),
            serde_json::to_string_pretty(vector)?
        ))
    }
}
