//! Dashboard indicators refreshed after each Nexus action.

use nexus_model::RandomSource;
use serde::{Deserialize, Serialize};

/// A headline number shown next to the operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Indicator {
    /// Percentage in `95..=98`, refreshed after entangling.
    TruthIndex(u8),
    /// Percentage in `85..=99`, refreshed after a collapse.
    TemporalStability(u8),
    /// Score in `[4.5, 5.0]` with one decimal, refreshed after weaving.
    EthicalScore(f64),
}

impl Indicator {
    pub fn truth_index(rng: &mut dyn RandomSource) -> Self {
        Indicator::TruthIndex(95 + rng.next_index(4) as u8)
    }

    pub fn temporal_stability(rng: &mut dyn RandomSource) -> Self {
        Indicator::TemporalStability(85 + rng.next_index(15) as u8)
    }

    pub fn ethical_score(rng: &mut dyn RandomSource) -> Self {
        Indicator::EthicalScore(round_to(rng.next_in(4.5, 0.5), 1))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::TruthIndex(_) => "truth index",
            Indicator::TemporalStability(_) => "temporal stability",
            Indicator::EthicalScore(_) => "ethical score",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::TruthIndex(pct) | Indicator::TemporalStability(pct) => write!(f, "{}%", pct),
            Indicator::EthicalScore(score) => write!(f, "{:.1}", score),
        }
    }
}

/// Round `value` to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
