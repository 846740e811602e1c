//! Qualia: the decorative attributes every entry carries.

use serde::{Deserialize, Serialize};

use crate::sources::RandomSource;

/// Derived attributes fixed when an entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Qualia {
    /// Pseudo-random score in `[0, 1)`.
    pub truth_score: f64,
    pub mood: Mood,
    pub ethics: EthicsTag,
}

impl Qualia {
    /// Draw truth score first, then mood.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        let truth_score = rng.next_f64();
        let mood = Mood::ALL[rng.next_index(Mood::ALL.len())];
        Self {
            truth_score,
            mood,
            ethics: EthicsTag::Neutral,
        }
    }
}

/// The mood an entry was "observed" in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Observing,
    Curious,
    Insightful,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Observing, Mood::Curious, Mood::Insightful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Observing => "observing",
            Mood::Curious => "curious",
            Mood::Insightful => "insightful",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ethics tag. Every entry is neutral for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EthicsTag {
    #[default]
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{RngSource, ScriptedRandom};

    #[test]
    fn test_mood_selection() {
        let mut rng = ScriptedRandom::new([0.0, 0.0, 0.0, 0.4, 0.0, 0.7]);
        assert_eq!(Qualia::draw(&mut rng).mood, Mood::Observing);
        assert_eq!(Qualia::draw(&mut rng).mood, Mood::Curious);
        assert_eq!(Qualia::draw(&mut rng).mood, Mood::Insightful);
    }

    #[test]
    fn test_qualia_ranges() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..1_000 {
            let qualia = Qualia::draw(&mut rng);
            assert!((0.0..1.0).contains(&qualia.truth_score));
            assert!(Mood::ALL.contains(&qualia.mood));
            assert_eq!(qualia.ethics, EthicsTag::Neutral);
        }
    }

    #[test]
    fn test_mood_display() {
        assert_eq!(Mood::Curious.to_string(), "curious");
        assert_eq!(
            serde_json::to_string(&Mood::Insightful).unwrap(),
            "\"insightful\""
        );
    }
}
