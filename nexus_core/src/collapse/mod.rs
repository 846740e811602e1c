//! Wave-function collapse of a knowledge entry.
//!
//! One uniform draw decides the outcome. Above the threshold the entry
//! resolves to its content alone; otherwise it stays superposed as its
//! content plus an alternative rendering. Calls are independent.

use nexus_model::{KnowledgeEntry, NexusError, RandomSource, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CollapseConfig;
use crate::text::prefix;

/// Outcome of a collapse.
///
/// Serializes as a bare string or as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollapsedResult {
    /// The entry resolved to its full content.
    Definite(String),
    /// Full content first, alternative rendering second.
    Superposed(String, String),
}

impl CollapsedResult {
    /// The entry's full content, present in both branches.
    pub fn content(&self) -> &str {
        match self {
            CollapsedResult::Definite(content) => content,
            CollapsedResult::Superposed(content, _) => content,
        }
    }

    pub fn alternative(&self) -> Option<&str> {
        match self {
            CollapsedResult::Definite(_) => None,
            CollapsedResult::Superposed(_, alternative) => Some(alternative),
        }
    }

    pub fn is_definite(&self) -> bool {
        matches!(self, CollapsedResult::Definite(_))
    }

    /// Every value this result holds, content first.
    pub fn into_values(self) -> Vec<String> {
        match self {
            CollapsedResult::Definite(content) => vec![content],
            CollapsedResult::Superposed(content, alternative) => vec![content, alternative],
        }
    }
}

/// Resolves entries with a fixed threshold.
#[derive(Debug, Clone)]
pub struct CollapseOperator {
    config: CollapseConfig,
}

impl CollapseOperator {
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(CollapseConfig::default())
    }

    /// Collapse `entry`, drawing exactly one sample from `rng`.
    pub fn collapse(
        &self,
        entry: Option<&KnowledgeEntry>,
        rng: &mut dyn RandomSource,
    ) -> Result<CollapsedResult> {
        let Some(entry) = entry else {
            warn!("invalid node for wave collapse");
            return Err(NexusError::invalid_reference("node for wave collapse"));
        };

        let state = rng.next_f64();
        let result = if state > self.config.threshold {
            CollapsedResult::Definite(entry.content().to_owned())
        } else {
            CollapsedResult::Superposed(entry.content().to_owned(), self.alternative(entry))
        };

        debug!(id = %entry.id(), state, definite = result.is_definite(), "wave function collapsed");
        Ok(result)
    }

    fn alternative(&self, entry: &KnowledgeEntry) -> String {
        format!(
            "Alternative: {}... (collapsed state)",
            prefix(entry.content(), self.config.alternative_prefix)
        )
    }
}

impl Default for CollapseOperator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_model::{EntryId, ScriptedRandom};

    fn entry() -> KnowledgeEntry {
        KnowledgeEntry::new(
            EntryId(1),
            "Quantum Truth",
            "The fundamental nature of reality exists in a state of superposition until observed.",
            &mut ScriptedRandom::constant(0.5),
        )
    }

    #[test]
    fn test_definite_branch() {
        let entry = entry();
        let mut rng = ScriptedRandom::constant(0.95);
        let result = CollapseOperator::default().collapse(Some(&entry), &mut rng).unwrap();

        assert_eq!(result, CollapsedResult::Definite(entry.content().to_owned()));
        assert!(result.alternative().is_none());
    }

    #[test]
    fn test_superposed_branch() {
        let entry = entry();
        let mut rng = ScriptedRandom::constant(0.2);
        let result = CollapseOperator::default().collapse(Some(&entry), &mut rng).unwrap();

        assert_eq!(result.content(), entry.content());
        assert_eq!(
            result.alternative(),
            Some("Alternative: The fundamental nature of real... (collapsed state)")
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let entry = entry();
        let mut rng = ScriptedRandom::constant(0.8);
        let result = CollapseOperator::default().collapse(Some(&entry), &mut rng).unwrap();
        assert!(!result.is_definite());
    }

    #[test]
    fn test_absent_entry() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!(matches!(
            CollapseOperator::default().collapse(None, &mut rng),
            Err(NexusError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_branch_distribution() {
        let entry = entry();
        let operator = CollapseOperator::default();
        let draws: Vec<f64> = (0..10_000).map(|i| i as f64 / 10_000.0).collect();
        let mut rng = ScriptedRandom::new(draws);

        let definite = (0..10_000)
            .map(|_| operator.collapse(Some(&entry), &mut rng).unwrap())
            .inspect(|result| assert_eq!(result.content(), entry.content()))
            .filter(CollapsedResult::is_definite)
            .count();

        // Draws 0.8001..=0.9999 take the single-value branch.
        assert_eq!(definite, 1_999);
    }

    #[test]
    fn test_short_content_alternative() {
        let entry = KnowledgeEntry::new(
            EntryId(9),
            "Short",
            "Brief.",
            &mut ScriptedRandom::constant(0.5),
        );
        let result = CollapseOperator::default()
            .collapse(Some(&entry), &mut ScriptedRandom::constant(0.1))
            .unwrap();
        assert_eq!(result.alternative(), Some("Alternative: Brief.... (collapsed state)"));
    }

    #[test]
    fn test_serialized_shapes() {
        let definite = CollapsedResult::Definite("x".into());
        let superposed = CollapsedResult::Superposed("x".into(), "y".into());

        assert_eq!(serde_json::to_string(&definite).unwrap(), "\"x\"");
        assert_eq!(serde_json::to_string(&superposed).unwrap(), "[\"x\",\"y\"]");
        assert_eq!(superposed.into_values(), vec!["x".to_string(), "y".to_string()]);
    }
}
