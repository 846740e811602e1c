//! Temporal projection - a synthetic past, present and future for an entry.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Utc};
use nexus_model::{Clock, EntryId, KnowledgeEntry, NexusError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TemporalConfig;
use crate::text::prefix;

/// Past, present and future renderings of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalTriple {
    pub past: String,
    pub present: String,
    pub future: String,
}

/// Fail with [`NexusError::InvalidDateFormat`] when chrono cannot render `format`.
pub fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(NexusError::InvalidDateFormat(format.to_owned()));
    }
    Ok(())
}

/// Projects entries along a timeline. Pure in `(entry, now)`.
#[derive(Debug, Clone)]
pub struct TemporalProjector {
    config: TemporalConfig,
}

impl TemporalProjector {
    /// Build a projector, rejecting date formats chrono cannot render.
    pub fn new(config: TemporalConfig) -> Result<Self> {
        check_date_format(&config.date_format)?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: TemporalConfig::default(),
        }
    }

    /// Project `entry` relative to `now`.
    pub fn project(
        &self,
        entry: Option<&KnowledgeEntry>,
        now: DateTime<Utc>,
    ) -> Result<TemporalTriple> {
        let Some(entry) = entry else {
            warn!("invalid node for temporal thread");
            return Err(NexusError::invalid_reference("node for temporal thread"));
        };

        let triple = TemporalTriple {
            past: self.historical_version(entry.id(), now),
            present: self.present_view(entry.content()),
            future: self.predict_evolution(entry.content()),
        };
        debug!(id = %entry.id(), "temporal thread woven");
        Ok(triple)
    }

    /// Project `entry` relative to the clock's current instant.
    pub fn project_at(
        &self,
        entry: Option<&KnowledgeEntry>,
        clock: &dyn Clock,
    ) -> Result<TemporalTriple> {
        self.project(entry, clock.now())
    }

    /// Label for the entry as it stood 24 hours before `now`.
    pub fn historical_version(&self, id: EntryId, now: DateTime<Utc>) -> String {
        let yesterday = now - Duration::hours(24);
        format!(
            "Historical version of node {} ({})",
            id,
            yesterday.format(&self.config.date_format)
        )
    }

    /// Content cut to the configured length, with an ellipsis only when cut.
    pub fn present_view(&self, content: &str) -> String {
        let head = prefix(content, self.config.present_length);
        if head.len() < content.len() {
            format!("{}...", head)
        } else {
            content.to_owned()
        }
    }

    pub fn predict_evolution(&self, content: &str) -> String {
        format!(
            "{}... (evolved in future with enhanced qualia)",
            prefix(content, self.config.future_prefix)
        )
    }
}

impl Default for TemporalProjector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
