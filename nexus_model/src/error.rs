//! Error taxonomy shared by every Nexus component.

use thiserror::Error;

use crate::entries::EntryId;

/// Errors raised by store access and the Nexus operators.
///
/// Every variant is local to the action that produced it: the caller reports
/// it and carries on, nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum NexusError {
    /// An operation received an absent entry (or an id the store does not know).
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// `pick_random` was called on a store without entries.
    #[error("knowledge store is empty")]
    EmptyStore,

    /// Two seed entries share an id.
    #[error("duplicate knowledge entry id {0}")]
    DuplicateEntry(EntryId),

    /// A date format string chrono cannot render.
    #[error("invalid date format {0:?}")]
    InvalidDateFormat(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NexusError {
    /// Shorthand for an [`NexusError::InvalidReference`] naming what was missing.
    pub fn invalid_reference(what: impl Into<String>) -> Self {
        NexusError::InvalidReference(what.into())
    }
}

pub type Result<T> = std::result::Result<T, NexusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NexusError::invalid_reference("node for wave collapse");
        assert_eq!(err.to_string(), "invalid reference: node for wave collapse");

        assert_eq!(NexusError::EmptyStore.to_string(), "knowledge store is empty");
        assert_eq!(
            NexusError::DuplicateEntry(EntryId(3)).to_string(),
            "duplicate knowledge entry id 3"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: NexusError = parse.unwrap_err().into();
        assert!(matches!(err, NexusError::Config(_)));
    }
}
