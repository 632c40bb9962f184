//! Simulation errors.
//!
//! Only construction can fail. Once an engine exists, every tick is total.

/// Errors raised while building a simulation.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// A configuration value is out of range.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
