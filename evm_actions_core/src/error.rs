use thiserror::Error;

/// Errors an action or the registry can report to the agent runtime.
///
/// Validation failures are raised before the handler runs; invocation
/// failures wrap whatever the external wallet SDK reported. Rendering these
/// into user-facing strings is a presentation concern, see the per-action
/// render helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("invalid field `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("network `{network_id}` is not supported")]
    UnsupportedNetwork { network_id: String },

    #[error("{message}")]
    Invocation { message: String },

    #[error("Unknown action: {name}")]
    UnknownAction { name: String },
}

impl ActionError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invocation(err: impl std::fmt::Display) -> Self {
        Self::Invocation {
            message: err.to_string(),
        }
    }
}
