//! Error types for context construction.

use dw_connect::ConnectError;
use dw_core::ModelKind;
use thiserror::Error;

/// Result type for context construction.
pub type ContextResult<T> = Result<T, ContextError>;

/// Errors that abort a context build.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Two dynamic models share one identifier.
    #[error("Duplicate dynamic model id: {id}")]
    DuplicateModel { id: String },

    /// Two default network models for one static id and kind.
    #[error("Duplicate default model for {static_id} ({kind})")]
    DuplicateDefault { static_id: String, kind: ModelKind },

    /// A default network model without a static id.
    #[error("Default model '{model}' is not attached to a network element")]
    MissingStaticId { model: String },

    /// A model failed while declaring its connections.
    #[error("Connection declaration failed for model '{model}': {source}")]
    Declaration {
        model: String,
        #[source]
        source: ConnectError,
    },

    /// A model reported itself inert after recording connections.
    #[error("Model '{model}' became inert after recording {recorded} connection(s)")]
    InertAfterConnecting { model: String, recorded: usize },
}
