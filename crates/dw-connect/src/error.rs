//! Connection-engine error types.

use dw_core::{ModelKind, TargetRef, TerminalRef};
use thiserror::Error;

use crate::key::ConnectorKey;

/// Result type for connection-engine operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Errors raised while wiring models together or exporting the result.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// A mandatory connection named a target with no model of the expected kind.
    #[error("{origin} requires a {kind} model for {target}, none found")]
    TargetNotFound {
        origin: String,
        target: TargetRef,
        kind: ModelKind,
    },

    /// A mandatory terminal connection found no connectable bus.
    #[error("{origin} requires the bus of terminal {terminal}, terminal is not connected")]
    TerminalNotConnected {
        origin: String,
        terminal: TerminalRef,
    },

    /// Two requests derived the same connector key with different wiring.
    #[error("Connector {key} already registered with a different variable list: {reason}")]
    InconsistentTemplate { key: ConnectorKey, reason: String },

    /// Indexed connector whose variables carry no index placeholder.
    #[error("Indexed connector {key} has no variable containing {placeholder}")]
    MissingPlaceholder {
        key: ConnectorKey,
        placeholder: &'static str,
    },

    /// A resolved target exposes no destination attributes.
    #[error("Target of type {target_type} has no destination attributes")]
    EmptyTargetAttributes { target_type: String },

    /// An instance refers to a connector absent from the template map.
    #[error("Connection refers to unknown connector {key}")]
    DanglingConnector { key: ConnectorKey },

    /// An instance of an indexed connector carries no usable index attribute.
    #[error("Connection to indexed connector {key} has no valid index attribute")]
    MissingIndex { key: ConnectorKey },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
