//! Capabilities the surrounding context supplies to the registry.

use dw_core::{ModelHandle, ModelKind, TargetRef, TerminalRef};

/// Model lookup by network element or dynamic model identifier.
///
/// `find` must only return a model whose kind is exactly `kind`.
pub trait ModelResolver {
    type Target: ModelHandle + ?Sized;

    fn find(&self, target: &TargetRef, kind: &ModelKind) -> Option<&Self::Target>;
}

/// Network topology query.
pub trait NetworkQuery {
    /// Static id of the bus `terminal` is connected to, if any.
    fn connectable_bus(&self, terminal: &TerminalRef) -> Option<String>;
}

/// Network with no connectable terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNetwork;

impl NetworkQuery for NoNetwork {
    fn connectable_bus(&self, _terminal: &TerminalRef) -> Option<String> {
        None
    }
}
