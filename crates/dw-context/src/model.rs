//! Dynamic models as seen by the context build.

use dw_connect::{ConnectResult, ConnectionRegistry, ModelResolver};
use dw_core::{Attributes, ModelHandle, ModelIdentity, ModelKind, NETWORK_ID};

/// Resolver every context registry is built on.
pub type ContextResolver<'a> = dyn ModelResolver<Target = dyn DynamicModel + 'static> + 'a;

/// Registry handed to `DynamicModel::declare_connections`.
pub type ContextRegistry<'a> = ConnectionRegistry<'a, ContextResolver<'a>>;

/// Whether a model takes part in the serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Emit,
    /// A required optional peer was missing; the model is left out.
    Inert,
}

/// A built, validated dynamic model.
///
/// Models are enumerated once per context build, in supplied order, and
/// declare their wires against the context registry. Implementations must
/// decide on `Emission::Inert` before recording any connection.
pub trait DynamicModel: ModelHandle + Send + Sync {
    fn dynamic_model_id(&self) -> &str;

    fn kind(&self) -> &ModelKind;

    /// Network element this model is attached to, if any.
    fn static_id(&self) -> Option<&str> {
        None
    }

    fn declare_connections(&self, _registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        Ok(Emission::Emit)
    }
}

/// Default model of a network element with no dedicated dynamic model.
///
/// Addressed through the network model; it declares no connections.
#[derive(Debug, Clone)]
pub struct NetworkElement {
    identity: ModelIdentity,
    kind: ModelKind,
    static_id: String,
}

impl NetworkElement {
    pub fn new(
        type_name: impl Into<String>,
        kind: impl Into<ModelKind>,
        static_id: impl Into<String>,
    ) -> Self {
        let static_id = static_id.into();
        Self {
            identity: ModelIdentity::network(type_name, static_id.clone()),
            kind: kind.into(),
            static_id,
        }
    }

    /// Default bus model.
    pub fn bus(static_id: impl Into<String>) -> Self {
        Self::new("NetworkBus", ModelKind::bus(), static_id)
    }
}

impl ModelHandle for NetworkElement {
    fn type_name(&self) -> &str {
        self.identity.type_name()
    }

    fn from_attributes(&self) -> &Attributes {
        self.identity.from_attributes()
    }

    fn to_attributes(&self) -> &Attributes {
        self.identity.to_attributes()
    }
}

impl DynamicModel for NetworkElement {
    fn dynamic_model_id(&self) -> &str {
        NETWORK_ID
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn static_id(&self) -> Option<&str> {
        Some(&self.static_id)
    }
}
