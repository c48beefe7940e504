//! Model fixtures shared by dw-context integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use dw_connect::{ConnectResult, NetworkQuery, pairs};
use dw_context::{ContextRegistry, DynamicModel, Emission};
use dw_core::{Attributes, ModelHandle, ModelIdentity, ModelKind, Side, TargetRef, TerminalRef};

/// Terminal -> bus table.
#[derive(Default)]
pub struct Topology {
    buses: HashMap<String, String>,
}

impl Topology {
    pub fn with_terminal(mut self, equipment: &str, bus: &str) -> Self {
        self.buses.insert(equipment.to_string(), bus.to_string());
        self
    }
}

impl NetworkQuery for Topology {
    fn connectable_bus(&self, terminal: &TerminalRef) -> Option<String> {
        self.buses.get(&terminal.equipment).cloned()
    }
}

macro_rules! model_handle {
    ($ty:ty) => {
        impl ModelHandle for $ty {
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
    };
}

/// Generator wired to the bus of its own terminal.
pub struct Generator {
    identity: ModelIdentity,
    kind: ModelKind,
    static_id: String,
}

impl Generator {
    pub fn new(id: &str, static_id: &str) -> Self {
        Self {
            identity: ModelIdentity::dynamic("GeneratorSynchronous", id),
            kind: ModelKind::from("Generator"),
            static_id: static_id.to_string(),
        }
    }
}

model_handle!(Generator);

impl DynamicModel for Generator {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn static_id(&self) -> Option<&str> {
        Some(&self.static_id)
    }

    fn declare_connections(&self, registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        registry.connect_terminal(self, &TerminalRef::new(&self.static_id), |_| {
            pairs([
                ("generator_terminal", "@NODE@_ACPIN"),
                ("generator_switchOffSignal1", "@NODE@_switchOff"),
            ])
        })?;
        Ok(Emission::Emit)
    }
}

/// Fan-in model wired to every listed generator through one indexed connector.
pub struct OmegaRef {
    identity: ModelIdentity,
    kind: ModelKind,
    generators: Vec<String>,
}

impl OmegaRef {
    pub fn new(id: &str, generators: &[&str]) -> Self {
        Self {
            identity: ModelIdentity::dynamic("DYNModelOmegaRef", id),
            kind: ModelKind::from("OmegaRef"),
            generators: generators.iter().map(|g| g.to_string()).collect(),
        }
    }
}

model_handle!(OmegaRef);

impl DynamicModel for OmegaRef {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn declare_connections(&self, registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        let generator = ModelKind::from("Generator");
        for (i, gen_id) in self.generators.iter().enumerate() {
            registry.connect_with_index(
                self,
                &TargetRef::Dynamic(gen_id.clone()),
                &generator,
                |_| {
                    pairs([
                        ("omega_grp_@INDEX@", "generator_omegaPu"),
                        ("omegaRef_grp_@INDEX@", "generator_omegaRefPu"),
                        ("running_grp_@INDEX@", "generator_running"),
                    ])
                },
                i as u32,
            )?;
        }
        Ok(Emission::Emit)
    }
}

/// Current limit automaton measuring one side of a branch.
pub struct Overload {
    identity: ModelIdentity,
    kind: ModelKind,
    branch: String,
    side: Side,
}

impl Overload {
    pub fn new(id: &str, branch: &str, side: Side) -> Self {
        Self {
            identity: ModelIdentity::dynamic("OverloadManagement", id),
            kind: ModelKind::from("Automaton"),
            branch: branch.to_string(),
            side,
        }
    }
}

model_handle!(Overload);

impl DynamicModel for Overload {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn declare_connections(&self, registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        registry.connect_with_side(
            self,
            &TargetRef::Static(self.branch.clone()),
            &ModelKind::from("Branch"),
            |_, side| {
                pairs([
                    ("currentLimitAutomaton_IMonitored", format!("@NAME@_iSide{}", side.number())),
                    ("currentLimitAutomaton_order", format!("@NAME@_state{}", side.number())),
                ])
            },
            self.side,
        )?;
        Ok(Emission::Emit)
    }
}

/// Automaton whose only peer is optional; inert when the peer is absent.
pub struct PeerBlocking {
    identity: ModelIdentity,
    kind: ModelKind,
    peer: String,
}

impl PeerBlocking {
    pub fn new(id: &str, peer: &str) -> Self {
        Self {
            identity: ModelIdentity::dynamic("PhaseShifterBlockingI", id),
            kind: ModelKind::from("Automaton"),
            peer: peer.to_string(),
        }
    }
}

model_handle!(PeerBlocking);

impl DynamicModel for PeerBlocking {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn declare_connections(&self, registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        let outcome = registry.try_connect(
            self,
            &TargetRef::Dynamic(self.peer.clone()),
            &ModelKind::from("Automaton"),
            |_| pairs([("phaseShifterBlockingI_locked", "phaseShifter_locked")]),
        )?;
        Ok(if outcome.is_connected() {
            Emission::Emit
        } else {
            Emission::Inert
        })
    }
}

/// Misbehaving model: records a wire, then reports itself inert.
pub struct LateInert {
    identity: ModelIdentity,
    kind: ModelKind,
    bus: String,
}

impl LateInert {
    pub fn new(id: &str, bus: &str) -> Self {
        Self {
            identity: ModelIdentity::dynamic("LateInert", id),
            kind: ModelKind::from("Automaton"),
            bus: bus.to_string(),
        }
    }
}

model_handle!(LateInert);

impl DynamicModel for LateInert {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn declare_connections(&self, registry: &mut ContextRegistry<'_>) -> ConnectResult<Emission> {
        registry.connect(
            self,
            &TargetRef::Static(self.bus.clone()),
            &ModelKind::bus(),
            |_| pairs([("u", "U_value")]),
        )?;
        Ok(Emission::Inert)
    }
}

/// Infinite bus replacing the default model of a network bus.
pub struct InfiniteBus {
    identity: ModelIdentity,
    kind: ModelKind,
    static_id: String,
}

impl InfiniteBus {
    pub fn new(id: &str, static_id: &str) -> Self {
        Self {
            identity: ModelIdentity::dynamic("InfiniteBus", id),
            kind: ModelKind::bus(),
            static_id: static_id.to_string(),
        }
    }
}

model_handle!(InfiniteBus);

impl DynamicModel for InfiniteBus {
    fn dynamic_model_id(&self) -> &str {
        self.identity.to_attributes().get("id2").unwrap_or_default()
    }

    fn kind(&self) -> &ModelKind {
        &self.kind
    }

    fn static_id(&self) -> Option<&str> {
        Some(&self.static_id)
    }
}
