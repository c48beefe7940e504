//! Shared fixtures for dw-connect integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use dw_connect::{ModelResolver, NetworkQuery};
use dw_core::{ModelIdentity, ModelKind, TargetRef, TerminalRef};

/// In-memory resolver keyed by target and kind.
#[derive(Default)]
pub struct Catalog {
    entries: HashMap<(TargetRef, ModelKind), ModelIdentity>,
}

impl Catalog {
    pub fn with_bus(mut self, id: &str) -> Self {
        self.entries.insert(
            (TargetRef::Static(id.to_string()), ModelKind::bus()),
            ModelIdentity::network("Bus", id),
        );
        self
    }

    pub fn with_static(mut self, id: &str, kind: &str, type_name: &str) -> Self {
        self.entries.insert(
            (TargetRef::Static(id.to_string()), ModelKind::from(kind)),
            ModelIdentity::network(type_name, id),
        );
        self
    }

    pub fn with_dynamic(mut self, id: &str, kind: &str, type_name: &str) -> Self {
        self.entries.insert(
            (TargetRef::Dynamic(id.to_string()), ModelKind::from(kind)),
            ModelIdentity::dynamic(type_name, id),
        );
        self
    }
}

impl ModelResolver for Catalog {
    type Target = ModelIdentity;

    fn find(&self, target: &TargetRef, kind: &ModelKind) -> Option<&ModelIdentity> {
        self.entries.get(&(target.clone(), kind.clone()))
    }
}

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
