//! The connection registry: the session a model declares its wires against.

use dw_core::{Attribute, ModelHandle, ModelKind, Side, TargetRef, TerminalRef};
use tracing::{debug, trace};

use crate::config::{RegistryConfig, TemplateCheck};
use crate::error::{ConnectError, ConnectResult};
use crate::instance::ConnectionInstance;
use crate::key::{ConnectorSuffix, KeySource};
use crate::resolve::{ModelResolver, NetworkQuery};
use crate::set::ConnectionSet;
use crate::template::{TemplateEntry, TemplateMap, TemplateShape};
use crate::variable::VariableConnection;

/// Result of an optional connection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Connected,
    /// No target of the expected kind; nothing was recorded.
    Skipped,
}

impl Outcome {
    pub fn is_connected(self) -> bool {
        self == Outcome::Connected
    }
}

/// Open registry, populated while models enumerate their connections.
///
/// Templates and instances only grow. `freeze` ends the session and hands
/// back the read-only `ConnectionSet`.
pub struct ConnectionRegistry<'a, R: ModelResolver + ?Sized> {
    resolver: &'a R,
    network: &'a dyn NetworkQuery,
    config: RegistryConfig,
    templates: TemplateMap,
    instances: Vec<ConnectionInstance>,
}

impl<'a, R: ModelResolver + ?Sized> ConnectionRegistry<'a, R> {
    /// Create an empty registry with the default configuration.
    pub fn new(resolver: &'a R, network: &'a dyn NetworkQuery) -> Self {
        Self::with_config(resolver, network, RegistryConfig::default())
    }

    pub fn with_config(
        resolver: &'a R,
        network: &'a dyn NetworkQuery,
        config: RegistryConfig,
    ) -> Self {
        Self {
            resolver,
            network,
            config,
            templates: TemplateMap::new(),
            instances: Vec::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Whether a target of `kind` exists for `target`. Never mutates.
    pub fn can_connect(&self, target: &TargetRef, kind: &ModelKind) -> bool {
        self.resolver.find(target, kind).is_some()
    }

    /// Mandatory connection to `target`.
    pub fn connect<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let resolved = self.resolve(origin, target, kind)?;
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::None,
            TemplateShape::Plain,
            None,
            variables,
        )
    }

    /// Optional connection to `target`; skipped when it does not resolve.
    pub fn try_connect<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
    ) -> ConnectResult<Outcome>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let Some(resolved) = self.lookup(origin, target, kind) else {
            return Ok(Outcome::Skipped);
        };
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::None,
            TemplateShape::Plain,
            None,
            variables,
        )?;
        Ok(Outcome::Connected)
    }

    /// Mandatory connection to one side of a two-terminal target.
    ///
    /// The key is suffixed with the side, so each side gets its own template.
    pub fn connect_with_side<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        side: Side,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, Side) -> Vec<VariableConnection>,
    {
        let resolved = self.resolve(origin, target, kind)?;
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::Side(side),
            TemplateShape::Plain,
            None,
            |t| variables(t, side),
        )
    }

    pub fn try_connect_with_side<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        side: Side,
    ) -> ConnectResult<Outcome>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, Side) -> Vec<VariableConnection>,
    {
        let Some(resolved) = self.lookup(origin, target, kind) else {
            return Ok(Outcome::Skipped);
        };
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::Side(side),
            TemplateShape::Plain,
            None,
            |t| variables(t, side),
        )?;
        Ok(Outcome::Connected)
    }

    /// Mandatory fan-in connection sharing one template across all indices.
    ///
    /// The key carries no suffix. `variables` must place the index placeholder
    /// in its names; the instance records `index1=<index>` after the origin's
    /// from-attributes.
    pub fn connect_with_index<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        index: u32,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let resolved = self.resolve(origin, target, kind)?;
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::None,
            TemplateShape::Indexed,
            Some(index),
            variables,
        )
    }

    pub fn try_connect_with_index<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        index: u32,
    ) -> ConnectResult<Outcome>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let Some(resolved) = self.lookup(origin, target, kind) else {
            return Ok(Outcome::Skipped);
        };
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::None,
            TemplateShape::Indexed,
            Some(index),
            variables,
        )?;
        Ok(Outcome::Connected)
    }

    /// Mandatory connection in a named group; key and names carry `suffix`.
    pub fn connect_with_suffix<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        suffix: &str,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, &str) -> Vec<VariableConnection>,
    {
        let resolved = self.resolve(origin, target, kind)?;
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::Custom(suffix.to_string()),
            TemplateShape::Plain,
            None,
            |t| variables(t, suffix),
        )
    }

    pub fn try_connect_with_suffix<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        suffix: &str,
    ) -> ConnectResult<Outcome>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, &str) -> Vec<VariableConnection>,
    {
        let Some(resolved) = self.lookup(origin, target, kind) else {
            return Ok(Outcome::Skipped);
        };
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::Custom(suffix.to_string()),
            TemplateShape::Plain,
            None,
            |t| variables(t, suffix),
        )?;
        Ok(Outcome::Connected)
    }

    /// Mandatory connection to numbered slot `ordinal` of the origin.
    pub fn connect_with_ordinal<O, F>(
        &mut self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
        variables: F,
        ordinal: u32,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, u32) -> Vec<VariableConnection>,
    {
        let resolved = self.resolve(origin, target, kind)?;
        self.attach(
            origin,
            resolved,
            ConnectorSuffix::Ordinal(ordinal),
            TemplateShape::Plain,
            None,
            |t| variables(t, ordinal),
        )
    }

    /// Mandatory connection to the bus `terminal` is connected to.
    pub fn connect_terminal<O, F>(
        &mut self,
        origin: &O,
        terminal: &TerminalRef,
        variables: F,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let bus = self.terminal_bus(origin, terminal)?;
        self.connect(origin, &bus, &ModelKind::bus(), variables)
    }

    /// Mandatory connection to the bus of `terminal`, keyed by `side`.
    pub fn connect_terminal_with_side<O, F>(
        &mut self,
        origin: &O,
        terminal: &TerminalRef,
        variables: F,
        side: Side,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target, Side) -> Vec<VariableConnection>,
    {
        let bus = self.terminal_bus(origin, terminal)?;
        self.connect_with_side(origin, &bus, &ModelKind::bus(), variables, side)
    }

    /// Optional connection to the bus of `terminal`; skipped when the
    /// terminal is disconnected or its bus has no model.
    pub fn try_connect_terminal<O, F>(
        &mut self,
        origin: &O,
        terminal: &TerminalRef,
        variables: F,
    ) -> ConnectResult<Outcome>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        match self.network.connectable_bus(terminal) {
            Some(bus) => {
                self.try_connect(origin, &TargetRef::Static(bus), &ModelKind::bus(), variables)
            }
            None => {
                debug!(
                    origin = origin.type_name(),
                    %terminal,
                    "optional terminal connection skipped: terminal not connected"
                );
                Ok(Outcome::Skipped)
            }
        }
    }

    /// End the session. The returned set is read-only.
    pub fn freeze(self) -> ConnectionSet {
        debug!(
            templates = self.templates.len(),
            instances = self.instances.len(),
            "connection registry frozen"
        );
        ConnectionSet::new(self.templates, self.instances)
    }

    fn lookup<O>(
        &self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
    ) -> Option<&'a R::Target>
    where
        O: ModelHandle + ?Sized,
    {
        let resolver = self.resolver;
        let found = resolver.find(target, kind);
        if found.is_none() {
            debug!(
                origin = origin.type_name(),
                %target,
                %kind,
                "optional connection skipped: no matching model"
            );
        }
        found
    }

    fn resolve<O>(
        &self,
        origin: &O,
        target: &TargetRef,
        kind: &ModelKind,
    ) -> ConnectResult<&'a R::Target>
    where
        O: ModelHandle + ?Sized,
    {
        let resolver = self.resolver;
        resolver
            .find(target, kind)
            .ok_or_else(|| ConnectError::TargetNotFound {
                origin: origin.type_name().to_string(),
                target: target.clone(),
                kind: kind.clone(),
            })
    }

    fn terminal_bus<O>(&self, origin: &O, terminal: &TerminalRef) -> ConnectResult<TargetRef>
    where
        O: ModelHandle + ?Sized,
    {
        self.network
            .connectable_bus(terminal)
            .map(TargetRef::Static)
            .ok_or_else(|| ConnectError::TerminalNotConnected {
                origin: origin.type_name().to_string(),
                terminal: terminal.clone(),
            })
    }

    /// Record one instance, creating or reusing the template for its key.
    ///
    /// Fails before any mutation when the template request is rejected.
    fn attach<O, F>(
        &mut self,
        origin: &O,
        target: &R::Target,
        suffix: ConnectorSuffix,
        shape: TemplateShape,
        index: Option<u32>,
        variables: F,
    ) -> ConnectResult<()>
    where
        O: ModelHandle + ?Sized,
        F: Fn(&R::Target) -> Vec<VariableConnection>,
    {
        let to = target.to_attributes();
        if self.config.require_to_attributes && to.is_empty() {
            return Err(ConnectError::EmptyTargetAttributes {
                target_type: target.type_name().to_string(),
            });
        }

        let source = KeySource::new(origin.type_name(), target.type_name(), suffix);
        let key = source.key();
        match self.templates.get_or_create(&source, shape, || variables(target))? {
            TemplateEntry::Created => debug!(%key, "connector template created"),
            TemplateEntry::Reused => {
                trace!(%key, "connector template reused");
                if self.config.template_check == TemplateCheck::Verify {
                    self.templates.verify(&key, &variables(target))?;
                }
            }
        }

        let instance = match index {
            Some(i) => ConnectionInstance::indexed(
                key,
                origin.from_attributes().with(Attribute::index1(i)),
                to.clone(),
                i,
            ),
            None => ConnectionInstance::new(key, origin.from_attributes().clone(), to.clone()),
        };
        self.instances.push(instance);
        Ok(())
    }
}
