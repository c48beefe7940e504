//! Context build: enumerate models once and collect their wiring.

use dw_connect::{ConnectionRegistry, ConnectionSet, NetworkQuery, RegistryConfig};
use tracing::{debug, info, info_span};

use crate::catalog::{LayeredCatalog, ModelCatalog};
use crate::error::{ContextError, ContextResult};
use crate::model::{ContextResolver, DynamicModel, Emission};

/// Wiring of one simulation context, ready for serialization.
#[derive(Debug, Clone)]
pub struct DynamicContext {
    connections: ConnectionSet,
    emitted: Vec<String>,
    inert: Vec<String>,
}

impl DynamicContext {
    /// Frozen templates and instances.
    pub fn connections(&self) -> &ConnectionSet {
        &self.connections
    }

    pub fn into_connections(self) -> ConnectionSet {
        self.connections
    }

    /// Ids of the models to serialize, in enumeration order.
    pub fn emitted_models(&self) -> &[String] {
        &self.emitted
    }

    /// Ids of the models left out because an optional peer was missing.
    pub fn inert_models(&self) -> &[String] {
        &self.inert
    }
}

/// Build the context of `catalog`.
///
/// Each model declares its connections exactly once, in supplied order,
/// against a fresh registry. The first failure aborts the build and the
/// partial registry is dropped.
pub fn build_context(
    catalog: &ModelCatalog,
    network: &dyn NetworkQuery,
    config: &RegistryConfig,
) -> ContextResult<DynamicContext> {
    let _span = info_span!("build_context", models = catalog.len()).entered();
    enumerate(catalog.models(), catalog, network, config)
}

/// Build an independent sub-context (e.g. a final step) for `final_step`.
///
/// Only the final-step models are enumerated; their targets resolve in
/// `final_step` first, then in `base`.
pub fn build_final_step(
    base: &ModelCatalog,
    final_step: &ModelCatalog,
    network: &dyn NetworkQuery,
    config: &RegistryConfig,
) -> ContextResult<DynamicContext> {
    let _span = info_span!("build_final_step", models = final_step.len()).entered();
    let layered = LayeredCatalog {
        top: final_step,
        base,
    };
    enumerate(final_step.models(), &layered, network, config)
}

fn enumerate<'m, 'a, I>(
    models: I,
    resolver: &'a ContextResolver<'a>,
    network: &'a dyn NetworkQuery,
    config: &RegistryConfig,
) -> ContextResult<DynamicContext>
where
    I: Iterator<Item = &'m (dyn DynamicModel + 'static)>,
{
    let mut registry = ConnectionRegistry::with_config(resolver, network, config.clone());
    let mut emitted = Vec::new();
    let mut inert = Vec::new();

    for model in models {
        let id = model.dynamic_model_id();
        let before = registry.instance_count();
        let emission = model
            .declare_connections(&mut registry)
            .map_err(|source| ContextError::Declaration {
                model: id.to_string(),
                source,
            })?;

        match emission {
            Emission::Emit => emitted.push(id.to_string()),
            Emission::Inert => {
                let recorded = registry.instance_count() - before;
                if recorded > 0 {
                    return Err(ContextError::InertAfterConnecting {
                        model: id.to_string(),
                        recorded,
                    });
                }
                debug!(model = id, "model inert, excluded from output");
                inert.push(id.to_string());
            }
        }
    }

    let connections = registry.freeze();
    info!(
        templates = connections.templates().len(),
        instances = connections.instances().len(),
        emitted = emitted.len(),
        inert = inert.len(),
        "context built"
    );

    Ok(DynamicContext {
        connections,
        emitted,
        inert,
    })
}
