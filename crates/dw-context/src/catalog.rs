//! In-memory model lookup for one context.

use std::collections::HashMap;
use std::sync::Arc;

use dw_connect::ModelResolver;
use dw_core::{ModelKind, TargetRef};

use crate::error::{ContextError, ContextResult};
use crate::model::DynamicModel;

/// Dynamic models of one context, in supplied order, plus default network
/// models for elements without a dedicated dynamic model.
///
/// Models are shared (`Arc`) so that variant catalogs built from a common
/// base do not copy them.
#[derive(Clone, Default)]
pub struct ModelCatalog {
    /// Dynamic models in supplied order.
    models: Vec<Arc<dyn DynamicModel>>,
    /// Default network models.
    defaults: Vec<Arc<dyn DynamicModel>>,
    /// Reverse lookup: dynamic id -> index in `models`.
    by_dynamic_id: HashMap<String, usize>,
    /// Reverse lookup: static id -> indices in `models`, supplied order.
    by_static_id: HashMap<String, Vec<usize>>,
    /// Reverse lookup: (static id, kind) -> index in `defaults`.
    default_by_static_id: HashMap<(String, ModelKind), usize>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from dynamic models in enumeration order.
    pub fn from_models<I>(models: I) -> ContextResult<Self>
    where
        I: IntoIterator<Item = Arc<dyn DynamicModel>>,
    {
        let mut catalog = Self::new();
        for model in models {
            catalog.add_shared(model)?;
        }
        Ok(catalog)
    }

    /// Append a dynamic model; it is enumerated after those already present.
    pub fn add_model<M: DynamicModel + 'static>(&mut self, model: M) -> ContextResult<()> {
        self.add_shared(Arc::new(model))
    }

    pub fn add_shared(&mut self, model: Arc<dyn DynamicModel>) -> ContextResult<()> {
        let id = model.dynamic_model_id().to_string();
        if self.by_dynamic_id.contains_key(&id) {
            return Err(ContextError::DuplicateModel { id });
        }
        let index = self.models.len();
        if let Some(static_id) = model.static_id() {
            self.by_static_id
                .entry(static_id.to_string())
                .or_default()
                .push(index);
        }
        self.by_dynamic_id.insert(id, index);
        self.models.push(model);
        Ok(())
    }

    /// Register a default network model, used when no dynamic model of the
    /// requested kind is attached to its static id.
    pub fn add_default<M: DynamicModel + 'static>(&mut self, model: M) -> ContextResult<()> {
        let Some(static_id) = model.static_id() else {
            return Err(ContextError::MissingStaticId {
                model: model.dynamic_model_id().to_string(),
            });
        };
        let key = (static_id.to_string(), model.kind().clone());
        if self.default_by_static_id.contains_key(&key) {
            return Err(ContextError::DuplicateDefault {
                static_id: key.0,
                kind: key.1,
            });
        }
        self.default_by_static_id.insert(key, self.defaults.len());
        self.defaults.push(Arc::new(model));
        Ok(())
    }

    /// Dynamic models in enumeration order.
    pub fn models(&self) -> impl Iterator<Item = &(dyn DynamicModel + 'static)> {
        self.models.iter().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get(&self, dynamic_id: &str) -> Option<&(dyn DynamicModel + 'static)> {
        self.by_dynamic_id
            .get(dynamic_id)
            .map(|&i| self.models[i].as_ref())
    }
}

impl ModelResolver for ModelCatalog {
    type Target = dyn DynamicModel;

    fn find(&self, target: &TargetRef, kind: &ModelKind) -> Option<&(dyn DynamicModel + 'static)> {
        match target {
            TargetRef::Dynamic(id) => self.get(id).filter(|m| m.kind() == kind),
            TargetRef::Static(id) => {
                // Dedicated dynamic models take precedence over defaults
                let attached = self.by_static_id.get(id).and_then(|indices| {
                    indices
                        .iter()
                        .map(|&i| self.models[i].as_ref())
                        .find(|m| m.kind() == kind)
                });
                attached.or_else(|| {
                    self.default_by_static_id
                        .get(&(id.clone(), kind.clone()))
                        .map(|&i| self.defaults[i].as_ref())
                })
            }
        }
    }
}

/// Resolver over a sub-context catalog stacked on its base catalog.
///
/// Lookups try `top` first, then `base`.
pub struct LayeredCatalog<'a> {
    pub top: &'a ModelCatalog,
    pub base: &'a ModelCatalog,
}

impl ModelResolver for LayeredCatalog<'_> {
    type Target = dyn DynamicModel;

    fn find(&self, target: &TargetRef, kind: &ModelKind) -> Option<&(dyn DynamicModel + 'static)> {
        self.top
            .find(target, kind)
            .or_else(|| self.base.find(target, kind))
    }
}
