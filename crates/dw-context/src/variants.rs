//! Parallel builds of independent contexts.

use dw_connect::{NetworkQuery, RegistryConfig};
use rayon::prelude::*;
use tracing::info_span;

use crate::catalog::ModelCatalog;
use crate::context::{DynamicContext, build_context};
use crate::error::ContextResult;

/// One independently built context, e.g. one contingency.
#[derive(Clone)]
pub struct Variant {
    pub name: String,
    pub catalog: ModelCatalog,
}

impl Variant {
    pub fn new(name: impl Into<String>, catalog: ModelCatalog) -> Self {
        Self {
            name: name.into(),
            catalog,
        }
    }
}

/// Build every variant's context in parallel.
///
/// Each build owns its registry; results come back in variant order.
pub fn build_variants(
    variants: &[Variant],
    network: &(dyn NetworkQuery + Sync),
    config: &RegistryConfig,
) -> Vec<ContextResult<DynamicContext>> {
    variants
        .par_iter()
        .map(|variant| {
            let _span = info_span!("variant", name = %variant.name).entered();
            build_context(&variant.catalog, network, config)
        })
        .collect()
}
