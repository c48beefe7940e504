//! dw-context: builds the wiring of a simulation context.
//!
//! Provides:
//! - The `DynamicModel` trait models implement to declare their wires
//! - `ModelCatalog`, the model-resolution capability for one context
//! - `build_context` / `build_final_step` for one context
//! - `build_variants` for many independent contexts in parallel

pub mod catalog;
pub mod context;
pub mod error;
pub mod model;
pub mod variants;

pub use catalog::{LayeredCatalog, ModelCatalog};
pub use context::{DynamicContext, build_context, build_final_step};
pub use error::{ContextError, ContextResult};
pub use model::{ContextRegistry, ContextResolver, DynamicModel, Emission, NetworkElement};
pub use variants::{Variant, build_variants};
