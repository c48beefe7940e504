//! dw-core: shared vocabulary for dynawire.
//!
//! Contains:
//! - attributes (ordered key/value lists addressing a model instance)
//! - model (the `ModelHandle` identity contract and its plain implementation)
//! - refs (target, terminal and side references)
//! - error (shared error types)

pub mod attributes;
pub mod error;
pub mod model;
pub mod refs;

// Re-exports: nice ergonomics for downstream crates
pub use attributes::{Attribute, Attributes};
pub use error::{CoreError, CoreResult};
pub use model::{ModelHandle, ModelIdentity, ModelKind, NETWORK_ID};
pub use refs::{Side, TargetRef, TerminalRef};
