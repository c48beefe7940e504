//! dw-connect: connection-resolution engine for dynawire.
//!
//! Models declare their wires against a [`ConnectionRegistry`]. The registry
//! resolves targets through a [`ModelResolver`], derives a [`ConnectorKey`]
//! per request, computes each [`ConnectorTemplate`] at most once, and
//! appends one [`ConnectionInstance`] per wired instance pair. Freezing the
//! registry yields a [`ConnectionSet`] ready for serialization.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use dw_connect::{pairs, ConnectionRegistry, ModelResolver, NoNetwork};
//! use dw_core::{ModelIdentity, ModelKind, TargetRef};
//!
//! struct Buses(HashMap<String, ModelIdentity>);
//!
//! impl ModelResolver for Buses {
//!     type Target = ModelIdentity;
//!     fn find(&self, target: &TargetRef, kind: &ModelKind) -> Option<&ModelIdentity> {
//!         match target {
//!             TargetRef::Static(id) if *kind == ModelKind::bus() => self.0.get(id),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let buses = Buses(
//!     ["B1", "B2"]
//!         .into_iter()
//!         .map(|id| (id.to_string(), ModelIdentity::network("Bus", id)))
//!         .collect(),
//! );
//! let sync = ModelIdentity::dynamic("Sync", "A");
//!
//! let mut registry = ConnectionRegistry::new(&buses, &NoNetwork);
//! for bus in ["B1", "B2"] {
//!     registry
//!         .connect(&sync, &TargetRef::Static(bus.into()), &ModelKind::bus(), |_| {
//!             pairs([("v_out", "v_in")])
//!         })
//!         .unwrap();
//! }
//! let set = registry.freeze();
//!
//! assert_eq!(set.templates().len(), 1);
//! assert_eq!(set.instances().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod instance;
pub mod key;
pub mod registry;
pub mod resolve;
pub mod set;
pub mod template;
pub(crate) mod validate;
pub mod variable;

// Re-exports for ergonomics
pub use config::{RegistryConfig, TemplateCheck};
pub use error::{ConnectError, ConnectResult};
pub use instance::ConnectionInstance;
pub use key::{ConnectorKey, ConnectorSuffix, KeySource};
pub use registry::{ConnectionRegistry, Outcome};
pub use resolve::{ModelResolver, NetworkQuery, NoNetwork};
pub use set::ConnectionSet;
pub use template::{ConnectorTemplate, TemplateMap, TemplateShape};
pub use variable::{INDEX_PLACEHOLDER, VariableConnection, pairs, substitute_index};
