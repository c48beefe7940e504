//! The identity contract every wire endpoint satisfies.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, Attributes};
use crate::error::{CoreError, CoreResult};

/// Identifier of the single network model every static element belongs to.
pub const NETWORK_ID: &str = "NETWORK";

/// Minimal identity of a simulated component instance.
///
/// `type_name` is shared by every instance of the same model class and only
/// feeds connector-key derivation. The attribute lists address this exact
/// instance when it sits on the origin (`from`) or destination (`to`) end of
/// a wire.
pub trait ModelHandle {
    fn type_name(&self) -> &str;

    fn from_attributes(&self) -> &Attributes;

    fn to_attributes(&self) -> &Attributes;
}

impl<T: ModelHandle + ?Sized> ModelHandle for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn from_attributes(&self) -> &Attributes {
        (**self).from_attributes()
    }

    fn to_attributes(&self) -> &Attributes {
        (**self).to_attributes()
    }
}

impl<T: ModelHandle + ?Sized> ModelHandle for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn from_attributes(&self) -> &Attributes {
        (**self).from_attributes()
    }

    fn to_attributes(&self) -> &Attributes {
        (**self).to_attributes()
    }
}

/// Plain-data `ModelHandle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelIdentity {
    pub type_name: String,
    pub from_attributes: Attributes,
    pub to_attributes: Attributes,
}

impl ModelIdentity {
    pub fn new(
        type_name: impl Into<String>,
        from_attributes: Attributes,
        to_attributes: Attributes,
    ) -> CoreResult<Self> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(CoreError::EmptyIdentifier { what: "type name" });
        }
        Ok(Self {
            type_name,
            from_attributes,
            to_attributes,
        })
    }

    /// Identity of a dynamic model: `id1=<id>` as origin, `id2=<id>` as destination.
    pub fn dynamic(type_name: impl Into<String>, dynamic_id: impl Into<String>) -> Self {
        let id = dynamic_id.into();
        Self {
            type_name: type_name.into(),
            from_attributes: vec![Attribute::id1(id.clone())].into(),
            to_attributes: vec![Attribute::id2(id)].into(),
        }
    }

    /// Identity of a network element addressed through the network model.
    pub fn network(type_name: impl Into<String>, static_id: impl Into<String>) -> Self {
        let static_id = static_id.into();
        Self {
            type_name: type_name.into(),
            from_attributes: vec![Attribute::id1(NETWORK_ID), Attribute::name1(static_id.clone())]
                .into(),
            to_attributes: vec![Attribute::id2(NETWORK_ID), Attribute::name2(static_id)].into(),
        }
    }
}

impl ModelHandle for ModelIdentity {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn from_attributes(&self) -> &Attributes {
        &self.from_attributes
    }

    fn to_attributes(&self) -> &Attributes {
        &self.to_attributes
    }
}

/// Category a caller expects a resolved target to belong to.
///
/// Several concrete model types may share a kind (a `Bus` kind may be served
/// by a network bus or an infinite bus model).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelKind(pub String);

impl ModelKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Connection point reachable from a terminal.
    pub fn bus() -> Self {
        Self::new("Bus")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelKind {
    fn from(kind: &str) -> Self {
        Self(kind.to_string())
    }
}

impl From<String> for ModelKind {
    fn from(kind: String) -> Self {
        Self(kind)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
