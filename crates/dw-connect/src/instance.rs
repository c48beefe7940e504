//! Concrete connector usages between two model instances.

use dw_core::Attributes;
use serde::Serialize;

use crate::key::ConnectorKey;

/// One usage of a connector template between two specific instances.
///
/// `connector` is a name-based reference into the template map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInstance {
    connector: ConnectorKey,
    from: Attributes,
    to: Attributes,
    /// Also rendered into `from` as `index1`; kept apart so an origin's own
    /// `index1` attribute cannot shadow it.
    #[serde(skip)]
    index: Option<u32>,
}

impl ConnectionInstance {
    pub(crate) fn new(connector: ConnectorKey, from: Attributes, to: Attributes) -> Self {
        Self {
            connector,
            from,
            to,
            index: None,
        }
    }

    pub(crate) fn indexed(
        connector: ConnectorKey,
        from: Attributes,
        to: Attributes,
        index: u32,
    ) -> Self {
        Self {
            index: Some(index),
            ..Self::new(connector, from, to)
        }
    }

    pub fn connector(&self) -> &ConnectorKey {
        &self.connector
    }

    pub fn from_attributes(&self) -> &Attributes {
        &self.from
    }

    pub fn to_attributes(&self) -> &Attributes {
        &self.to
    }

    /// Index attached by an indexed connection, if any.
    pub fn index(&self) -> Option<u32> {
        self.index
    }
}
