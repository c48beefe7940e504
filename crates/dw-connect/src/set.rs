//! The frozen connection set handed to serialization.

use crate::error::{ConnectError, ConnectResult};
use crate::instance::ConnectionInstance;
use crate::key::ConnectorKey;
use crate::template::{ConnectorTemplate, TemplateMap, TemplateShape};
use crate::validate;
use crate::variable::VariableConnection;

/// Read-only result of one registry session.
///
/// Templates are in first-use order, instances in call order.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSet {
    pub(crate) templates: TemplateMap,
    pub(crate) instances: Vec<ConnectionInstance>,
}

impl ConnectionSet {
    pub(crate) fn new(templates: TemplateMap, instances: Vec<ConnectionInstance>) -> Self {
        Self {
            templates,
            instances,
        }
    }

    /// All templates in first-use order.
    pub fn templates(&self) -> &[ConnectorTemplate] {
        self.templates.as_slice()
    }

    /// All instances in call order.
    pub fn instances(&self) -> &[ConnectionInstance] {
        &self.instances
    }

    pub fn template(&self, key: &ConnectorKey) -> Option<&ConnectorTemplate> {
        self.templates.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.instances.is_empty()
    }

    /// Instances using the connector `key`, in call order.
    pub fn instances_of<'s>(
        &'s self,
        key: &'s ConnectorKey,
    ) -> impl Iterator<Item = &'s ConnectionInstance> + 's {
        self.instances.iter().filter(move |i| i.connector() == key)
    }

    /// Check the invariants of a finished set.
    pub fn validate(&self) -> ConnectResult<()> {
        validate::validate_templates(&self.templates)?;
        validate::validate_instances(&self.templates, &self.instances)
    }

    /// Variable pairs of `instance` with the index placeholder filled in.
    pub fn resolved_pairs(
        &self,
        instance: &ConnectionInstance,
    ) -> ConnectResult<Vec<VariableConnection>> {
        let key = instance.connector();
        let template = self
            .template(key)
            .ok_or_else(|| ConnectError::DanglingConnector { key: key.clone() })?;

        match template.shape() {
            TemplateShape::Plain => Ok(template.connections().to_vec()),
            TemplateShape::Indexed => {
                let index = instance
                    .index()
                    .ok_or_else(|| ConnectError::MissingIndex { key: key.clone() })?;
                Ok(template
                    .connections()
                    .iter()
                    .map(|c| c.with_index(index))
                    .collect())
            }
        }
    }
}
