//! Connection-set validation logic.

use crate::error::{ConnectError, ConnectResult};
use crate::instance::ConnectionInstance;
use crate::template::{TemplateMap, TemplateShape};

/// Check that the key index and the template list agree.
pub(crate) fn validate_templates(templates: &TemplateMap) -> ConnectResult<()> {
    let positions = templates.positions();

    // Each template is indexed at its own position (catches duplicate keys)
    for (i, template) in templates.iter().enumerate() {
        if positions.get(template.key()) != Some(&i) {
            return Err(ConnectError::InconsistentTemplate {
                key: template.key().clone(),
                reason: format!("key index does not point at position {i}"),
            });
        }
    }

    // No index entry points past the list
    if let Some((key, _)) = positions.iter().find(|(_, i)| **i >= templates.len()) {
        return Err(ConnectError::DanglingConnector { key: key.clone() });
    }

    Ok(())
}

/// Check every instance against the template map.
pub(crate) fn validate_instances(
    templates: &TemplateMap,
    instances: &[ConnectionInstance],
) -> ConnectResult<()> {
    for instance in instances {
        let key = instance.connector();
        let template = templates
            .get(key)
            .ok_or_else(|| ConnectError::DanglingConnector { key: key.clone() })?;

        // Destination must be addressable
        if instance.to_attributes().is_empty() {
            return Err(ConnectError::EmptyTargetAttributes {
                target_type: key.to_string(),
            });
        }

        // Indexed connectors need the per-instance index
        if template.shape() == TemplateShape::Indexed && instance.index().is_none() {
            return Err(ConnectError::MissingIndex { key: key.clone() });
        }
    }

    Ok(())
}
