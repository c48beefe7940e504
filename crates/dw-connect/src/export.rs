//! Deterministic export of a frozen connection set.
//!
//! The document mirrors the dynamic-model description layout: one
//! `connectors` entry per template (first-use order) and one `connections`
//! entry per instance (call order).

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ConnectResult;
use crate::instance::ConnectionInstance;
use crate::set::ConnectionSet;
use crate::template::ConnectorTemplate;

#[derive(Serialize)]
struct ExportDocument<'a> {
    connectors: &'a [ConnectorTemplate],
    connections: &'a [ConnectionInstance],
}

impl ConnectionSet {
    fn document(&self) -> ExportDocument<'_> {
        ExportDocument {
            connectors: self.templates(),
            connections: self.instances(),
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> ConnectResult<String> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }

    /// Write the JSON document to `writer`.
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> ConnectResult<()> {
        serde_json::to_writer_pretty(writer, &self.document())?;
        Ok(())
    }

    /// SHA-256 of the compact JSON document, hex encoded.
    ///
    /// Equal for any two sets with the same templates and instances in the
    /// same order.
    pub fn fingerprint(&self) -> ConnectResult<String> {
        let json = serde_json::to_vec(&self.document())?;
        let mut hasher = Sha256::new();
        hasher.update(&json);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
