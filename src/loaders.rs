//! Mapping schema loading
//!
//! Schemas are usually persisted as JSON next to the application's other
//! configuration. The loader reads them with a size limit and deserializes
//! into [`MappingSchema`]. Completeness is not checked here; the converter
//! validates before every conversion.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::mapping::MappingSchema;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resource loader for mapping schemas
#[derive(Debug, Default)]
pub struct SchemaLoader {
    /// Resource limits
    limits: Limits,
}

impl SchemaLoader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Load a schema from a file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<MappingSchema> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!(
                "Failed to read mapping schema '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), bytes = content.len(), "loading mapping schema");
        self.load_str(&content)
    }

    /// Load a schema from JSON text
    pub fn load_str(&self, json: &str) -> Result<MappingSchema> {
        self.limits.check_schema_size(json.len())?;
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema from a parsed JSON value
    pub fn load_value(&self, value: JsonValue) -> Result<MappingSchema> {
        Ok(serde_json::from_value(value)?)
    }
}
