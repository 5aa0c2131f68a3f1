//! JSON to XML conversion
//!
//! [`RecursiveConverter`] is the engine and works with any
//! [`XmlBuilder`](crate::builder::XmlBuilder). [`JsonToXmlConverter`] binds
//! it to the bundled [`TreeBuilder`] for the common case.

mod attributes;
mod config;
mod recursive;

pub use attributes::resolve_attributes;
pub use config::ConverterConfig;
pub use recursive::RecursiveConverter;

use crate::builder::TreeBuilder;
use crate::error::Result;
use crate::loaders::SchemaLoader;
use crate::mapping::MappingSchema;
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::Arc;

/// Converts JSON documents to XML with a fixed mapping schema
#[derive(Debug, Clone)]
pub struct JsonToXmlConverter {
    inner: RecursiveConverter<TreeBuilder>,
}

impl JsonToXmlConverter {
    /// Create a converter producing compact XML
    pub fn new(schema: impl Into<Arc<MappingSchema>>) -> Self {
        Self::with_config(schema, ConverterConfig::default())
    }

    /// Create a converter with explicit configuration
    pub fn with_config(schema: impl Into<Arc<MappingSchema>>, config: ConverterConfig) -> Self {
        let builder = config.tree_builder();
        Self {
            inner: RecursiveConverter::new(builder, schema).with_config(config),
        }
    }

    /// Load the mapping schema from a JSON file
    pub fn from_schema_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_schema_file_with_config(path, ConverterConfig::default())
    }

    /// Load the mapping schema from a JSON file, enforcing the schema size
    /// limit of `config`
    pub fn from_schema_file_with_config(
        path: impl AsRef<Path>,
        config: ConverterConfig,
    ) -> Result<Self> {
        let schema = SchemaLoader::new()
            .with_limits(config.limits().clone())
            .load_file(path)?;
        Ok(Self::with_config(schema, config))
    }

    /// The mapping schema
    pub fn schema(&self) -> &MappingSchema {
        self.inner.schema()
    }

    /// Convert a JSON document to XML text
    pub fn convert(&self, document: &JsonValue) -> Result<String> {
        self.inner.convert(document)
    }

    /// Parse JSON text and convert it to XML text
    pub fn convert_str(&self, json: &str) -> Result<String> {
        let document: JsonValue = serde_json::from_str(json)?;
        self.convert(&document)
    }
}
