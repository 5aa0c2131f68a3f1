//! Mapping schema
//!
//! The mapping schema is the declarative description of how an input document
//! becomes XML. It is built once (in code or loaded from JSON) and only read
//! afterwards, so one instance can back any number of conversions.

mod element;

pub use element::{AttributeSpec, MapBody, MapElement, NodeEncoding, ValueType};

use crate::error::{Error, Result};
use crate::loaders::SchemaLoader;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Root of a mapping schema: `{"root": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingSchema {
    /// The document element; implicitly an object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<MapElement>,
}

impl MappingSchema {
    /// Create a schema from its root element
    pub fn new(root: MapElement) -> Self {
        Self { root: Some(root) }
    }

    /// Parse a schema from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        SchemaLoader::new().load_str(json)
    }

    /// Build a schema from an already parsed JSON value
    pub fn from_json_value(value: JsonValue) -> Result<Self> {
        SchemaLoader::new().load_value(value)
    }

    /// Load a schema from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        SchemaLoader::new().load_file(path)
    }

    /// Check that the root defines a node name, attributes and a body.
    ///
    /// Returns the root element on success.
    pub fn validate(&self) -> Result<&MapElement> {
        match &self.root {
            Some(root)
                if !root.xml_node_name.is_empty()
                    && root.attributes.is_some()
                    && root.body.is_some() =>
            {
                Ok(root)
            }
            _ => Err(Error::IncompleteSchema),
        }
    }

    /// Count mapped elements per value type
    pub fn summary(&self) -> SchemaSummary {
        let mut summary = SchemaSummary::default();
        if let Some(root) = &self.root {
            summary.visit(root, 0);
        }
        summary
    }
}

/// Statistics over the elements declared by a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummary {
    /// Total number of mapped elements, root included
    pub elements: usize,
    /// Element count keyed by type tag, in first-seen order
    pub by_type: IndexMap<String, usize>,
    /// Deepest nesting level below the root
    pub max_depth: usize,
    /// Number of attribute specs across all elements
    pub attributes: usize,
}

impl SchemaSummary {
    fn visit(&mut self, element: &MapElement, depth: usize) {
        self.elements += 1;
        self.max_depth = self.max_depth.max(depth);
        self.attributes += element.attribute_specs().len();
        *self
            .by_type
            .entry(element.value_type.as_tag().to_string())
            .or_insert(0) += 1;

        for (_, child) in element.children() {
            self.visit(child, depth + 1);
        }
    }
}
