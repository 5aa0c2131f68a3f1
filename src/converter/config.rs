//! Converter configuration

use crate::builder::TreeBuilder;
use crate::limits::Limits;

/// Configuration for converters
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Whether to indent the serialized document
    pretty: bool,
    /// Indentation for pretty output
    indent: usize,
    /// Whether to emit an XML declaration
    xml_declaration: bool,
    /// Depth and size limits
    limits: Limits,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            xml_declaration: false,
            limits: Limits::default(),
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if output is pretty printed
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Get indentation level
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Check if an XML declaration is emitted
    pub fn xml_declaration(&self) -> bool {
        self.xml_declaration
    }

    /// Get the limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Set pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set indentation
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set XML declaration output
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set limits.
    ///
    /// Depth and array limits apply while converting; the schema size limit
    /// applies when the schema is loaded through
    /// [`JsonToXmlConverter::from_schema_file_with_config`](super::JsonToXmlConverter::from_schema_file_with_config).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// A [`TreeBuilder`] honouring the serialization settings
    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new()
            .with_indent(self.indent)
            .with_xml_declaration(self.xml_declaration)
    }
}
