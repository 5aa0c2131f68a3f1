//! # xmlmap
//!
//! Schema-driven conversion of JSON documents into XML.
//!
//! A [`MappingSchema`] declares, field by field, which XML element an input
//! value becomes, how it is typed, and which attributes it carries. The
//! converter walks schema and input together and produces the XML text,
//! which makes it a good fit for fixed-shape payloads such as ENTSO-E
//! market documents.
//!
//! ## Features
//!
//! - Output order follows the schema, never the input
//! - Missing input fields are skipped, unmapped ones ignored
//! - Literal and sibling-sourced attributes
//! - ISO timestamp and ENTSO-E boolean coercion
//! - Compact or pretty output through quick-xml
//! - Pluggable XML builder
//!
//! ## Example
//!
//! ```rust
//! use xmlmap::{JsonToXmlConverter, MapElement, MappingSchema};
//! use serde_json::json;
//!
//! let schema = MappingSchema::new(
//!     MapElement::object("Doc").with_child("name", MapElement::string("Name")),
//! );
//! let converter = JsonToXmlConverter::new(schema);
//!
//! let xml = converter.convert(&json!({ "name": "Alice" }))?;
//! assert_eq!(xml, "<Doc><Name>Alice</Name></Doc>");
//! # Ok::<(), xmlmap::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;
pub mod names;
pub mod value;

// Schema
pub mod loaders;
pub mod mapping;

// Conversion
pub mod builder;
pub mod coercers;
pub mod converter;

// Re-exports for convenience
pub use builder::{AttributeMap, NodeId, NodeTemplate, TreeBuilder, XmlBuilder, XmlDocument};
pub use converter::{ConverterConfig, JsonToXmlConverter, RecursiveConverter};
pub use error::{CoercionError, Error, Result};
pub use limits::Limits;
pub use mapping::{AttributeSpec, MapBody, MapElement, MappingSchema, NodeEncoding, ValueType};

/// Version of the xmlmap library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
