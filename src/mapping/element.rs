//! Mapping schema node types
//!
//! A [`MapElement`] describes how one input field becomes one XML element.
//! The JSON form uses camelCase keys:
//!
//! ```json
//! {
//!   "xmlNodeName": "mRID",
//!   "type": "string",
//!   "attributes": [{ "name": "codingScheme", "value": "A01" }],
//!   "nodeType": "normal"
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from input field name to the element it produces.
///
/// Key order determines output element order.
pub type MapBody = IndexMap<String, MapElement>;

/// Value type of a mapped field
///
/// Tags that are not recognised survive deserialization as
/// [`ValueType::Unsupported`] and are rejected when the converter reaches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    /// Scalar copied verbatim into element text
    String,
    /// Millisecond Unix timestamp rendered as an ISO-8601 UTC string
    IsoDate,
    /// Boolean rendered as an ENTSO-E indicator code
    EntsoeBoolean,
    /// Nested object; the element's body describes its fields
    #[default]
    Object,
    /// Sequence of objects; one sibling element per item
    Array,
    /// Unrecognised tag from a deserialized schema
    Unsupported(String),
}

impl ValueType {
    /// Parse a schema tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" | "String" => ValueType::String,
            "isoDate" | "IsoDate" => ValueType::IsoDate,
            "entsoeBoolean" | "EntsoeBoolean" => ValueType::EntsoeBoolean,
            "object" | "Object" => ValueType::Object,
            "array" | "Array" => ValueType::Array,
            other => ValueType::Unsupported(other.to_string()),
        }
    }

    /// The canonical schema tag
    pub fn as_tag(&self) -> &str {
        match self {
            ValueType::String => "string",
            ValueType::IsoDate => "isoDate",
            ValueType::EntsoeBoolean => "entsoeBoolean",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for ValueType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_tag().to_string()
    }
}

/// How a scalar value is written into its element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeEncoding {
    /// `<name attrs>text</name>`
    #[default]
    Normal,
    /// `<name attrs v="text"/>`
    ValueAsAttribute,
    /// Unrecognised tag from a deserialized schema
    Unsupported(String),
}

impl NodeEncoding {
    /// Parse a schema tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "normal" | "Normal" => NodeEncoding::Normal,
            "valueAsAttribute" | "ValueAsAttribute" => NodeEncoding::ValueAsAttribute,
            other => NodeEncoding::Unsupported(other.to_string()),
        }
    }

    /// The canonical schema tag
    pub fn as_tag(&self) -> &str {
        match self {
            NodeEncoding::Normal => "normal",
            NodeEncoding::ValueAsAttribute => "valueAsAttribute",
            NodeEncoding::Unsupported(tag) => tag,
        }
    }

    fn is_normal(&self) -> bool {
        *self == NodeEncoding::Normal
    }
}

impl From<String> for NodeEncoding {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<NodeEncoding> for String {
    fn from(encoding: NodeEncoding) -> Self {
        encoding.as_tag().to_string()
    }
}

/// One output attribute: a literal `value`, or a `source` field looked up in
/// the object that contains the mapped field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Output attribute name
    pub name: String,
    /// Literal value; wins over `source` when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Sibling field to read the value from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl AttributeSpec {
    /// Attribute with a fixed value
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            source: None,
        }
    }

    /// Attribute whose value comes from a field of the enclosing object
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            source: Some(source.into()),
        }
    }
}

/// How one input field maps to one output element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapElement {
    /// Output element name
    #[serde(default)]
    pub xml_node_name: String,

    /// Value type; omitted means object
    #[serde(rename = "type", alias = "valueType", default)]
    pub value_type: ValueType,

    /// Attribute specs; `None` when the schema omits the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeSpec>>,

    /// Child fields for object and array types; `None` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<MapBody>,

    /// Scalar encoding
    #[serde(
        rename = "nodeType",
        alias = "nodeEncoding",
        default,
        skip_serializing_if = "NodeEncoding::is_normal"
    )]
    pub node_encoding: NodeEncoding,
}

impl MapElement {
    /// Create an element with empty attributes and body
    pub fn new(xml_node_name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            xml_node_name: xml_node_name.into(),
            value_type,
            attributes: Some(Vec::new()),
            body: Some(MapBody::new()),
            node_encoding: NodeEncoding::Normal,
        }
    }

    /// Shorthand for a string element
    pub fn string(xml_node_name: impl Into<String>) -> Self {
        Self::new(xml_node_name, ValueType::String)
    }

    /// Shorthand for an object element
    pub fn object(xml_node_name: impl Into<String>) -> Self {
        Self::new(xml_node_name, ValueType::Object)
    }

    /// Shorthand for an array element
    pub fn array(xml_node_name: impl Into<String>) -> Self {
        Self::new(xml_node_name, ValueType::Array)
    }

    /// Add an attribute spec
    pub fn with_attribute(mut self, spec: AttributeSpec) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(spec);
        self
    }

    /// Add a child mapping for the input field `field`
    pub fn with_child(mut self, field: impl Into<String>, child: MapElement) -> Self {
        self.body
            .get_or_insert_with(MapBody::new)
            .insert(field.into(), child);
        self
    }

    /// Set the node encoding
    pub fn with_encoding(mut self, encoding: NodeEncoding) -> Self {
        self.node_encoding = encoding;
        self
    }

    /// Attribute specs, empty when omitted
    pub fn attribute_specs(&self) -> &[AttributeSpec] {
        self.attributes.as_deref().unwrap_or(&[])
    }

    /// Iterate child mappings in body order
    pub fn children(&self) -> impl Iterator<Item = (&String, &MapElement)> {
        self.body.iter().flat_map(|body| body.iter())
    }
}
