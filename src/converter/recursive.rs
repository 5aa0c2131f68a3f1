//! Recursive schema-driven conversion
//!
//! The converter walks the mapping schema and the input document together.
//! Body entries are visited in schema order, so output order never depends
//! on the key order of the input. Fields the schema names but the input
//! lacks (or sets to null) are skipped; fields the schema does not name are
//! ignored.

use super::attributes::resolve_attributes;
use super::config::ConverterConfig;
use crate::builder::{NodeId, NodeTemplate, XmlBuilder, XmlDocument};
use crate::coercers::{entsoe_boolean, iso_date};
use crate::error::{Error, Result};
use crate::mapping::{MapElement, MappingSchema, ValueType};
use crate::value::{kind_name, scalar_text};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tracing::{debug, trace};

/// Drives an [`XmlBuilder`] from a [`MappingSchema`]
#[derive(Debug, Clone)]
pub struct RecursiveConverter<B> {
    builder: B,
    schema: Arc<MappingSchema>,
    config: ConverterConfig,
}

impl<B: XmlBuilder> RecursiveConverter<B> {
    /// Create a converter with the default configuration
    pub fn new(builder: B, schema: impl Into<Arc<MappingSchema>>) -> Self {
        Self {
            builder,
            schema: schema.into(),
            config: ConverterConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// The mapping schema
    pub fn schema(&self) -> &MappingSchema {
        &self.schema
    }

    /// Convert `document` to XML text.
    ///
    /// The schema is validated first; any error aborts the conversion and no
    /// partial output is returned.
    pub fn convert(&self, document: &JsonValue) -> Result<String> {
        let root = self.schema.validate()?;
        let scope = expect_object(&root.xml_node_name, document)?;

        debug!(root = %root.xml_node_name, "converting document");

        let attributes = resolve_attributes(root.attribute_specs(), scope)?;
        let mut xml = self.builder.begin_document(&root.xml_node_name, attributes)?;
        let root_node = xml.root();
        self.convert_body(&mut xml, root_node, scope, root, 1)?;

        let output = xml.end_document(self.config.pretty())?;
        debug!(root = %root.xml_node_name, bytes = output.len(), "document converted");
        Ok(output)
    }

    fn convert_body(
        &self,
        xml: &mut B::Document,
        parent: NodeId,
        scope: &Map<String, JsonValue>,
        element: &MapElement,
        depth: usize,
    ) -> Result<()> {
        self.config.limits().check_depth(depth)?;

        for (field, child) in element.children() {
            let value = match scope.get(field) {
                None | Some(JsonValue::Null) => {
                    trace!(field = %field, "field absent, skipping");
                    continue;
                }
                Some(value) => value,
            };

            self.convert_field(xml, parent, scope, child, value, depth)?;
        }

        Ok(())
    }

    fn convert_field(
        &self,
        xml: &mut B::Document,
        parent: NodeId,
        scope: &Map<String, JsonValue>,
        element: &MapElement,
        value: &JsonValue,
        depth: usize,
    ) -> Result<()> {
        let name = element.xml_node_name.as_str();
        trace!(element = %name, value_type = %element.value_type.as_tag(), "emitting element");

        match &element.value_type {
            ValueType::String => {
                let text = scalar_text(value).ok_or_else(|| unexpected(name, "a scalar value", value))?;
                self.add_text_node(xml, parent, scope, element, &text)
            }
            ValueType::IsoDate => {
                let text = iso_date(name, value).map_err(|e| e.with_element(name))?;
                self.add_text_node(xml, parent, scope, element, &text)
            }
            ValueType::EntsoeBoolean => {
                let text = entsoe_boolean(value).map_err(|e| e.with_element(name))?;
                self.add_text_node(xml, parent, scope, element, text)
            }
            ValueType::Object => {
                let child_scope = expect_object(name, value)?;
                let attributes = resolve_attributes(element.attribute_specs(), scope)?;
                let node = xml.add_node(parent, name, attributes, None, &element.node_encoding)?;
                self.convert_body(xml, node, child_scope, element, depth + 1)
            }
            ValueType::Array => {
                let items = value
                    .as_array()
                    .ok_or_else(|| unexpected(name, "an array", value))?;
                self.config.limits().check_array_items(name, items.len())?;

                // Attributes come from the scope holding the array, so every
                // item gets the same values.
                let templates = items
                    .iter()
                    .map(|_| {
                        resolve_attributes(element.attribute_specs(), scope)
                            .map(|attributes| {
                                NodeTemplate::new(name, attributes)
                                    .with_encoding(element.node_encoding.clone())
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let nodes = xml.add_nodes_array(parent, templates)?;

                for (node, item) in nodes.into_iter().zip(items) {
                    match item {
                        JsonValue::Null => {}
                        JsonValue::Object(item_scope) => {
                            self.convert_body(xml, node, item_scope, element, depth + 1)?
                        }
                        other => return Err(unexpected(name, "an object item", other)),
                    }
                }
                Ok(())
            }
            ValueType::Unsupported(tag) => Err(Error::TypeNotSupported(tag.clone())),
        }
    }

    fn add_text_node(
        &self,
        xml: &mut B::Document,
        parent: NodeId,
        scope: &Map<String, JsonValue>,
        element: &MapElement,
        text: &str,
    ) -> Result<()> {
        let attributes = resolve_attributes(element.attribute_specs(), scope)?;
        xml.add_node(
            parent,
            &element.xml_node_name,
            attributes,
            Some(text),
            &element.node_encoding,
        )?;
        Ok(())
    }
}

fn expect_object<'a>(element: &str, value: &'a JsonValue) -> Result<&'a Map<String, JsonValue>> {
    value
        .as_object()
        .ok_or_else(|| unexpected(element, "an object", value))
}

fn unexpected(element: &str, expected: &'static str, found: &JsonValue) -> Error {
    Error::UnexpectedValue {
        element: element.to_string(),
        expected,
        found: kind_name(found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use crate::limits::Limits;
    use crate::mapping::{AttributeSpec, NodeEncoding};
    use serde_json::json;

    fn converter(body: MapElement) -> RecursiveConverter<TreeBuilder> {
        RecursiveConverter::new(TreeBuilder::new(), MappingSchema::new(body))
    }

    #[test]
    fn test_empty_body() {
        let xml = converter(MapElement::object("rootNode"))
            .convert(&json!({}))
            .unwrap();
        assert_eq!(xml, "<rootNode/>");
    }

    #[test]
    fn test_string_field() {
        let root = MapElement::object("Doc").with_child("name", MapElement::string("Name"));
        let xml = converter(root).convert(&json!({ "name": "Alice" })).unwrap();
        assert_eq!(xml, "<Doc><Name>Alice</Name></Doc>");
    }

    #[test]
    fn test_string_field_numbers_and_booleans() {
        let root = MapElement::object("Doc")
            .with_child("n", MapElement::string("N"))
            .with_child("b", MapElement::string("B"));
        let xml = converter(root).convert(&json!({ "n": 12.5, "b": true })).unwrap();
        assert_eq!(xml, "<Doc><N>12.5</N><B>true</B></Doc>");
    }

    #[test]
    fn test_iso_date_field() {
        let root = MapElement::object("Doc")
            .with_child("created", MapElement::new("createdDateTime", ValueType::IsoDate))
            .with_child("start", MapElement::new("start", ValueType::IsoDate));
        let xml = converter(root)
            .convert(&json!({ "created": 1_700_000_000_123i64, "start": 1_700_000_000_123i64 }))
            .unwrap();
        assert_eq!(
            xml,
            "<Doc><createdDateTime>2023-11-14T22:13:20Z</createdDateTime>\
             <start>2023-11-14T22:13Z</start></Doc>"
        );
    }

    #[test]
    fn test_entsoe_boolean_field() {
        let root = MapElement::object("Doc")
            .with_child("curtailed", MapElement::new("curtailment", ValueType::EntsoeBoolean));
        let xml = converter(root).convert(&json!({ "curtailed": false })).unwrap();
        assert_eq!(xml, "<Doc><curtailment>A02</curtailment></Doc>");
    }

    #[test]
    fn test_coercion_error_names_element() {
        let root = MapElement::object("Doc")
            .with_child("flag", MapElement::new("flagNode", ValueType::EntsoeBoolean));
        let err = converter(root).convert(&json!({ "flag": "maybe" })).unwrap_err();
        match err {
            Error::Coercion(e) => assert_eq!(e.element.as_deref(), Some("flagNode")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_object_field() {
        let root = MapElement::object("rootNode").with_child(
            "objectProperty",
            MapElement::object("objectNode")
                .with_child("first", MapElement::string("stringNode"))
                .with_child("second", MapElement::string("stringNode")),
        );
        let xml = converter(root)
            .convert(&json!({ "objectProperty": { "first": "value1", "second": "value2" } }))
            .unwrap();
        assert_eq!(
            xml,
            "<rootNode><objectNode><stringNode>value1</stringNode>\
             <stringNode>value2</stringNode></objectNode></rootNode>"
        );
    }

    #[test]
    fn test_array_field() {
        let root = MapElement::object("Doc").with_child(
            "items",
            MapElement::array("Item").with_child("v", MapElement::string("V")),
        );
        let xml = converter(root)
            .convert(&json!({ "items": [{ "v": "a" }, { "v": "b" }] }))
            .unwrap();
        assert_eq!(xml, "<Doc><Item><V>a</V></Item><Item><V>b</V></Item></Doc>");
    }

    #[test]
    fn test_empty_array_and_null_item() {
        let root = MapElement::object("Doc")
            .with_child(
                "none",
                MapElement::array("Nothing").with_child("v", MapElement::string("V")),
            )
            .with_child(
                "items",
                MapElement::array("Item").with_child("v", MapElement::string("V")),
            );
        let xml = converter(root)
            .convert(&json!({ "none": [], "items": [null, { "v": "b" }] }))
            .unwrap();
        assert_eq!(xml, "<Doc><Item/><Item><V>b</V></Item></Doc>");
    }

    #[test]
    fn test_array_attributes_use_parent_scope() {
        let root = MapElement::object("Doc").with_child(
            "points",
            MapElement::array("Point")
                .with_attribute(AttributeSpec::from_source("unit", "unitCode"))
                .with_child("q", MapElement::string("quantity")),
        );
        let xml = converter(root)
            .convert(&json!({
                "unitCode": "MAW",
                "points": [{ "q": "1", "unitCode": "ignored" }, { "q": "2" }]
            }))
            .unwrap();
        assert_eq!(
            xml,
            r#"<Doc><Point unit="MAW"><quantity>1</quantity></Point><Point unit="MAW"><quantity>2</quantity></Point></Doc>"#
        );
    }

    #[test]
    fn test_attributes_resolve_against_containing_object() {
        let root = MapElement::object("Doc")
            .with_attribute(AttributeSpec::from_source("id", "docId"))
            .with_child(
                "sender",
                MapElement::object("Sender").with_child(
                    "mrid",
                    MapElement::string("mRID")
                        .with_attribute(AttributeSpec::from_source("codingScheme", "scheme")),
                ),
            );
        let xml = converter(root)
            .convert(&json!({
                "docId": "D1",
                "scheme": "wrong-level",
                "sender": { "mrid": "10X", "scheme": "A01" }
            }))
            .unwrap();
        assert_eq!(
            xml,
            r#"<Doc id="D1"><Sender><mRID codingScheme="A01">10X</mRID></Sender></Doc>"#
        );
    }

    #[test]
    fn test_value_as_attribute_encoding() {
        let root = MapElement::object("Doc").with_child(
            "quantity",
            MapElement::string("quantity").with_encoding(NodeEncoding::ValueAsAttribute),
        );
        let xml = converter(root).convert(&json!({ "quantity": 42 })).unwrap();
        assert_eq!(xml, r#"<Doc><quantity v="42"/></Doc>"#);
    }

    #[test]
    fn test_unsupported_type() {
        let root = MapElement::object("Doc").with_child(
            "stringTypeProperty",
            MapElement::new("stringNode", ValueType::Unsupported("list".into())),
        );
        let err = converter(root)
            .convert(&json!({ "stringTypeProperty": "value" }))
            .unwrap_err();
        assert!(matches!(err, Error::TypeNotSupported(ref t) if t == "list"));
    }

    #[test]
    fn test_unsupported_type_skipped_when_field_absent() {
        let root = MapElement::object("Doc").with_child(
            "other",
            MapElement::new("x", ValueType::Unsupported("list".into())),
        );
        assert_eq!(converter(root).convert(&json!({})).unwrap(), "<Doc/>");
    }

    #[test]
    fn test_incomplete_schema() {
        let converter = RecursiveConverter::new(TreeBuilder::new(), MappingSchema::default());
        assert!(matches!(
            converter.convert(&json!({ "a": 1 })),
            Err(Error::IncompleteSchema)
        ));
    }

    #[test]
    fn test_wrong_input_shapes() {
        let root = MapElement::object("Doc")
            .with_child("s", MapElement::string("S"))
            .with_child("o", MapElement::object("O"))
            .with_child("a", MapElement::array("A"));
        let converter = converter(root);

        for input in [
            json!({ "s": { "x": 1 } }),
            json!({ "o": "text" }),
            json!({ "a": { "x": 1 } }),
            json!({ "a": ["scalar"] }),
        ] {
            assert!(matches!(
                converter.convert(&input),
                Err(Error::UnexpectedValue { .. })
            ));
        }

        assert!(matches!(
            converter.convert(&json!(["not", "an", "object"])),
            Err(Error::UnexpectedValue { ref element, .. }) if element == "Doc"
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut element = MapElement::string("leaf");
        for level in 0..5 {
            element = MapElement::object(format!("L{}", level)).with_child("c", element);
        }
        let root = MapElement::object("Doc").with_child("c", element);
        let input = json!({ "c": { "c": { "c": { "c": { "c": { "c": "x" } } } } } });

        let limits = Limits {
            max_depth: 3,
            ..Limits::default()
        };
        let limited = converter(root.clone())
            .with_config(ConverterConfig::new().with_limits(limits));
        assert!(matches!(limited.convert(&input), Err(Error::LimitExceeded(_))));

        assert!(converter(root).convert(&input).is_ok());
    }

    #[test]
    fn test_array_limit() {
        let root = MapElement::object("Doc").with_child("items", MapElement::array("Item"));
        let limits = Limits {
            max_array_items: 2,
            ..Limits::default()
        };
        let converter = converter(root).with_config(ConverterConfig::new().with_limits(limits));

        assert!(converter.convert(&json!({ "items": [{}, {}] })).is_ok());
        assert!(matches!(
            converter.convert(&json!({ "items": [{}, {}, {}] })),
            Err(Error::LimitExceeded(_))
        ));
    }
}
