//! Property-based tests for traversal order, skipping and array expansion

use proptest::prelude::*;
use serde_json::{Map, Value};
use xmlmap::{JsonToXmlConverter, MapElement, MappingSchema};

const FIELDS: usize = 6;

fn flat_schema() -> MappingSchema {
    let mut root = MapElement::object("Doc");
    for i in 0..FIELDS {
        root = root.with_child(format!("f{}", i), MapElement::string(format!("F{}", i)));
    }
    MappingSchema::new(root)
}

/// Field values: `None` leaves the field out, `Some(None)` sets it to null.
fn field_values() -> impl Strategy<Value = Vec<Option<Option<String>>>> {
    prop::collection::vec(
        prop::option::of(prop::option::of("[a-z0-9]{1,8}")),
        FIELDS,
    )
}

proptest! {
    #[test]
    fn output_follows_schema_order(
        values in field_values(),
        key_order in Just((0..FIELDS).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut input = Map::new();
        for &i in &key_order {
            match &values[i] {
                None => {}
                Some(None) => {
                    input.insert(format!("f{}", i), Value::Null);
                }
                Some(Some(text)) => {
                    input.insert(format!("f{}", i), Value::String(text.clone()));
                }
            }
        }
        input.insert("unmapped".to_string(), Value::String("ignored".to_string()));

        let expected: String = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match v {
                Some(Some(text)) => Some(format!("<F{i}>{text}</F{i}>")),
                _ => None,
            })
            .collect();
        let expected = if expected.is_empty() {
            "<Doc/>".to_string()
        } else {
            format!("<Doc>{}</Doc>", expected)
        };

        let xml = JsonToXmlConverter::new(flat_schema())
            .convert(&Value::Object(input))
            .unwrap();
        prop_assert_eq!(xml, expected);
    }

    #[test]
    fn conversion_is_deterministic(values in field_values()) {
        let input: Map<String, Value> = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                v.as_ref().map(|v| {
                    let value = v.clone().map(Value::String).unwrap_or(Value::Null);
                    (format!("f{}", i), value)
                })
            })
            .collect();
        let input = Value::Object(input);

        let converter = JsonToXmlConverter::new(flat_schema());
        prop_assert_eq!(converter.convert(&input).unwrap(), converter.convert(&input).unwrap());
    }

    #[test]
    fn array_emits_one_element_per_item(items in prop::collection::vec("[a-z]{1,5}", 0..20)) {
        let schema = MappingSchema::new(
            MapElement::object("Doc").with_child(
                "items",
                MapElement::array("Item").with_child("v", MapElement::string("V")),
            ),
        );
        let input = serde_json::json!({
            "items": items.iter().map(|v| serde_json::json!({ "v": v })).collect::<Vec<_>>()
        });

        let xml = JsonToXmlConverter::new(schema).convert(&input).unwrap();
        prop_assert_eq!(xml.matches("<Item>").count(), items.len());

        let expected: String = items.iter().map(|v| format!("<Item><V>{v}</V></Item>")).collect();
        prop_assert!(xml.contains(&expected));
    }
}
