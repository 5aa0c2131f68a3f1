//! Arena-backed XML tree serialized with quick-xml

use super::{AttributeMap, NodeId, XmlBuilder, XmlDocument, VALUE_ATTRIBUTE};
use crate::error::{Error, Result};
use crate::mapping::NodeEncoding;
use crate::names::{validate_attribute_name, validate_element_name};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

/// Builder producing [`TreeDocument`]s
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Spaces per level when pretty printing
    indent: usize,
    /// Whether to emit `<?xml version="1.0" encoding="UTF-8"?>`
    xml_declaration: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: false,
        }
    }
}

impl TreeBuilder {
    /// Create a builder with two-space indentation and no declaration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation used by pretty output
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether to emit an XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }
}

impl XmlBuilder for TreeBuilder {
    type Document = TreeDocument;

    fn begin_document(&self, name: &str, attributes: AttributeMap) -> Result<TreeDocument> {
        validate_element_name(name)?;
        validate_attributes(&attributes)?;

        Ok(TreeDocument {
            nodes: vec![XmlNode::new(name, attributes)],
            indent: self.indent,
            xml_declaration: self.xml_declaration,
        })
    }
}

#[derive(Debug, Clone)]
struct XmlNode {
    name: String,
    attributes: AttributeMap,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl XmlNode {
    fn new(name: &str, attributes: AttributeMap) -> Self {
        Self {
            name: name.to_string(),
            attributes,
            text: None,
            children: Vec::new(),
        }
    }
}

/// Document whose elements live in a flat arena indexed by [`NodeId`]
#[derive(Debug, Clone)]
pub struct TreeDocument {
    nodes: Vec<XmlNode>,
    indent: usize,
    xml_declaration: bool,
}

impl TreeDocument {
    fn write_node<W: Write>(&self, writer: &mut Writer<W>, id: NodeId) -> Result<()> {
        let node = &self.nodes[id.index()];

        let mut start = BytesStart::new(node.name.as_str());
        for (key, value) in &node.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if node.text.is_none() && node.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        if let Some(text) = &node.text {
            write_event(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            self.write_node(writer, *child)?;
        }
        write_event(writer, Event::End(BytesEnd::new(node.name.as_str())))
    }
}

impl XmlDocument for TreeDocument {
    fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    fn add_node(
        &mut self,
        parent: NodeId,
        name: &str,
        mut attributes: AttributeMap,
        text: Option<&str>,
        encoding: &NodeEncoding,
    ) -> Result<NodeId> {
        if parent.index() >= self.nodes.len() {
            return Err(Error::Xml(format!("unknown parent node {}", parent.index())));
        }
        validate_element_name(name)?;
        validate_attributes(&attributes)?;

        let text = match encoding {
            NodeEncoding::Normal => text.map(str::to_string),
            NodeEncoding::ValueAsAttribute => {
                if let Some(text) = text {
                    // Overwrites a declared `v` attribute, keeping its position.
                    attributes.insert(VALUE_ATTRIBUTE.to_string(), text.to_string());
                }
                None
            }
            NodeEncoding::Unsupported(tag) => {
                return Err(Error::NodeEncodingNotSupported {
                    encoding: tag.clone(),
                    element: name.to_string(),
                })
            }
        };

        let id = NodeId::new(self.nodes.len());
        let mut node = XmlNode::new(name, attributes);
        node.text = text;
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn end_document(self, pretty: bool) -> Result<String> {
        let buffer = Cursor::new(Vec::new());
        let mut writer = if pretty {
            Writer::new_with_indent(buffer, b' ', self.indent)
        } else {
            Writer::new(buffer)
        };

        if self.xml_declaration {
            write_event(
                &mut writer,
                Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
            )?;
        }
        self.write_node(&mut writer, self.root())?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| Error::Xml(format!("serialized document is not UTF-8: {}", e)))
    }
}

fn validate_attributes(attributes: &AttributeMap) -> Result<()> {
    attributes
        .keys()
        .try_for_each(|name| validate_attribute_name(name))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(format!("XML write error: {}", e)))
}
