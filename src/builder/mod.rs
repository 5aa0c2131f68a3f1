//! XML tree building
//!
//! The converter never writes XML itself. It talks to an [`XmlBuilder`],
//! which opens a document, and to the [`XmlDocument`] it returns, which
//! accepts child elements under opaque [`NodeId`] handles and finally
//! serializes the tree.
//!
//! [`TreeBuilder`] is the bundled implementation, backed by quick-xml.

mod tree;

pub use tree::{TreeBuilder, TreeDocument};

use crate::error::Result;
use crate::mapping::NodeEncoding;
use indexmap::IndexMap;

/// Resolved attributes, in declaration order
pub type AttributeMap = IndexMap<String, String>;

/// Attribute that receives the text of a `valueAsAttribute` element
pub const VALUE_ATTRIBUTE: &str = "v";

/// Opaque handle to an element of a document under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a handle from a builder-specific index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The builder-specific index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Name, attributes and encoding of one sibling produced by
/// [`XmlDocument::add_nodes_array`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTemplate {
    /// Element name
    pub name: String,
    /// Resolved attributes
    pub attributes: AttributeMap,
    /// Encoding declared for the array element
    pub encoding: NodeEncoding,
}

impl NodeTemplate {
    /// Create a template with normal encoding
    pub fn new(name: impl Into<String>, attributes: AttributeMap) -> Self {
        Self {
            name: name.into(),
            attributes,
            encoding: NodeEncoding::Normal,
        }
    }

    /// Set the encoding
    pub fn with_encoding(mut self, encoding: NodeEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Opens documents
pub trait XmlBuilder {
    /// Document type produced by this builder
    type Document: XmlDocument;

    /// Open a document whose root element has `name` and `attributes`
    fn begin_document(&self, name: &str, attributes: AttributeMap) -> Result<Self::Document>;
}

/// A document under construction
pub trait XmlDocument {
    /// Handle of the root element
    fn root(&self) -> NodeId;

    /// Append a child element under `parent`.
    ///
    /// With [`NodeEncoding::ValueAsAttribute`] the text is written to the
    /// [`VALUE_ATTRIBUTE`] attribute instead of element content, replacing
    /// any attribute of that name already present.
    fn add_node(
        &mut self,
        parent: NodeId,
        name: &str,
        attributes: AttributeMap,
        text: Option<&str>,
        encoding: &NodeEncoding,
    ) -> Result<NodeId>;

    /// Append one empty sibling per template under `parent`, returning the
    /// handles in template order. Each template's encoding is checked the
    /// same way [`add_node`](Self::add_node) checks it.
    fn add_nodes_array(&mut self, parent: NodeId, templates: Vec<NodeTemplate>) -> Result<Vec<NodeId>> {
        templates
            .into_iter()
            .map(|template| {
                self.add_node(
                    parent,
                    &template.name,
                    template.attributes,
                    None,
                    &template.encoding,
                )
            })
            .collect()
    }

    /// Close the document and serialize it
    fn end_document(self, pretty: bool) -> Result<String>
    where
        Self: Sized;
}
