//! Error types for xmlmap
//!
//! Every failure aborts the current conversion. The variants distinguish
//! problems in the mapping schema from problems in the input document.

use std::fmt;
use thiserror::Error;

/// Result type alias using xmlmap Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xmlmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// The mapping schema root lacks a node name, attributes or body
    #[error("the mapping schema is not complete: root needs xmlNodeName, attributes and body")]
    IncompleteSchema,

    /// An attribute spec resolved to no usable value
    #[error("attribute {0} needs to have either value or source defined")]
    InvalidAttribute(String),

    /// The schema declares a value type outside the supported set
    #[error("type {0} is not supported")]
    TypeNotSupported(String),

    /// The schema declares a node encoding outside the supported set
    #[error("node encoding '{encoding}' for element '{element}' is not supported")]
    NodeEncodingNotSupported {
        /// The unsupported encoding tag
        encoding: String,
        /// Element that declared it
        element: String,
    },

    /// A domain coercer rejected its input
    #[error("coercion error: {0}")]
    Coercion(#[from] CoercionError),

    /// The input document has the wrong shape for the mapped element
    #[error("element '{element}' expects {expected}, found {found}")]
    UnexpectedValue {
        /// Output element name
        element: String,
        /// What the schema requires
        expected: &'static str,
        /// What the input contained
        found: &'static str,
    },

    /// Invalid XML element or attribute name
    #[error("name error: {0}")]
    Name(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// XML writer error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error points at the mapping schema rather than the input
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::IncompleteSchema
                | Error::TypeNotSupported(_)
                | Error::NodeEncodingNotSupported { .. }
                | Error::Name(_)
        )
    }
}

/// A coercer could not turn a raw input value into XML text
#[derive(Debug, Clone)]
pub struct CoercionError {
    /// Error message
    pub message: String,
    /// The offending input value, rendered as JSON
    pub value: Option<String>,
    /// Element being produced when coercion failed
    pub element: Option<String>,
}

impl CoercionError {
    /// Create a new coercion error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
            element: None,
        }
    }

    /// Set the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the element name
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref element) = self.element {
            write!(f, "\n\nElement: {}", element)?;
        }

        if let Some(ref value) = self.value {
            write!(f, "\n\nValue: {}", value)?;
        }

        Ok(())
    }
}

impl std::error::Error for CoercionError {}
