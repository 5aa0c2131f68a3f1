//! Limits for schema-driven conversion
//!
//! Bounds applied while loading a mapping schema and while walking an input
//! document, so that hostile or runaway inputs fail fast instead of exhausting
//! the stack or memory.

use crate::error::{Error, Result};

/// Conversion limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of emitted elements (root is depth 0)
    pub max_depth: usize,

    /// Maximum number of items in a single mapped array
    pub max_array_items: usize,

    /// Maximum mapping schema source size in bytes
    pub max_schema_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_array_items: 100_000,
            max_schema_size: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_depth: 32,
            max_array_items: 10_000,
            max_schema_size: 1024 * 1024, // 1 MB
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_depth: 4096,
            max_array_items: 10_000_000,
            max_schema_size: 256 * 1024 * 1024, // 256 MB
        }
    }

    /// Check if element depth is within limits
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(Error::LimitExceeded(format!(
                "element depth {} exceeds maximum {}",
                depth, self.max_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if an array length is within limits
    pub fn check_array_items(&self, element: &str, count: usize) -> Result<()> {
        if count > self.max_array_items {
            Err(Error::LimitExceeded(format!(
                "array '{}' has {} items, maximum is {}",
                element, count, self.max_array_items
            )))
        } else {
            Ok(())
        }
    }

    /// Check if a schema source size is within limits
    pub fn check_schema_size(&self, size: usize) -> Result<()> {
        if size > self.max_schema_size {
            Err(Error::LimitExceeded(format!(
                "mapping schema size {} bytes exceeds maximum {} bytes",
                size, self.max_schema_size
            )))
        } else {
            Ok(())
        }
    }
}
