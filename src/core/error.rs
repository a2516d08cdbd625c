//! Error types for XMP operations
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Error types for XMP operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmpError {
    /// A namespace schema declares no URI and cannot be instantiated
    #[error("Namespace {0} declares no URI")]
    NoUri(String),

    /// Key is not present in the store
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    /// Name is not one of the namespaces an `Xmp` object knows about
    #[error("{type_name:?} object has no attribute {name:?}")]
    AttributeNotFound {
        /// Fully-qualified name of the type that was queried
        type_name: String,
        /// The requested name
        name: String,
    },

    /// Bad value provided (e.g., a value that cannot be coerced)
    #[error("Bad value: {0}")]
    BadValue(String),

    /// Stored key is not declared by the namespace schema
    #[error("Key {key:?} is not declared by namespace {namespace}")]
    UndeclaredKey {
        /// Schema type name
        namespace: String,
        /// Offending key
        key: String,
    },

    /// A required key is absent from the store
    #[error("Namespace {namespace} is missing required key {key:?}")]
    MissingRequired {
        /// Schema type name
        namespace: String,
        /// Missing key
        key: String,
    },

    /// Value is already mapped to a different key
    #[error("Value already in mapping: {0}")]
    DuplicateValue(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;
