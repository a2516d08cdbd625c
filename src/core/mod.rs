//! XMP Core module
//!
//! This module contains the namespace model: prefix derivation, validated
//! namespace stores, the built-in schema declarations and the document-level
//! lookup table.

pub mod error;
pub mod namespace;
pub mod prefix;
pub mod schemas;
pub mod xmp;

pub use error::{XmpError, XmpResult};
pub use namespace::{Namespace, PropertyMap, Schema};
pub use prefix::{derive_prefix, short_type_name};
pub use xmp::Xmp;
