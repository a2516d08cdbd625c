//! XMP value types
//!
//! This module defines the value types stored in XMP namespaces.

pub mod uri;
pub mod value;

pub use uri::Uri;
pub use value::{ValueType, XmpValue};
