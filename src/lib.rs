//! # xmpns
//!
//! Typed, validated XMP metadata namespaces.
//!
//! An XMP document is made of namespaces (`dc`, `exif`, `xmpRights`, ...),
//! each one a set of key/value properties. This crate models a namespace as
//! a mutable store whose validity is judged against a static declaration:
//! the namespace URI, the expected kind of every key, and the keys that
//! must be present.
//!
//! ```rust
//! use xmpns::{Namespace, Schema, ValueType};
//!
//! struct LangNamespace;
//!
//! impl Schema for LangNamespace {
//!     const URI: Option<&'static str> = Some("http://example.com/lang/");
//!     const TYPES: &'static [(&'static str, ValueType)] = &[("lang", ValueType::Text)];
//!     const REQUIRED: &'static [&'static str] = &["lang"];
//! }
//!
//! let mut ns = Namespace::<LangNamespace>::new().unwrap();
//! assert!(!ns.is_valid());
//!
//! ns.set("lang", "en");
//! assert!(ns.is_valid());
//! assert_eq!(ns.prefix(), "lang");
//! ```

pub mod core;
pub mod types;
pub mod utils;

pub use crate::core::error::{XmpError, XmpResult};
pub use crate::core::namespace::{Namespace, PropertyMap, Schema};
pub use crate::core::prefix::{derive_prefix, short_type_name};
pub use crate::core::schemas::{
    ns, DcNamespace, ExifEXNamespace, ExifNamespace, StRefNamespace, TiffNamespace,
    XmpMMNamespace, XmpNamespace, XmpRightsNamespace, XmpidqNamespace,
};
pub use crate::core::xmp::{Xmp, DEFAULT_NAMESPACES};
pub use crate::types::{Uri, ValueType, XmpValue};
pub use crate::utils::two_way_map::TwoWayMap;
