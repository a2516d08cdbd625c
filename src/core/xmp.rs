//! Document-level XMP object
//!
//! `Xmp` is a lookup table over the default XMP namespaces. Each namespace
//! name maps to an ordered sequence of values, empty until filled in.

use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::Schema;
use crate::core::schemas::{
    DcNamespace, ExifEXNamespace, ExifNamespace, StRefNamespace, TiffNamespace, XmpMMNamespace,
    XmpNamespace, XmpRightsNamespace, XmpidqNamespace,
};
use crate::types::uri::Uri;
use crate::types::value::XmpValue;
use crate::utils::two_way_map::TwoWayMap;
use std::collections::HashMap;

/// Names of the namespaces every `Xmp` object knows about, in order
pub const DEFAULT_NAMESPACES: [&str; 9] = [
    "stRef", "dc", "xmp", "xmpRights", "xmpMM", "xmpidq", "exifEX", "exif", "tiff",
];

fn schema_uri<S: Schema>() -> &'static str {
    S::URI.unwrap_or_default()
}

fn default_uris() -> [&'static str; 9] {
    [
        schema_uri::<StRefNamespace>(),
        schema_uri::<DcNamespace>(),
        schema_uri::<XmpNamespace>(),
        schema_uri::<XmpRightsNamespace>(),
        schema_uri::<XmpMMNamespace>(),
        schema_uri::<XmpidqNamespace>(),
        schema_uri::<ExifEXNamespace>(),
        schema_uri::<ExifNamespace>(),
        schema_uri::<TiffNamespace>(),
    ]
}

fn default_uri_map() -> XmpResult<TwoWayMap<&'static str, Uri>> {
    TwoWayMap::from_pairs(
        DEFAULT_NAMESPACES
            .into_iter()
            .zip(default_uris().map(Uri::new)),
    )
}

/// XMP metadata document over the default namespaces
#[derive(Debug, Clone, PartialEq)]
pub struct Xmp {
    uris: TwoWayMap<&'static str, Uri>,
    values: HashMap<&'static str, Vec<XmpValue>>,
}

impl Xmp {
    /// Create an XMP object with every default namespace empty
    pub fn new() -> Self {
        let uris = default_uri_map().expect("built-in namespace URIs must be distinct");
        let values = DEFAULT_NAMESPACES
            .into_iter()
            .map(|name| (name, Vec::new()))
            .collect();

        Self { uris, values }
    }

    /// Names of the default namespaces
    pub fn default_names() -> &'static [&'static str] {
        &DEFAULT_NAMESPACES
    }

    /// Values of a namespace
    ///
    /// # Errors
    ///
    /// Returns `XmpError::AttributeNotFound` if `name` is not a default
    /// namespace.
    pub fn namespace(&self, name: &str) -> XmpResult<&[XmpValue]> {
        self.get(name).ok_or_else(|| Self::not_found(name))
    }

    /// Mutable values of a namespace
    ///
    /// # Errors
    ///
    /// Returns `XmpError::AttributeNotFound` if `name` is not a default
    /// namespace.
    pub fn namespace_mut(&mut self, name: &str) -> XmpResult<&mut Vec<XmpValue>> {
        self.values
            .get_mut(name)
            .ok_or_else(|| Self::not_found(name))
    }

    /// Values of a namespace, or `None` for an unknown name
    pub fn get(&self, name: &str) -> Option<&[XmpValue]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// URI of a default namespace
    ///
    /// # Errors
    ///
    /// Returns `XmpError::AttributeNotFound` if `name` is not a default
    /// namespace.
    pub fn uri(&self, name: &str) -> XmpResult<&Uri> {
        self.uris.get(name).ok_or_else(|| Self::not_found(name))
    }

    /// Default namespace name for a URI
    pub fn name_for_uri(&self, uri: &str) -> Option<&'static str> {
        self.uris.get_key(uri).copied()
    }

    /// Number of namespaces holding at least one value
    pub fn len(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Check if every namespace is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the namespaces holding values, in default order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        DEFAULT_NAMESPACES
            .into_iter()
            .filter(|name| self.values.get(name).is_some_and(|v| !v.is_empty()))
    }

    fn not_found(name: &str) -> XmpError {
        XmpError::AttributeNotFound {
            type_name: std::any::type_name::<Self>().to_string(),
            name: name.to_string(),
        }
    }
}

impl Default for Xmp {
    fn default() -> Self {
        Self::new()
    }
}
