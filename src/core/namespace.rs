//! Validated XMP namespaces
//!
//! A namespace is a key/value store whose contents are judged against a
//! static [`Schema`]: the namespace URI, the declared kind of every key, and
//! the keys that must be present.
//!
//! Writes are never checked. A namespace is usually filled in field by field
//! from some source and may be incomplete along the way; [`Namespace::is_valid`]
//! is asked once the caller considers it finished.

use crate::core::error::{XmpError, XmpResult};
use crate::core::prefix::{derive_prefix, short_type_name};
use crate::types::value::{ValueType, XmpValue};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Static declaration of a namespace kind
///
/// Implemented on a marker type; the type's name also determines the
/// namespace prefix (see [`derive_prefix`]).
///
/// ```rust
/// use xmpns::{Schema, ValueType};
///
/// struct PhotoNamespace;
///
/// impl Schema for PhotoNamespace {
///     const URI: Option<&'static str> = Some("http://example.com/photo/");
///     const TYPES: &'static [(&'static str, ValueType)] = &[
///         ("width", ValueType::Integer),
///         ("caption", ValueType::Text),
///     ];
///     const REQUIRED: &'static [&'static str] = &["width"];
/// }
/// ```
pub trait Schema: 'static {
    /// Namespace URI. A schema without one cannot be instantiated.
    const URI: Option<&'static str> = None;

    /// Declared keys and their kinds. Keys not listed here are not permitted.
    const TYPES: &'static [(&'static str, ValueType)] = &[];

    /// Keys that must be present for the namespace to be valid
    const REQUIRED: &'static [&'static str] = &[];

    /// Name of the declaring type, used for the prefix and diagnostics
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Declared kind of a key, if the key is declared
    fn declared_type(key: &str) -> Option<ValueType> {
        Self::TYPES
            .iter()
            .find(|(declared, _)| *declared == key)
            .map(|(_, value_type)| *value_type)
    }
}

/// Mapping access to a namespace store
///
/// Object-safe so that namespaces of different schemas can be filled in
/// through the same code path.
pub trait PropertyMap {
    /// Number of stored keys
    fn len(&self) -> usize;

    /// Check if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a key is stored
    fn contains(&self, key: &str) -> bool;

    /// Get a stored value
    fn get(&self, key: &str) -> XmpResult<&XmpValue>;

    /// Store a value, returning the one it replaced
    fn set(&mut self, key: String, value: XmpValue) -> Option<XmpValue>;

    /// Remove a stored value
    fn delete(&mut self, key: &str) -> XmpResult<XmpValue>;

    /// Iterate over stored keys
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// A namespace instance: a store checked against the schema `S`
///
/// The store is owned by the instance and starts empty; nothing is allocated
/// until the first insert. Mutation needs `&mut self`, so sharing one
/// namespace between threads that write to it requires external
/// synchronization such as a `Mutex`.
pub struct Namespace<S: Schema> {
    store: HashMap<String, XmpValue>,
    schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Namespace<S> {
    /// Create an empty namespace
    ///
    /// # Errors
    ///
    /// Returns `XmpError::NoUri` if the schema declares no URI.
    pub fn new() -> XmpResult<Self> {
        if S::URI.is_none() {
            return Err(XmpError::NoUri(S::type_name().to_string()));
        }

        Ok(Self {
            store: HashMap::new(),
            schema: PhantomData,
        })
    }

    /// Namespace URI
    pub fn uri(&self) -> &'static str {
        // new() refuses schemas without a URI
        S::URI.unwrap_or_default()
    }

    /// Prefix derived from the schema type name
    pub fn prefix(&self) -> String {
        derive_prefix(S::type_name())
    }

    /// Name of the schema type
    pub fn type_name(&self) -> &'static str {
        S::type_name()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check if a key is stored
    pub fn contains(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Get the stored value for a key, exactly as it was set
    ///
    /// # Errors
    ///
    /// Returns `XmpError::KeyNotFound` if the key is not stored.
    pub fn get(&self, key: &str) -> XmpResult<&XmpValue> {
        self.store
            .get(key)
            .ok_or_else(|| XmpError::KeyNotFound(key.to_string()))
    }

    /// Store a value, returning the one it replaced
    ///
    /// Any key and any value are accepted; see [`Namespace::is_valid`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<XmpValue>) -> Option<XmpValue> {
        self.store.insert(key.into(), value.into())
    }

    /// Remove a key, returning its value
    ///
    /// # Errors
    ///
    /// Returns `XmpError::KeyNotFound` if the key is not stored.
    pub fn delete(&mut self, key: &str) -> XmpResult<XmpValue> {
        self.store
            .remove(key)
            .ok_or_else(|| XmpError::KeyNotFound(key.to_string()))
    }

    /// Iterate over stored keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.keys().map(String::as_str)
    }

    /// Iterate over stored key/value pairs, in no particular order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.store.iter(),
        }
    }

    /// Check the store against the schema
    ///
    /// Every stored key must be declared, with a value of the declared kind
    /// or one that coerces to it, and every required key must be stored.
    /// Conversion failures count as invalid; this never errors.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the store against the schema, reporting the first failure
    ///
    /// # Errors
    ///
    /// - `XmpError::UndeclaredKey` for a stored key the schema does not declare
    /// - `XmpError::BadValue` for a value that does not coerce to its kind
    /// - `XmpError::MissingRequired` for an absent required key
    pub fn validate(&self) -> XmpResult<()> {
        for (key, value) in &self.store {
            let declared = S::declared_type(key).ok_or_else(|| XmpError::UndeclaredKey {
                namespace: S::type_name().to_string(),
                key: key.clone(),
            })?;

            if ValueType::of(value) != declared {
                declared.coerce(value).map_err(|err| match err {
                    XmpError::BadValue(msg) => XmpError::BadValue(format!("{}: {}", key, msg)),
                    other => other,
                })?;
            }
        }

        match S::REQUIRED.iter().find(|key| !self.store.contains_key(**key)) {
            Some(missing) => Err(XmpError::MissingRequired {
                namespace: S::type_name().to_string(),
                key: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Serialize the store as a JSON object
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> XmpResult<String> {
        serde_json::to_string(self).map_err(|e| XmpError::SerializationError(e.to_string()))
    }
}

impl<S: Schema> PropertyMap for Namespace<S> {
    fn len(&self) -> usize {
        self.store.len()
    }

    fn contains(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    fn get(&self, key: &str) -> XmpResult<&XmpValue> {
        Namespace::get(self, key)
    }

    fn set(&mut self, key: String, value: XmpValue) -> Option<XmpValue> {
        self.store.insert(key, value)
    }

    fn delete(&mut self, key: &str) -> XmpResult<XmpValue> {
        Namespace::delete(self, key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(Namespace::keys(self))
    }
}

/// Iterator over the key/value pairs of a namespace
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, XmpValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a XmpValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Schema> IntoIterator for &'a Namespace<S> {
    type Item = (&'a str, &'a XmpValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Schema, K: Into<String>, V: Into<XmpValue>> Extend<(K, V)> for Namespace<S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<S: Schema> Clone for Namespace<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            schema: PhantomData,
        }
    }
}

impl<S: Schema> PartialEq for Namespace<S> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<S: Schema> fmt::Debug for Namespace<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("schema", &S::type_name())
            .field("store", &self.store)
            .finish()
    }
}

/// Renders as `<TypeName {"key": value, ...}>`, keys sorted
impl<S: Schema> fmt::Display for Namespace<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.store.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "<{} {{", S::type_name())?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: ", key)?;
            match value {
                XmpValue::String(s) => write!(f, "{:?}", s)?,
                XmpValue::Uri(u) => write!(f, "<URI {}>", u)?,
                other => write!(f, "{}", other)?,
            }
        }
        f.write_str("}>")
    }
}

#[cfg(feature = "serde")]
impl<S: Schema> serde::ser::Serialize for Namespace<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut entries: Vec<_> = self.store.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LangNamespace;

    impl Schema for LangNamespace {
        const URI: Option<&'static str> = Some("http://example.com/lang/");
        const TYPES: &'static [(&'static str, ValueType)] = &[("lang", ValueType::Text)];
        const REQUIRED: &'static [&'static str] = &["lang"];
    }

    struct CountNamespace;

    impl Schema for CountNamespace {
        const URI: Option<&'static str> = Some("http://example.com/count/");
        const TYPES: &'static [(&'static str, ValueType)] = &[
            ("count", ValueType::Integer),
            ("label", ValueType::Text),
        ];
    }

    struct Namespace;

    impl Schema for Namespace {
        const URI: Option<&'static str> = Some("http://example.com/");
    }

    struct UnboundNamespace;

    impl Schema for UnboundNamespace {}

    type Lang = super::Namespace<LangNamespace>;
    type Count = super::Namespace<CountNamespace>;

    #[test]
    fn test_no_uri_fails() {
        let err = super::Namespace::<UnboundNamespace>::new().unwrap_err();
        assert_eq!(err, XmpError::NoUri("UnboundNamespace".to_string()));
    }

    #[test]
    fn test_identity() {
        let ns = Lang::new().unwrap();
        assert_eq!(ns.uri(), "http://example.com/lang/");
        assert_eq!(ns.prefix(), "lang");
        assert_eq!(ns.type_name(), "LangNamespace");
        assert!(ns.is_empty());
    }

    #[test]
    fn test_bare_namespace_prefix() {
        let ns = super::Namespace::<Namespace>::new().unwrap();
        assert_eq!(ns.prefix(), "");
        assert!(ns.is_valid());
    }

    #[test]
    fn test_set_get_delete() {
        let mut ns = Count::new().unwrap();
        assert_eq!(ns.set("count", "5"), None);
        assert_eq!(ns.get("count").unwrap(), &XmpValue::String("5".to_string()));

        assert_eq!(ns.set("count", 6), Some(XmpValue::String("5".to_string())));
        assert_eq!(ns.len(), 1);

        assert_eq!(ns.delete("count").unwrap(), XmpValue::Integer(6));
        assert_eq!(
            ns.get("count").unwrap_err(),
            XmpError::KeyNotFound("count".to_string())
        );
        assert!(ns.delete("count").is_err());
        assert!(ns.is_empty());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(Count::new().unwrap().is_valid());
    }

    #[test]
    fn test_undeclared_key_invalid() {
        let mut ns = Count::new().unwrap();
        ns.set("color", "red");
        assert!(!ns.is_valid());
        assert_eq!(
            ns.validate().unwrap_err(),
            XmpError::UndeclaredKey {
                namespace: "CountNamespace".to_string(),
                key: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_coercible_value_valid() {
        let mut ns = Count::new().unwrap();
        ns.set("count", "5");
        assert!(ns.is_valid());
        // stored value is left as it was
        assert_eq!(ns.get("count").unwrap().as_str(), Some("5"));
    }

    #[test]
    fn test_uncoercible_value_invalid() {
        let mut ns = Count::new().unwrap();
        ns.set("count", "abc");
        assert!(!ns.is_valid());
        assert!(matches!(ns.validate(), Err(XmpError::BadValue(msg)) if msg.starts_with("count: ")));
    }

    #[test]
    fn test_required_lifecycle() {
        let mut ns = Lang::new().unwrap();
        assert!(!ns.is_valid());
        assert_eq!(
            ns.validate().unwrap_err(),
            XmpError::MissingRequired {
                namespace: "LangNamespace".to_string(),
                key: "lang".to_string(),
            }
        );

        ns.set("lang", "en");
        assert!(ns.is_valid());

        ns.delete("lang").unwrap();
        assert!(!ns.is_valid());
    }

    #[test]
    fn test_keys_and_iter_reflect_store() {
        let mut ns = Count::new().unwrap();
        ns.extend([("count", XmpValue::from(1)), ("label", XmpValue::from("x"))]);

        let mut keys: Vec<_> = ns.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["count", "label"]);

        // restartable
        assert_eq!(ns.keys().count(), 2);
        assert_eq!((&ns).into_iter().count(), 2);
        assert_eq!(ns.iter().size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_display() {
        let mut ns = Count::new().unwrap();
        assert_eq!(ns.to_string(), "<CountNamespace {}>");

        ns.set("label", "hi");
        ns.set("count", 3);
        assert_eq!(
            ns.to_string(),
            "<CountNamespace {\"count\": 3, \"label\": \"hi\"}>"
        );
    }

    #[test]
    fn test_property_map_object() {
        let mut ns = Lang::new().unwrap();
        {
            let map: &mut dyn PropertyMap = &mut ns;
            assert!(map.is_empty());
            map.set("lang".to_string(), "fr".into());
            assert!(map.contains("lang"));
            assert_eq!(map.keys().collect::<Vec<_>>(), vec!["lang"]);
        }
        assert!(ns.is_valid());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut ns = Lang::new().unwrap();
        ns.set("lang", "en");
        let mut copy = ns.clone();
        assert_eq!(copy, ns);

        copy.delete("lang").unwrap();
        assert!(ns.contains("lang"));
        assert_ne!(copy, ns);
    }
}
