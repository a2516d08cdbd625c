//! URI strings
//!
//! A `Uri` behaves exactly like a string (it compares, hashes and borrows as
//! `str`) but is a distinct kind of XMP value.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// URI string value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uri(String);

impl Uri {
    /// Create a new URI from anything string-like
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Get the URI as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the URI, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Uri {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Uri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Uri> for str {
    fn eq(&self, other: &Uri) -> bool {
        self == other.0
    }
}

impl PartialEq<Uri> for &str {
    fn eq(&self, other: &Uri) -> bool {
        *self == other.0
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equal_to_str() {
        let uri = Uri::new("meaningless example");
        assert_eq!(uri, "meaningless example");
        assert_eq!("meaningless example", uri);
    }

    #[test]
    fn test_hash_into_map() {
        let mut map = HashMap::new();
        map.insert(Uri::from("a"), "hi");

        assert!(map.contains_key("a"));
        assert!(map.contains_key(&Uri::from("a")));
        assert_eq!(map.get("a"), Some(&"hi"));
    }

    #[test]
    fn test_display_and_deref() {
        let uri = Uri::new("http://purl.org/dc/elements/1.1/");
        assert_eq!(uri.to_string(), "http://purl.org/dc/elements/1.1/");
        assert!(uri.starts_with("http://"));
        assert_eq!(uri.clone().into_string(), uri.as_str());
    }
}
