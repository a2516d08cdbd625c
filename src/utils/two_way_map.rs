//! Bidirectional map
//!
//! A `TwoWayMap` keeps every key/value pair reachable from both ends: values
//! are unique just like keys, so a value can be used to find its key.

use crate::core::error::{XmpError, XmpResult};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Map with unique keys and unique values, searchable in both directions
#[derive(Debug, Clone)]
pub struct TwoWayMap<K, V> {
    by_key: HashMap<K, V>,
    by_value: HashMap<V, K>,
}

impl<K, V> Default for TwoWayMap<K, V> {
    fn default() -> Self {
        Self {
            by_key: HashMap::new(),
            by_value: HashMap::new(),
        }
    }
}

impl<K, V> TwoWayMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Debug,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from key/value pairs
    ///
    /// # Errors
    ///
    /// Returns `XmpError::DuplicateValue` on the first value that is already
    /// mapped to a different key.
    pub fn from_pairs<I>(pairs: I) -> XmpResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Insert a key/value pair
    ///
    /// Inserting over an existing key removes its old pair from both
    /// directions first. Re-inserting an identical pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `XmpError::DuplicateValue` if the value is already mapped to a
    /// different key.
    pub fn insert(&mut self, key: K, value: V) -> XmpResult<()> {
        if let Some(existing_key) = self.by_value.get(&value) {
            if *existing_key != key {
                return Err(XmpError::DuplicateValue(format!("{:?}", value)));
            }
            return Ok(());
        }

        self.remove(&key);
        self.by_key.insert(key.clone(), value.clone());
        self.by_value.insert(value, key);
        Ok(())
    }

    /// Get the value for a key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.by_key.get(key)
    }

    /// Get the key for a value
    pub fn get_key<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.by_value.get(value)
    }

    /// Remove a pair by key, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let value = self.by_key.remove(key)?;
        self.by_value.remove(&value);
        Some(value)
    }

    /// Remove a pair by value, returning its key
    pub fn remove_value<Q>(&mut self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let key = self.by_value.remove(value)?;
        self.by_key.remove(&key);
        Some(key)
    }

    /// Check if a key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.by_key.contains_key(key)
    }

    /// Check if a value is present
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.by_value.contains_key(value)
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Check if the map holds no pairs
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Iterate over key/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.by_key.iter()
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.by_key.keys()
    }

    /// Iterate over values
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.by_value.keys()
    }
}

impl<K, V> PartialEq for TwoWayMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.by_key == other.by_key
    }
}

impl<K, V> Eq for TwoWayMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
}
