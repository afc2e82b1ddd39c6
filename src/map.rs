//! The key/value map produced by parsing a struct tag.
//!
//! This module provides [`TagMap`], a wrapper around [`IndexMap`] from tag
//! keys to unescaped values, and [`merge`] for combining several maps.
//!
//! ## Ordering
//!
//! Struct tags carry no meaningful pair order. `TagMap` still remembers
//! insertion order so serialization is deterministic, but equality ignores
//! it: two maps are equal when they hold the same keys with the same values.
//!
//! ## Examples
//!
//! ```rust
//! use structtag::TagMap;
//!
//! let mut tags = TagMap::new();
//! tags.insert("json".to_string(), "host".to_string());
//! tags.insert("json".to_string(), "hostname".to_string());
//!
//! assert_eq!(tags.len(), 1);
//! assert_eq!(tags.get("json"), Some("hostname"));
//! ```

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A key-unique map of struct tag keys to values.
///
/// Inserting an existing key replaces its value (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap(IndexMap<String, String>);

impl TagMap {
    /// Creates an empty `TagMap`.
    #[must_use]
    pub fn new() -> Self {
        TagMap(IndexMap::new())
    }

    /// Creates an empty `TagMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TagMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structtag::TagMap;
    ///
    /// let mut tags = TagMap::new();
    /// assert!(tags.insert("env".into(), "A".into()).is_none());
    /// assert_eq!(tags.insert("env".into(), "B".into()), Some("A".to_string()));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let tags = structtag::parse(r#"env:"SERVER_HOST""#).unwrap();
    /// assert_eq!(tags.get("env"), Some("SERVER_HOST"));
    /// assert_eq!(tags.get("json"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, keeping the relative order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Copies every pair of `other` into `self`, overwriting shared keys.
    ///
    /// This is the in-place form of [`merge`] for callers that own an
    /// accumulator.
    pub fn merge(&mut self, other: &TagMap) {
        self.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// Merges maps into a new map.
///
/// Pairs are inserted map by map in sequence order, so for a key present in
/// several maps the value from the latest one wins. None of the inputs is
/// modified; merging nothing yields an empty map.
///
/// # Examples
///
/// ```rust
/// use structtag::{merge, tags};
///
/// let defaults = tags! { "env" => "TESTING", "default" => "3000" };
/// let overrides = tags! { "env" => "HELLO" };
///
/// let merged = merge([&defaults, &overrides]);
/// assert_eq!(merged.get("env"), Some("HELLO"));
/// assert_eq!(merged.get("default"), Some("3000"));
/// assert_eq!(defaults.get("env"), Some("TESTING"));
/// ```
#[must_use]
pub fn merge<'a, I>(maps: I) -> TagMap
where
    I: IntoIterator<Item = &'a TagMap>,
{
    maps.into_iter().fold(TagMap::new(), |mut acc, map| {
        acc.merge(map);
        acc
    })
}

impl fmt::Display for TagMap {
    /// Renders the map as struct tag text with the default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl FromStr for TagMap {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::parse(s)
    }
}

impl From<HashMap<String, String>> for TagMap {
    fn from(map: HashMap<String, String>) -> Self {
        TagMap(map.into_iter().collect())
    }
}

impl From<TagMap> for HashMap<String, String> {
    fn from(map: TagMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for TagMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        TagMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for TagMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Serialize for TagMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagMap {
    /// Accepts either a map of strings or struct tag text.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagMapVisitor;

        impl<'de> Visitor<'de> for TagMapVisitor {
            type Value = TagMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of strings or a struct tag string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<TagMap, E>
            where
                E: de::Error,
            {
                crate::parse(v).map_err(E::custom)
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<TagMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tags = TagMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    tags.insert(key, value);
                }
                Ok(tags)
            }
        }

        deserializer.deserialize_any(TagMapVisitor)
    }
}
