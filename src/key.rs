use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Error returned when a path string cannot form a valid key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The path was empty where a non-empty key is required.
    #[error("key path is empty")]
    Empty,
    /// The path contained an empty segment (leading, trailing, or doubled '/').
    #[error("key path '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// A hierarchical key: an ordered sequence of non-empty path segments.
///
/// Keys are derived from slash-delimited paths (`"books/Hamlet"` becomes
/// `["books", "Hamlet"]`) and compare segment-wise, so records under a common
/// prefix form a contiguous range in any ordered backend. The empty key
/// ([`Key::root`]) is a prefix of every key and selects the whole store; it is
/// never produced by [`Key::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Vec<String>);

impl Key {
    /// The empty key, prefix of every key in the store.
    pub fn root() -> Self {
        Key(Vec::new())
    }

    /// Split a slash-delimited path into a key.
    ///
    /// The path must be non-empty and must not contain empty segments. The
    /// caller is responsible for handing over the raw, already-decoded path
    /// tail; segments may contain any character except the delimiter.
    pub fn parse(path: &str) -> Result<Self, KeyError> {
        if path.is_empty() {
            return Err(KeyError::Empty);
        }
        let segments: Vec<String> = path.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(KeyError::EmptySegment(path.to_string()));
        }
        Ok(Key(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self`'s segments are a leading subsequence of `other`'s.
    pub fn is_prefix_of(&self, other: &Key) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Join the segments back into a slash-delimited path, inverse of
    /// [`Key::parse`].
    pub fn path(&self) -> String {
        self.0.join("/")
    }
}

impl From<Vec<String>> for Key {
    fn from(segments: Vec<String>) -> Self {
        Key(segments)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Key::parse(&path).map_err(serde::de::Error::custom)
    }
}
