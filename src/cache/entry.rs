//! Cache Entry Module
//!
//! Defines the named content record exchanged with clients and held in the store.

use serde::{Deserialize, Serialize};

// == Status ==
/// Result marker carried by an entry.
///
/// Callers send `Unset`; the store flips it to `Ok` when it accepts a put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Unset,
    Ok,
}

// == Entry ==
/// A named, versioned content blob.
///
/// `size` is expected to equal `content.len()`, but that is a contract between
/// callers. The store keeps whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Unique identity within the store
    pub key: String,
    /// Descriptive content type, opaque to the store
    #[serde(rename = "ctype")]
    pub content_type: String,
    /// Modification time in Unix nanoseconds, set by the caller
    #[serde(rename = "mtime")]
    pub modified_time: i64,
    /// Raw content bytes
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    /// Byte length of `content` as claimed by the caller
    pub size: i64,
    /// Set to `Status::Ok` by the store on a successful put
    #[serde(rename = "stat")]
    pub status: Status,
}

impl Entry {
    // == Constructor ==
    /// Creates an entry whose `size` matches `content`, stamped with the current UTC time.
    pub fn new(
        key: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        let content = content.into();
        Self {
            key: key.into(),
            content_type: content_type.into(),
            modified_time: current_timestamp_ns(),
            size: content.len() as i64,
            content,
            status: Status::Unset,
        }
    }

    /// Creates a request entry carrying only a key, as used by get and delete.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    // == Size Contract ==
    /// Returns true if `size` matches the actual content length.
    pub fn size_matches(&self) -> bool {
        usize::try_from(self.size).map_or(false, |size| size == self.content.len())
    }

    /// Compares every field except `status`.
    pub fn same_content(&self, other: &Entry) -> bool {
        self.key == other.key
            && self.content_type == other.content_type
            && self.modified_time == other.modified_time
            && self.size == other.size
            && self.content == other.content
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in nanoseconds.
fn current_timestamp_ns() -> i64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1000))
}

/// Encodes content as standard base64 on the wire.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded).map_err(serde::de::Error::custom)
    }
}
