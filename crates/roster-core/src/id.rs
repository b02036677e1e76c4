//! The opaque record identifier.
//!
//! [`RecordId`] wraps the store-assigned 12-byte key. The application never
//! interprets the bytes; it only parses, compares, and displays them as a
//! 24-character hex string. Keeping parsing behind [`RecordId::parse`] means
//! malformed ids are rejected before any store call, and the store technology
//! stays swappable.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Store-assigned unique record key: 12 bytes, wire form is 24 hex chars.
///
/// Ordering follows the raw bytes, so ids with a leading timestamp sort
/// roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub [u8; 12]);

impl RecordId {
    /// Parses a 24-character hex string into a `RecordId`.
    ///
    /// Accepts upper- and lowercase hex. Anything else (wrong length,
    /// non-hex characters) fails with [`CoreError::InvalidId`].
    pub fn parse(s: &str) -> Result<RecordId, CoreError> {
        let raw = s.as_bytes();
        if raw.len() != 24 {
            return Err(CoreError::InvalidId {
                value: s.to_string(),
            });
        }
        let mut bytes = [0u8; 12];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = hex_val(pair[0]);
            let lo = hex_val(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => bytes[i] = (hi << 4) | lo,
                _ => {
                    return Err(CoreError::InvalidId {
                        value: s.to_string(),
                    })
                }
            }
        }
        Ok(RecordId(bytes))
    }

    /// Renders the id as 24 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(24);
        for b in &self.0 {
            out.push(HEX_CHARS[(b >> 4) as usize] as char);
            out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
        }
        out
    }
}

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// On the wire a RecordId is always its hex string form.

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(D::Error::custom)
    }
}
