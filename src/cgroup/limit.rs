//! Parsing for the `memory.max` cgroup control file.
//!
//! The file contains a single line: either a decimal byte count or the
//! literal `max`, meaning no limit is configured.

use std::fmt;
use std::str::FromStr;

/// Error that occurs when a `memory.max` value fails to parse.
#[derive(Debug, thiserror::Error)]
#[error("invalid memory limit `{value}`: {source}")]
pub struct LimitParseError {
    pub value: String,
    #[source]
    pub source: std::num::ParseIntError,
}

/// The configured memory ceiling of one cgroup scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryLimit {
    /// No limit configured (the literal `max`).
    Unbounded,
    /// Limit in bytes.
    Bytes(u64),
}

impl MemoryLimit {
    /// Returns whether this limit qualifies as reportable against the
    /// given threshold.
    ///
    /// [`Unbounded`] always qualifies; [`Bytes`] qualifies iff the value
    /// is strictly greater than the threshold. A limit equal to the
    /// threshold does not qualify.
    ///
    /// [`Unbounded`]: MemoryLimit::Unbounded
    /// [`Bytes`]: MemoryLimit::Bytes
    pub fn exceeds(&self, threshold_bytes: u64) -> bool {
        match self {
            MemoryLimit::Unbounded => true,
            MemoryLimit::Bytes(v) => *v > threshold_bytes,
        }
    }
}

impl FromStr for MemoryLimit {
    type Err = LimitParseError;

    /// Parses a trimmed `memory.max` value.
    ///
    /// # Errors
    ///
    /// Returns a [`LimitParseError`] if the input is neither `max` nor a
    /// base-10 `u64`. Callers treat this the same as an unreadable file
    /// and skip the scope.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "max" {
            return Ok(MemoryLimit::Unbounded);
        }
        s.parse::<u64>()
            .map(MemoryLimit::Bytes)
            .map_err(|source| LimitParseError {
                value: s.to_owned(),
                source,
            })
    }
}

impl fmt::Display for MemoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryLimit::Unbounded => write!(f, "max"),
            MemoryLimit::Bytes(v) => write!(f, "{v}"),
        }
    }
}

impl serde::Serialize for MemoryLimit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            MemoryLimit::Unbounded => serializer.serialize_str("max"),
            MemoryLimit::Bytes(v) => serializer.serialize_u64(*v),
        }
    }
}
