//! Meminfo line parser for Linux systems.
//!
//! Parses lines in `/proc/meminfo` format. See
//! [`proc_meminfo(5)`](https://man7.org/linux/man-pages/man5/proc_meminfo.5.html)
//! for details on the structure.

/// Represents a parsed meminfo line.
///
/// Most fields carry a `kB` unit; counter fields (e.g. `HugePages_Total`)
/// have no unit at all.
#[derive(Debug, PartialEq, Eq)]
pub struct MemInfoEntry<'a> {
    /// Field name (e.g. `MemTotal`).
    pub key: &'a str,
    /// Raw numeric value as written in the file.
    pub value: u64,
    /// Optional unit suffix (in practice always `kB` when present).
    pub unit: Option<&'a str>,
}

impl MemInfoEntry<'_> {
    /// Returns the value converted to bytes.
    ///
    /// Unit-less values are returned as-is. Returns `None` for an
    /// unrecognized unit or if the conversion overflows.
    pub fn value_in_bytes(&self) -> Option<u64> {
        match self.unit {
            None => Some(self.value),
            Some("kB") => self.value.checked_mul(1024),
            Some(_) => None,
        }
    }
}

/// Errors that may occur when parsing a meminfo line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing separator `:` in line: `{0}`")]
    MissingSeparator(String),

    #[error("missing value in line: `{0}`")]
    MissingValue(String),

    #[error("invalid value `{value}` in line `{line}`: {source}")]
    InvalidValue {
        value: String,
        line: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Parses a single line of meminfo data.
///
/// The line must follow the `<Key>: <value> [unit]` format used by
/// `/proc/meminfo`.
///
/// # Arguments
///
/// * `line` - A single line from `/proc/meminfo`.
///
/// # Returns
///
/// On success, returns a [`MemInfoEntry`] referencing fields in the
/// original input line.
///
/// # Errors
///
/// Returns [`ParseError`] variants for a missing separator, a missing
/// value, or a value that does not parse as `u64`.
pub fn parse_meminfo_line<'a>(line: &'a str) -> Result<MemInfoEntry<'a>, ParseError> {
    let (key, rest) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingSeparator(line.to_owned()))?;

    let mut fields = rest.split_whitespace();
    let value = fields
        .next()
        .ok_or_else(|| ParseError::MissingValue(line.to_owned()))?;
    let value = value
        .parse::<u64>()
        .map_err(|source| ParseError::InvalidValue {
            value: value.to_owned(),
            line: line.to_owned(),
            source,
        })?;
    let unit = fields.next();

    Ok(MemInfoEntry {
        key: key.trim(),
        value,
        unit,
    })
}
