use std::borrow::Borrow;
use std::ffi::OsStr;
use std::fmt;
use std::os::unix::ffi::OsStrExt;
use std::sync::Arc;

/// Directory-name prefix of a Docker container scope.
const SCOPE_PREFIX: &[u8] = b"docker-";
/// Directory-name suffix of a Docker container scope.
const SCOPE_SUFFIX: &[u8] = b".scope";

/// A validated, non-empty container identifier.
///
/// # Examples
///
/// ```
/// # use std::ffi::OsStr;
/// # use memcap_audit::cgroup::extract_container_id;
/// let id = extract_container_id(OsStr::new("docker-abc123.scope")).unwrap();
/// assert_eq!(id.as_ref(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerID(Arc<str>);

impl AsRef<str> for ContainerID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContainerID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for ContainerID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Tries to extract a [`ContainerID`] from the given directory-entry name.
///
/// A name qualifies iff it reads `docker-<id>.scope` with a strictly
/// non-empty `<id>`. The special entries `.` and `..` never qualify, and
/// neither does an id that is not valid UTF-8. Non-matching names are
/// filtered, not errors.
pub fn extract_container_id(name: &OsStr) -> Option<ContainerID> {
    let name = name.as_bytes();
    if name == b"." || name == b".." {
        return None;
    }

    let id_bytes = extract_id_from_name_bytes(name, SCOPE_PREFIX, SCOPE_SUFFIX)?;
    let id = std::str::from_utf8(id_bytes).ok()?;
    Some(ContainerID(id.into()))
}

/// Extracts an ID from the given name, if it has the given prefix and
/// suffix with at least one byte in between.
#[inline]
fn extract_id_from_name_bytes<'a>(
    name_bytes: &'a [u8],
    prefix: &[u8],
    suffix: &[u8],
) -> Option<&'a [u8]> {
    if name_bytes.starts_with(prefix)
        && name_bytes.ends_with(suffix)
        && name_bytes.len() > prefix.len() + suffix.len()
    {
        return Some(&name_bytes[prefix.len()..(name_bytes.len() - suffix.len())]);
    }
    None
}
