use std::path::{Path, PathBuf};

use crate::error::ResultOkDebugExt;
use crate::fsutil;

use super::{ContainerID, MemoryLimit, extract_container_id};

/// Name of the cgroup v2 control file holding the memory ceiling.
pub const MEMORY_MAX_FILE: &str = "memory.max";

/// Upper bound on the bytes read from a `memory.max` file. A `u64` in
/// decimal plus a newline fits comfortably.
const LIMIT_READ_MAX: usize = 64;

/// One container scope whose memory ceiling qualified for reporting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OverLimitScope {
    /// Identifier extracted from the scope directory name.
    pub container_id: ContainerID,
    /// The configured memory ceiling.
    pub limit: MemoryLimit,
    /// Full path of the scope's cgroup directory.
    pub cgroup_path: PathBuf,
}

/// Scans one slice directory for Docker container scopes whose memory
/// ceiling exceeds the given threshold.
///
/// Enumerates the direct entries of `slice_dir` (one level, no
/// recursion). For every directory named `docker-<id>.scope`, reads
/// `<slice_dir>/<name>/memory.max` and appends an [`OverLimitScope`] to
/// `out` iff the limit is unbounded or strictly greater than
/// `threshold_bytes`. Entries whose file type cannot be determined are
/// treated as directories, since not every filesystem reports a type
/// during enumeration.
///
/// Appending follows filesystem enumeration order; no re-sorting is
/// performed.
///
/// An unopenable slice directory contributes zero entries: a host
/// without, say, machine-managed containers simply has no such slice.
/// Unreadable or unparsable limit files skip the scope the same way.
/// Both conditions are logged at debug level and never escalate.
pub fn scan_slice(slice_dir: &Path, threshold_bytes: u64, out: &mut Vec<OverLimitScope>) {
    let entries = match std::fs::read_dir(slice_dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!(
                "skipping slice `{}`: failed to enumerate: {err}",
                slice_dir.display()
            );
            return;
        }
    };

    for entry in entries {
        let Some(entry) = entry.ok_debug() else {
            continue;
        };
        if let Ok(file_type) = entry.file_type()
            && !file_type.is_dir()
        {
            continue;
        }

        let Some(container_id) = extract_container_id(&entry.file_name()) else {
            continue;
        };

        let cgroup_path = slice_dir.join(entry.file_name());
        let Some(limit) = read_scope_limit(&cgroup_path) else {
            continue;
        };

        if limit.exceeds(threshold_bytes) {
            out.push(OverLimitScope {
                container_id,
                limit,
                cgroup_path,
            });
        }
    }
}

/// Reads and parses `<scope_dir>/memory.max`, returning `None` if the
/// file is missing, unreadable, or malformed.
fn read_scope_limit(scope_dir: &Path) -> Option<MemoryLimit> {
    let content = fsutil::read_bounded_string(scope_dir.join(MEMORY_MAX_FILE), LIMIT_READ_MAX)
        .ok_debug()?;
    content.parse::<MemoryLimit>().ok_debug()
}
