//! One-shot memory-limit audit over the cgroup v2 hierarchy.
//!
//! The [`Auditor`] owns a single scan cycle: it determines the host's
//! physical RAM, scans the system and machine slices for Docker container
//! scopes, and produces an [`AuditReport`] listing every scope whose
//! `memory.max` is unbounded or greater than half of physical RAM.
//!
//! Each call to [`Auditor::run`] is a fresh, idempotent computation over
//! the current filesystem snapshot; no state is retained across calls.
mod error;
mod report;

pub use error::{Error, Result};
pub use report::AuditReport;

use std::path::{Path, PathBuf};

use crate::cgroup;
use crate::meminfo;

/// Default mount point of the cgroup v2 hierarchy.
pub const DEFAULT_CGROUP_ROOT: &str = "/sys/fs/cgroup";
/// Default path of the kernel's memory information file.
pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";

/// Slice directories scanned per cycle, relative to the cgroup root.
/// The system slice is always scanned before the machine slice.
const SLICE_NAMES: [&str; 2] = ["system.slice", "machine.slice"];

/// Runs memory-limit audit cycles against a fixed set of paths.
#[derive(Debug, Clone)]
pub struct Auditor {
    meminfo_path: PathBuf,
    slice_dirs: Vec<PathBuf>,
}

impl Auditor {
    /// Creates an auditor scanning the system and machine slices under
    /// the given cgroup root, using the given meminfo file to determine
    /// physical RAM.
    pub fn new(cgroup_root: impl AsRef<Path>, meminfo_path: impl Into<PathBuf>) -> Self {
        let cgroup_root = cgroup_root.as_ref();
        Self {
            meminfo_path: meminfo_path.into(),
            slice_dirs: SLICE_NAMES.iter().map(|s| cgroup_root.join(s)).collect(),
        }
    }

    /// Performs one audit cycle.
    ///
    /// Queries physical RAM, computes the half-RAM threshold, scans the
    /// system slice and then the machine slice, and returns the report.
    /// Report entries keep slice scan order and, within a slice,
    /// filesystem enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PhysicalMemory`] if the total physical RAM cannot
    /// be determined; this aborts the whole cycle. Missing slices and
    /// unreadable scopes are not errors, they merely contribute no
    /// entries.
    pub fn run(&self) -> Result<AuditReport> {
        let total_bytes = meminfo::detect_physical_memory(&self.meminfo_path)?;
        let half_bytes = total_bytes / 2;

        let mut scopes = Vec::new();
        for slice_dir in &self.slice_dirs {
            cgroup::scan_slice(slice_dir, half_bytes, &mut scopes);
        }

        Ok(AuditReport {
            total_bytes,
            half_bytes,
            scopes,
        })
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(DEFAULT_CGROUP_ROOT, DEFAULT_MEMINFO_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cgroup::{MEMORY_MAX_FILE, MemoryLimit};
    use std::fs;
    use std::path::Path;

    /// 8 GB total, written as kB the way the kernel reports it.
    const MEMINFO: &str = "MemTotal:        7812500 kB\nMemFree:         1024000 kB\n";
    const TOTAL: u64 = 7_812_500 * 1024;

    struct Fixture {
        root: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let root = tempfile::tempdir().unwrap();
            fs::write(root.path().join("meminfo"), MEMINFO).unwrap();
            Self { root }
        }

        fn add_scope(&self, slice: &str, name: &str, memory_max: &str) {
            let scope = self.root.path().join(slice).join(name);
            fs::create_dir_all(&scope).unwrap();
            fs::write(scope.join(MEMORY_MAX_FILE), memory_max).unwrap();
        }

        fn auditor(&self) -> Auditor {
            Auditor::new(self.root.path(), self.root.path().join("meminfo"))
        }
    }

    #[test]
    fn test_audit_reports_unbounded_and_over_half_scopes() {
        let fixture = Fixture::new();
        fixture.add_scope("system.slice", "docker-abc123.scope", "max\n");
        fixture.add_scope("system.slice", "docker-def456.scope", "3000000000\n");
        fixture.add_scope("machine.slice", "docker-ghi789.scope", "5000000000\n");

        let report = fixture.auditor().run().unwrap();

        assert_eq!(report.total_bytes, TOTAL);
        assert_eq!(report.half_bytes, TOTAL / 2);
        assert_eq!(report.scopes.len(), 2);
        assert_eq!(report.scopes[0].container_id.as_ref(), "abc123");
        assert_eq!(report.scopes[0].limit, MemoryLimit::Unbounded);
        assert_eq!(report.scopes[1].container_id.as_ref(), "ghi789");
        assert_eq!(report.scopes[1].limit, MemoryLimit::Bytes(5_000_000_000));
    }

    #[test]
    fn test_system_slice_scopes_precede_machine_slice_scopes() {
        let fixture = Fixture::new();
        fixture.add_scope("machine.slice", "docker-machine1.scope", "max\n");
        fixture.add_scope("system.slice", "docker-system1.scope", "max\n");

        let report = fixture.auditor().run().unwrap();

        let ids: Vec<&str> = report
            .scopes
            .iter()
            .map(|s| s.container_id.as_ref())
            .collect();
        assert_eq!(ids, vec!["system1", "machine1"]);
    }

    #[test]
    fn test_missing_machine_slice_is_not_fatal() {
        let fixture = Fixture::new();
        fixture.add_scope("system.slice", "docker-abc123.scope", "max\n");

        let report = fixture.auditor().run().unwrap();

        assert_eq!(report.scopes.len(), 1);
        assert_eq!(report.scopes[0].container_id.as_ref(), "abc123");
    }

    #[test]
    fn test_missing_meminfo_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let auditor = Auditor::new(root.path(), root.path().join("meminfo"));

        let err = auditor.run().unwrap_err();
        assert!(matches!(err, Error::PhysicalMemory(_)));
    }

    #[test]
    fn test_audit_is_idempotent() {
        let fixture = Fixture::new();
        fixture.add_scope("system.slice", "docker-abc123.scope", "max\n");
        fixture.add_scope("machine.slice", "docker-ghi789.scope", "9000000000\n");

        let auditor = fixture.auditor();
        let first = auditor.run().unwrap();
        let second = auditor.run().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_audit_ignores_unrelated_slices() {
        let fixture = Fixture::new();
        fixture.add_scope("user.slice", "docker-abc123.scope", "max\n");

        let report = fixture.auditor().run().unwrap();
        assert!(report.scopes.is_empty());
    }

    #[test]
    fn test_scanned_slice_dirs() {
        let auditor = Auditor::new("/sys/fs/cgroup", "/proc/meminfo");
        assert_eq!(
            auditor.slice_dirs,
            vec![
                Path::new("/sys/fs/cgroup/system.slice"),
                Path::new("/sys/fs/cgroup/machine.slice"),
            ]
        );
    }
}
