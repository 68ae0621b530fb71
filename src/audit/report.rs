use std::fmt;

use crate::cgroup::OverLimitScope;

/// The result of one audit cycle.
///
/// The [`Display`](fmt::Display) implementation renders the plain-text
/// report served to callers:
///
/// ```text
/// Docker containers with memory.max == max OR > half of physical RAM
/// Physical RAM: 8000000000 bytes, half: 4000000000 bytes
///
/// abc123  mem.max=max  cgroup=/sys/fs/cgroup/system.slice/docker-abc123.scope
/// ```
///
/// The two header lines and the separating blank line are emitted even
/// when no scope qualified.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AuditReport {
    /// Total physical RAM in bytes at scan time.
    pub total_bytes: u64,
    /// The reporting threshold, `total_bytes / 2`.
    pub half_bytes: u64,
    /// Qualifying scopes in discovery order.
    pub scopes: Vec<OverLimitScope>,
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Docker containers with memory.max == max OR > half of physical RAM"
        )?;
        writeln!(
            f,
            "Physical RAM: {} bytes, half: {} bytes",
            self.total_bytes, self.half_bytes
        )?;
        writeln!(f)?;
        for scope in &self.scopes {
            writeln!(
                f,
                "{}  mem.max={}  cgroup={}",
                scope.container_id,
                scope.limit,
                scope.cgroup_path.display()
            )?;
        }
        Ok(())
    }
}
