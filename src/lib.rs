use std::path::PathBuf;
use std::sync::Arc;

/// Memcap Audit: a container memory-limit auditor that inspects the
/// cgroup v2 hierarchy for Docker container scopes whose `memory.max`
/// is unbounded or greater than half of the host's physical RAM.
///
/// This library provides the core functionality for determining physical
/// memory, scanning the system and machine slices for container scopes,
/// and serving the resulting plain-text report via an HTTP endpoint.
pub mod api;
pub mod audit;
pub mod cgroup;
pub mod error;
pub mod fsutil;
pub mod meminfo;

// Scanned slices, fixed per cycle, system first:
//  <cgroup_root>/system.slice  - scopes managed by the system manager
//  <cgroup_root>/machine.slice - scopes managed by machined/VM tooling
//
// Per scope the only file consulted is <scope>/memory.max:
//  "max" -> no ceiling configured, always reported
//  <n>   -> reported iff n > MemTotal/2 (strict)
//
// A missing slice or an unreadable memory.max is steady-state (no
// machine containers running, scope torn down mid-scan) and never
// fails the cycle; only a failed MemTotal lookup does.

/// Runs the Memcap Audit application.
///
/// Builds the auditor from environment configuration and serves the
/// audit endpoint until the process is terminated.
///
/// # Configuration
///
/// - `CGROUP_ROOT` - cgroup v2 mount point (default `/sys/fs/cgroup`).
/// - `MEMINFO_PATH` - meminfo file to read (default `/proc/meminfo`).
/// - `LISTEN_ADDR` - socket address to serve on (default `0.0.0.0:3000`).
///
/// # Errors
///
/// Returns `Ok(())` on successful execution; the audit itself only fails
/// per-request (the endpoint answers 500), never at startup.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cgroup_root = std::env::var_os("CGROUP_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(audit::DEFAULT_CGROUP_ROOT));
    let meminfo_path = std::env::var_os("MEMINFO_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(audit::DEFAULT_MEMINFO_PATH));
    log::debug!("Cgroup root: {}", cgroup_root.display());
    log::debug!("Meminfo path: {}", meminfo_path.display());

    let auditor = Arc::new(audit::Auditor::new(cgroup_root, meminfo_path));

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    log::info!("Serving memory limit audit at http://{addr}/audit");

    let api = api::APIServer::new(auditor).await;
    api.listen(addr).await;
    Ok(())
}
