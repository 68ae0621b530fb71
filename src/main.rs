/// Entry point for the Memcap Audit memory-limit auditor.
///
/// This binary serves a read-only HTTP endpoint that, on every request,
/// scans the cgroup v2 hierarchy for Docker container scopes whose
/// `memory.max` is unbounded or greater than half of physical RAM and
/// returns a plain-text report.
///
/// # Errors
///
/// Returns an error if initialization fails (e.g., the listen address
/// is already in use).
///
/// # Examples
///
/// ```bash
/// LISTEN_ADDR=127.0.0.1:3000 cargo run
/// curl http://127.0.0.1:3000/audit
/// ```
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    memcap_audit::run().await
}
