//! Container discovery and memory-limit inspection using cgroup-based
//! introspection.
//!
//! This module provides tools to identify Docker container scopes in the
//! Linux cgroup v2 hierarchy and to read their configured memory
//! ceilings.
//!
//! # Key Components
//!
//! - [`ContainerID`] — A validated container identifier extracted from a
//!   scope directory name.
//! - [`MemoryLimit`] — The parsed content of a `memory.max` control file,
//!   either a byte count or unbounded.
//! - [`scan_slice`] — Enumerates one slice directory and collects the
//!   scopes whose limit exceeds a threshold.
//!
//! # Platform Requirements
//!
//! - Linux with cgroup v2 support.
//! - Read access to `/sys/fs/cgroup`.
mod limit;
mod scanner;
mod scope;

pub use limit::{LimitParseError, MemoryLimit};
pub use scanner::{MEMORY_MAX_FILE, OverLimitScope, scan_slice};
pub use scope::{ContainerID, extract_container_id};
