use crate::meminfo;

/// Errors that abort a whole audit cycle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to determine physical memory: {0}")]
    PhysicalMemory(#[from] meminfo::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
