//! Physical memory detection for Linux systems.
//!
//! Parses `/proc/meminfo` to determine the total amount of physical RAM
//! installed on the host.
mod detect;
mod error;
mod parser;

pub use detect::detect_physical_memory;
pub use error::{Error, Result};
