use crate::fsutil;

use super::parser::parse_meminfo_line;
use super::{Error, Result};
use std::io::BufRead;
use std::path::Path;

/// Detects the total physical memory in bytes by parsing a Linux
/// `meminfo` file.
///
/// This function scans the file for the `MemTotal` entry and converts its
/// value to bytes (the kernel reports it in kB).
///
/// # Arguments
///
/// * `path` - Path to a Linux meminfo file (e.g., `/proc/meminfo`).
///
/// # Returns
///
/// The total physical memory of the host in bytes.
///
/// # Errors
///
/// - [`Error::FileOpen`] if the file can't be opened.
/// - [`Error::ReadLine`] if reading from the file fails.
/// - [`Error::Parse`] if parsing any line fails.
/// - [`Error::UnsupportedUnit`] if the `MemTotal` value carries an
///   unrecognized unit or overflows `u64` when converted to bytes.
/// - [`Error::MissingMemTotal`] if no `MemTotal` entry is found.
///
/// # Example
///
/// ```no_run
/// use memcap_audit::meminfo::detect_physical_memory;
///
/// let total = detect_physical_memory("/proc/meminfo").unwrap();
/// println!("Physical RAM: {total} bytes");
/// ```
pub fn detect_physical_memory(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let reader = fsutil::open_file_reader(path)?;

    for line in reader.lines() {
        let line = line.map_err(|source| Error::ReadLine {
            path: path.to_path_buf(),
            source,
        })?;
        let entry = parse_meminfo_line(&line).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if entry.key != "MemTotal" {
            continue;
        }
        return entry
            .value_in_bytes()
            .ok_or_else(|| Error::UnsupportedUnit {
                path: path.to_path_buf(),
                unit: entry.unit.unwrap_or_default().to_owned(),
            });
    }

    Err(Error::MissingMemTotal {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_meminfo(content: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        tmp.write_all(content.as_bytes()).unwrap();
        tmp
    }

    #[test]
    fn detects_mem_total_in_bytes() {
        let tmp = write_meminfo(
            "MemTotal:        7812500 kB\nMemFree:         1024000 kB\nMemAvailable:    4096000 kB\n",
        );
        let total = detect_physical_memory(tmp.path()).unwrap();
        assert_eq!(total, 7_812_500 * 1024);
    }

    #[test]
    fn detects_mem_total_after_other_entries() {
        let tmp = write_meminfo("MemFree:         1024000 kB\nMemTotal:        2048000 kB\n");
        let total = detect_physical_memory(tmp.path()).unwrap();
        assert_eq!(total, 2_048_000 * 1024);
    }

    #[test]
    fn error_on_missing_mem_total() {
        let tmp = write_meminfo("MemFree:         1024000 kB\n");
        let err = detect_physical_memory(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::MissingMemTotal { .. }));
    }

    #[test]
    fn error_on_missing_file() {
        let err = detect_physical_memory("/definitely/does/not/exist").unwrap_err();
        assert!(matches!(err, Error::FileOpen(_)));
    }

    #[test]
    fn error_on_malformed_line() {
        let tmp = write_meminfo("MemTotal 7812500 kB\n");
        let err = detect_physical_memory(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
