use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Errors that may occur when reading a file into a bounded string.
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error(transparent)]
    Open(#[from] FileOpenError),
    #[error("failed to read file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Opens a file at the given path and wraps it in a [`BufReader`].
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
///
/// # Example
/// ```no_run
/// # use memcap_audit::fsutil;
/// let reader = fsutil::open_file_reader("/some/file.txt")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads the contents of a small text file into a string.
///
/// At most `max_len` bytes are read. The result is truncated at the first
/// NUL byte, converted lossily to UTF-8, and stripped of trailing
/// whitespace (control files in `/sys/fs/cgroup` end with a newline).
///
/// `max_len` must be greater than zero.
///
/// # Errors
///
/// Returns a [`FileReadError`] if the file cannot be opened or read. The
/// two conditions are reported as distinct variants, both carrying the
/// offending path.
pub fn read_bounded_string(
    path: impl AsRef<Path>,
    max_len: usize,
) -> Result<String, FileReadError> {
    debug_assert!(max_len > 0, "max_len must be greater than zero");
    let path = path.as_ref();
    let mut reader = open_file_reader(path)?.take(max_len as u64);
    let mut buf = Vec::with_capacity(max_len);
    reader
        .read_to_end(&mut buf)
        .map_err(|source| FileReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }

    Ok(String::from_utf8_lossy(&buf).trim_end().to_owned())
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_file_reader_success() {
        let tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        let path = tmp.path();
        let reader = open_file_reader(path).expect("should open test file");
        let metadata = reader.get_ref().metadata().unwrap();
        assert!(metadata.is_file());
    }

    #[test]
    fn test_open_file_reader_error() {
        let result = open_file_reader("/definitely/does/not/exist");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.path, PathBuf::from("/definitely/does/not/exist"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_bounded_string_trims_trailing_newline() {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        tmp.write_all(b"max\n").unwrap();
        let content = read_bounded_string(tmp.path(), 64).expect("should read test file");
        assert_eq!(content, "max");
    }

    #[test]
    fn test_read_bounded_string_truncates_to_max_len() {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        tmp.write_all(b"123456789").unwrap();
        let content = read_bounded_string(tmp.path(), 4).expect("should read test file");
        assert_eq!(content, "1234");
    }

    #[test]
    fn test_read_bounded_string_stops_at_nul() {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        tmp.write_all(b"42\0garbage").unwrap();
        let content = read_bounded_string(tmp.path(), 64).expect("should read test file");
        assert_eq!(content, "42");
    }

    #[test]
    fn test_read_bounded_string_missing_file() {
        let err = read_bounded_string("/definitely/does/not/exist", 64).unwrap_err();
        assert!(matches!(err, FileReadError::Open(_)));
    }
}
