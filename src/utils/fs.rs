use std::fs;
use std::path::Path;

use crate::utils::error::TilError;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<(), TilError> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|source| TilError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Read a file's raw bytes
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, TilError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| TilError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a string to a file, replacing whatever was there
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TilError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| TilError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        write_file(&path, "hello").unwrap();

        assert_eq!(read_file(&path).unwrap(), b"hello".to_vec());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("note.md");

        let result = write_file(&path, "hello");

        assert!(matches!(result, Err(TilError::Write { .. })));
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("blog").join("docs");

        create_directory(&nested).unwrap();
        create_directory(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
