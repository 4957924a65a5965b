// File Operations
// Loads ciphertext bytes and key material for the attacks

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use thiserror::Error;

/// Errors that can occur while loading attack inputs
#[derive(Debug, Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{}: not a readable RSA public key: {reason}", .path.display())]
    KeyDecode { path: PathBuf, reason: String },
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Read entire file into memory
pub fn read_file(path: &Path) -> FileResult<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Read a file and interpret its raw bytes as one big-endian integer.
/// An empty file reads as zero.
pub fn read_integer(path: &Path) -> FileResult<BigUint> {
    Ok(BigUint::from_bytes_be(&read_file(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rsa_lowexp_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_read_file() {
        let path = temp_path("read_file");
        fs::write(&path, b"hi").unwrap();
        let data = read_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(data, b"hi".to_vec());
    }

    #[test]
    fn test_read_integer() {
        let path = temp_path("read_integer");
        fs::write(&path, b"hi").unwrap();
        let value = read_integer(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(value, BigUint::from(26729u32));
    }

    #[test]
    fn test_read_integer_empty_file() {
        let path = temp_path("read_integer_empty");
        fs::write(&path, b"").unwrap();
        let value = read_integer(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(value, BigUint::from(0u8));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_integer(Path::new("/nonexistent/rsa_lowexp_input")).unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }
}
