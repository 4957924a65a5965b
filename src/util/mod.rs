// Utility Module - Main module file
// Input loading: raw files and PEM public key containers

pub mod file_ops;
pub mod pubkey;

pub use file_ops::{read_file, read_integer, FileError, FileResult};
pub use pubkey::{read_public_key, PublicKeyInfo};
