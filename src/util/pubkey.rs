// Public Key Loading
// Extracts the modulus and exponent from PEM RSA public key files

use std::fs;
use std::path::Path;

use log::info;
use num_bigint::BigUint;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use super::file_ops::{FileError, FileResult};

/// Modulus and exponent pulled out of a public key container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub modulus: BigUint,
    pub exponent: BigUint,
}

/// Read a PEM RSA public key. Accepts the SubjectPublicKeyInfo form
/// ("BEGIN PUBLIC KEY") and falls back to PKCS#1 ("BEGIN RSA PUBLIC KEY").
pub fn read_public_key(path: &Path) -> FileResult<PublicKeyInfo> {
    let pem = fs::read_to_string(path)?;
    let key = RsaPublicKey::from_public_key_pem(&pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(&pem))
        .map_err(|e| FileError::KeyDecode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // The rsa crate carries num-bigint-dig values; rebuild them as num-bigint
    let info = PublicKeyInfo {
        modulus: BigUint::from_bytes_be(&key.n().to_bytes_be()),
        exponent: BigUint::from_bytes_be(&key.e().to_bytes_be()),
    };
    info!("{}: public exponent is {}", path.display(), info.exponent);
    Ok(info)
}
