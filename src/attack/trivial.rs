// Trivial Low-Exponent Attack
// Recovers the plaintext when m^e never wrapped around the modulus

use std::path::Path;

use num_bigint::BigUint;

use super::bigint::{integer_root, to_bytes};
use super::error::{Error, Result};
use super::AttackConfig;
use crate::util::file_ops::{read_integer, FileResult};

/// Single-observation attack for the case where the plaintext raised to the
/// public exponent stayed below the modulus. No reduction ever happened, so
/// the ciphertext is a plain integer power and the plaintext is its exact
/// e-th root.
#[derive(Debug, Clone)]
pub struct TrivialAttack {
    ciphertext: Option<BigUint>,
    config: AttackConfig,
}

impl TrivialAttack {
    /// Create an attack with no ciphertext yet
    pub fn new(config: AttackConfig) -> Self {
        Self {
            ciphertext: None,
            config,
        }
    }

    /// Create an attack over an already-decoded ciphertext integer
    pub fn from_integer(ciphertext: BigUint, config: AttackConfig) -> Self {
        Self {
            ciphertext: Some(ciphertext),
            config,
        }
    }

    /// Set the ciphertext directly
    pub fn set_ciphertext(&mut self, ciphertext: BigUint) {
        self.ciphertext = Some(ciphertext);
    }

    /// Read the ciphertext from a file holding its raw big-endian bytes
    pub fn load_ciphertext(&mut self, path: &Path) -> FileResult<()> {
        self.ciphertext = Some(read_integer(path)?);
        Ok(())
    }

    /// Recover the plaintext bytes as the exact e-th root of the ciphertext
    pub fn exploit(&self) -> Result<Vec<u8>> {
        let ciphertext = self
            .ciphertext
            .as_ref()
            .ok_or(Error::MissingCiphertext)?;
        Ok(to_bytes(&integer_root(ciphertext, self.config.exponent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_exploit_recovers_plaintext() {
        let message = BigUint::from(26729u32); // b"hi"
        let attack = TrivialAttack::from_integer(message.pow(3), AttackConfig::default());
        assert_eq!(attack.exploit().unwrap(), b"hi".to_vec());
    }

    #[test]
    fn test_exploit_with_real_encryption() {
        // A 150-bit modulus dwarfs a 3-byte message cubed, so m^3 mod n = m^3
        let modulus = ((BigUint::one() << 61) - 1u8) * ((BigUint::one() << 89) - 1u8);
        let message = crate::attack::bigint::from_bytes(b"hi!");
        let ciphertext = message.modpow(&BigUint::from(3u8), &modulus);

        let attack = TrivialAttack::from_integer(ciphertext, AttackConfig::default());
        assert_eq!(attack.exploit().unwrap(), b"hi!".to_vec());
    }

    #[test]
    fn test_exploit_without_ciphertext() {
        let attack = TrivialAttack::new(AttackConfig::default());
        assert_eq!(attack.exploit().unwrap_err(), Error::MissingCiphertext);
    }

    #[test]
    fn test_alternate_exponent() {
        let message = BigUint::from(1048573u32);
        let attack = TrivialAttack::from_integer(message.pow(5), AttackConfig::new(5));
        assert_eq!(attack.exploit().unwrap(), to_bytes(&message));
    }

    #[test]
    fn test_load_ciphertext_from_file() {
        let path = std::env::temp_dir()
            .join(format!("rsa_lowexp_trivial_{}", std::process::id()));
        let cube = BigUint::from(26729u32).pow(3);
        std::fs::write(&path, to_bytes(&cube)).unwrap();

        let mut attack = TrivialAttack::new(AttackConfig::new(3));
        attack.load_ciphertext(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(attack.exploit().unwrap(), b"hi".to_vec());
    }

    #[test]
    fn test_set_ciphertext_replaces_previous() {
        let mut attack = TrivialAttack::from_integer(BigUint::from(8u8), AttackConfig::default());
        attack.set_ciphertext(BigUint::from(27u8));
        assert_eq!(attack.exploit().unwrap(), vec![3u8]);
    }
}
