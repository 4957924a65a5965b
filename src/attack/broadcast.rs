// Hastad Broadcast Attack
// Recovers one plaintext sent to several recipients under coprime moduli

use std::path::Path;

use log::{debug, warn};
use num_bigint::BigUint;

use super::bigint::{integer_root, to_bytes};
use super::crt;
use super::error::{Error, Result};
use super::AttackConfig;
use crate::util::file_ops::{read_integer, FileResult};
use crate::util::pubkey::read_public_key;

/// Broadcast attack state: index-aligned ciphertexts and moduli accumulated
/// before the exploit runs.
///
/// When the same plaintext is encrypted under e pairwise-coprime moduli whose
/// product exceeds m^e, the CRT-combined residues equal m^e exactly and the
/// plaintext falls out as the integer e-th root.
#[derive(Debug, Clone)]
pub struct BroadcastAttack {
    ciphertexts: Vec<BigUint>,
    moduli: Vec<BigUint>,
    config: AttackConfig,
}

impl BroadcastAttack {
    /// Create an empty attack; observations are accumulated afterwards
    pub fn new(config: AttackConfig) -> Self {
        Self {
            ciphertexts: Vec::new(),
            moduli: Vec::new(),
            config,
        }
    }

    /// Create an attack from (ciphertext, modulus) pairs
    pub fn from_pairs<I>(pairs: I, config: AttackConfig) -> Self
    where
        I: IntoIterator<Item = (BigUint, BigUint)>,
    {
        let mut attack = Self::new(config);
        for (ciphertext, modulus) in pairs {
            attack.observe(ciphertext, modulus);
        }
        attack
    }

    /// Record one observation: a ciphertext and the modulus it was made under
    pub fn observe(&mut self, ciphertext: BigUint, modulus: BigUint) {
        self.ciphertexts.push(ciphertext);
        self.moduli.push(modulus);
    }

    /// Record a ciphertext alone, read from a file of raw big-endian bytes
    pub fn load_ciphertext(&mut self, path: &Path) -> FileResult<()> {
        self.ciphertexts.push(read_integer(path)?);
        Ok(())
    }

    /// Record a modulus alone, pulled from a PEM public key file.
    /// A key exponent that differs from the configured one is only warned
    /// about; the attack still runs with the configured exponent.
    pub fn load_modulus(&mut self, path: &Path) -> FileResult<()> {
        let key = read_public_key(path)?;
        if key.exponent != BigUint::from(self.config.exponent) {
            warn!(
                "{}: key exponent {} differs from attack exponent {}",
                path.display(),
                key.exponent,
                self.config.exponent
            );
        }
        self.moduli.push(key.modulus);
        Ok(())
    }

    /// Number of complete observations recorded so far
    pub fn observations(&self) -> usize {
        self.ciphertexts.len().min(self.moduli.len())
    }

    // Sequences must align and every modulus must strictly exceed its
    // ciphertext. Pairwise coprimality is NOT verified; a shared factor
    // shows up later as a NonInvertible error or a garbled root.
    fn sanity_check(&self) -> Result<()> {
        if self.ciphertexts.len() != self.moduli.len() {
            return Err(Error::BadArgument(format!(
                "{} ciphertexts against {} moduli",
                self.ciphertexts.len(),
                self.moduli.len()
            )));
        }

        for (index, (ciphertext, modulus)) in
            self.ciphertexts.iter().zip(&self.moduli).enumerate()
        {
            if modulus <= ciphertext {
                return Err(Error::BadArgument(format!(
                    "modulus #{} does not exceed its ciphertext",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// Recover the plaintext bytes: CRT-combine the observations, then take
    /// the integer e-th root of the combined value
    pub fn exploit(&self) -> Result<Vec<u8>> {
        self.sanity_check()?;

        let exponent = self.config.exponent;
        if self.ciphertexts.len() < exponent as usize {
            warn!(
                "only {} observation(s) for exponent {}; the combined value may fall short of m^{}",
                self.ciphertexts.len(),
                exponent,
                exponent
            );
        }

        let combined = crt::combine(&self.ciphertexts, &self.moduli)?;
        debug!(
            "combined {} observations into a {}-bit value",
            self.ciphertexts.len(),
            combined.bits()
        );

        Ok(to_bytes(&integer_root(&combined, exponent)))
    }
}
