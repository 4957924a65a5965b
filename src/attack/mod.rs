// Attack Module - Main module file
// Exports the low-exponent attack strategies and their number theory

pub mod bigint;
pub mod broadcast;
pub mod crt;
pub mod error;
pub mod trivial;

// Re-export commonly used items
pub use bigint::{extended_gcd, from_bytes, integer_root, mod_inverse, to_bytes};
pub use broadcast::BroadcastAttack;
pub use crt::combine;
pub use error::{Error, Result};
pub use trivial::TrivialAttack;

/// Attack parameters, fixed before an attack is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackConfig {
    /// Public exponent the ciphertexts were produced under, at least 1
    pub exponent: u32,
}

impl AttackConfig {
    pub fn new(exponent: u32) -> Self {
        Self { exponent }
    }
}

impl Default for AttackConfig {
    /// e = 3, the classic vulnerable exponent
    fn default() -> Self {
        Self { exponent: 3 }
    }
}
