// Attack Error Types
// Failure kinds shared by both attack strategies

use num_bigint::BigUint;

/// Errors raised by an attack run. Every variant is a violated
/// cryptanalytic precondition: the run aborts, nothing is retried.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The trivial attack was asked to exploit before any ciphertext was set.
    #[error("no input ciphertext")]
    MissingCiphertext,

    /// The broadcast sanity check rejected the observations.
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// A modular inverse was requested for a value sharing a factor with the
    /// modulus. Surfaces from CRT combination when moduli are not actually
    /// pairwise coprime.
    #[error("{value} is not invertible modulo {modulus}")]
    NonInvertible { value: BigUint, modulus: BigUint },
}

/// Result type for attack operations
pub type Result<T> = std::result::Result<T, Error>;
