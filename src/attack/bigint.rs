// Attack Big Integer Operations
// Number theory over num-bigint shared by both attack strategies

use std::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::error::{Error, Result};

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Convert a recovered integer back into its byte representation:
/// base-256 digits, most significant byte first, no leading zero byte.
/// Zero encodes as a single zero byte.
pub fn to_bytes(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Floor of the `degree`-th root of `value`, exact at any magnitude.
///
/// Binary search over [1, value]: `lo` always satisfies `lo^degree <= value`
/// and `hi` always violates it (or is `value` itself). Converges in
/// O(log value) steps, each one big-integer exponentiation.
pub fn integer_root(value: &BigUint, degree: u32) -> BigUint {
    // The search starts at lo = 1, which would misreport a root of 1 for 0
    if value.is_zero() {
        return BigUint::zero();
    }
    if degree == 1 {
        return value.clone();
    }

    let mut lo = BigUint::one();
    let mut hi = value.clone();
    while hi > &lo + 1u8 {
        let mid: BigUint = (&lo + &hi) >> 1;
        if mid.pow(degree) <= *value {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Iterative extended Euclidean algorithm
/// Returns (g, x) such that a*x + b*y = g for some y, with g the
/// non-negative gcd; x is sign-corrected for a negative `a`
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let mut last_remainder = a.abs();
    let mut remainder = b.abs();
    let (mut x, mut last_x) = (BigInt::zero(), BigInt::one());

    while !remainder.is_zero() {
        let (quotient, next_remainder) = last_remainder.div_rem(&remainder);
        last_remainder = mem::replace(&mut remainder, next_remainder);
        let next_x = &last_x - &quotient * &x;
        last_x = mem::replace(&mut x, next_x);
    }

    let coefficient = if a.is_negative() { -last_x } else { last_x };
    (last_remainder, coefficient)
}

/// Compute value^(-1) mod modulus, normalized into [0, modulus)
/// Fails with NonInvertible when gcd(value, modulus) != 1
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let (g, x) = extended_gcd(
        &BigInt::from(value.clone()),
        &BigInt::from(modulus.clone()),
    );

    if !g.is_one() {
        return Err(Error::NonInvertible {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    Ok(x.mod_floor(&BigInt::from(modulus.clone())).magnitude().clone())
}
