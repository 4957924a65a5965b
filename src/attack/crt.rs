// Chinese Remainder Theorem
// Reconstructs a value from its residues under pairwise-coprime moduli

use num_bigint::BigUint;
use num_traits::Zero;

use super::bigint::mod_inverse;
use super::error::Result;

/// Reconstruct the unique value modulo the product of `moduli` from its
/// residues, where `residues[i]` is the value mod `moduli[i]`.
///
/// The moduli must be pairwise coprime; a shared factor surfaces as a
/// `NonInvertible` error from the inverse computation. Matching sequence
/// lengths are the caller's responsibility.
pub fn combine(residues: &[BigUint], moduli: &[BigUint]) -> Result<BigUint> {
    let product: BigUint = moduli.iter().product();
    let mut sum = BigUint::zero();

    for (residue, modulus) in residues.iter().zip(moduli) {
        let cofactor = &product / modulus;
        sum += residue * &cofactor * mod_inverse(&cofactor, modulus)?;
    }

    Ok(sum % product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::error::Error;

    fn big_vec(values: &[u32]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn test_combine_textbook() {
        // x ≡ 2 mod 3, 3 mod 5, 2 mod 7 has the unique solution 23 mod 105
        let combined = combine(&big_vec(&[2, 3, 2]), &big_vec(&[3, 5, 7])).unwrap();
        assert_eq!(combined, BigUint::from(23u32));
    }

    #[test]
    fn test_combine_recovers_residues() {
        let residues = big_vec(&[5, 11, 4, 0]);
        let moduli = big_vec(&[7, 13, 9, 11]);

        let combined = combine(&residues, &moduli).unwrap();
        for (residue, modulus) in residues.iter().zip(&moduli) {
            assert_eq!(&combined % modulus, *residue);
        }

        let product: BigUint = moduli.iter().product();
        assert!(combined < product);
    }

    #[test]
    fn test_combine_single_modulus() {
        let combined = combine(&big_vec(&[4]), &big_vec(&[9])).unwrap();
        assert_eq!(combined, BigUint::from(4u32));
    }

    #[test]
    fn test_combine_shared_factor() {
        // 6 and 9 share the factor 3, so 54/6 = 9 has no inverse mod 6
        let err = combine(&big_vec(&[1, 2]), &big_vec(&[6, 9])).unwrap_err();
        assert!(matches!(err, Error::NonInvertible { .. }));
    }
}
