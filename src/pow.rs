use num_bigint::BigUint;
use num_traits::One;

use crate::error::Result;
use crate::mont::{check_modulus, check_precision, mont_multiply};

/// Working precision of [`mod_pow`], in bits.
///
/// Sufficiency is the caller's obligation: operands wider than this fail
/// with [`InsufficientPrecision`](crate::MontError::InsufficientPrecision),
/// and callers targeting larger moduli use [`mod_pow_with_precision`].
pub const DEFAULT_PRECISION_BITS: u64 = 256;

/// Computes `base^exponent mod modulus` at [`DEFAULT_PRECISION_BITS`].
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint> {
    mod_pow_with_precision(base, exponent, modulus, DEFAULT_PRECISION_BITS)
}

/// Square-and-multiply exponentiation run entirely in Montgomery form.
///
/// `modulus` must be odd and the working precision `k` must cover the bit
/// length of all three operands. The loop performs exactly `k` squarings
/// whatever the exponent's actual bit length; leading zero bits only square.
pub fn mod_pow_with_precision(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
    k: u64,
) -> Result<BigUint> {
    check_modulus(modulus)?;
    check_precision(k, [base, exponent, modulus])?;

    // r² mod n by ordinary reduction, once per call; everything after this
    // line is shift-and-add arithmetic inside the multiplier.
    let one = BigUint::one();
    let r2 = (&one << (2 * k)) % modulus;

    let base_m = mont_multiply(base, &r2, modulus, k)?;
    // The accumulator starts as the Montgomery image of 1.
    let mut acc = mont_multiply(&one, &r2, modulus, k)?;

    for i in (0..k).rev() {
        acc = mont_multiply(&acc, &acc, modulus, k)?;
        if exponent.bit(i) {
            acc = mont_multiply(&base_m, &acc, modulus, k)?;
        }
    }

    // Multiplying by 1 strips the factor of r again.
    mont_multiply(&acc, &one, modulus, k)
}
