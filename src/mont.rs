use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{MontError, Result};

/// Bit-serial Montgomery multiplication: `a * b * r⁻¹ mod n` for `r = 2^k`,
/// using only additions, parity tests and shifts.
///
/// `n` must be odd, and `k` must cover the bit length of `a`, `b` and `n`
/// (bits of `a` at positions `k` and above are never consulted, so a wider
/// operand would silently change the result rather than lose precision).
/// For operands reduced below `n` the result satisfies `0 <= result < n`.
///
/// The loop always runs exactly `k` iterations with the same add/halve
/// structure regardless of operand values; do not add early exits here.
pub fn mont_multiply(
    a: &BigUint,
    b: &BigUint,
    n: &BigUint,
    k: u64,
) -> Result<BigUint> {
    check_modulus(n)?;
    check_precision(k, [a, b, n])?;

    let mut u = BigUint::zero();
    for i in 0..k {
        if a.bit(i) {
            u += b;
        }
        // n is odd, so adding it to an odd u clears the low bit and the
        // halving below is exact.
        if u.bit(0) {
            u += n;
        }
        u >>= 1;
    }
    // The loop keeps u < b + n, so one subtraction reduces it.
    if &u >= n {
        u -= n;
    }

    Ok(u)
}

/// Montgomery reduction requires gcd(n, 2^k) = 1, i.e. an odd modulus.
pub(crate) fn check_modulus(n: &BigUint) -> Result<()> {
    if n.bit(0) {
        Ok(())
    } else {
        Err(MontError::InvalidModulus)
    }
}

/// Reject operands wider than the working precision up front; the bit-serial
/// loops would otherwise truncate them into a wrong answer.
pub(crate) fn check_precision<'a>(
    k: u64,
    operands: impl IntoIterator<Item = &'a BigUint>,
) -> Result<()> {
    let required = operands.into_iter().map(BigUint::bits).max().unwrap_or(0);
    if k >= required {
        Ok(())
    } else {
        Err(MontError::InsufficientPrecision {
            required,
            provided: k,
        })
    }
}
