use montmath::prelude::*;
use num_bigint::BigUint;

#[test]
fn textbook_rsa_round_trip() {
    // p = 61, q = 53, n = 3233, e = 17, d = 2753
    let n = BigUint::from(3233u32);
    let e = BigUint::from(17u32);
    let d = BigUint::from(2753u32);
    let message = BigUint::from(65u32);

    let ciphertext = mod_pow(&message, &e, &n).expect("encrypt failed");
    assert_eq!(ciphertext, BigUint::from(2790u32));

    let recovered = mod_pow(&ciphertext, &d, &n).expect("decrypt failed");
    assert_eq!(recovered, message);
}

#[test]
fn fermat_little_theorem_on_a_mersenne_prime() {
    // 2^(p-1) ≡ 1 (mod p) for the prime p = 2^127 - 1
    let p = (BigUint::from(1u32) << 127u32) - 1u32;
    let e = &p - 1u32;

    let x = mod_pow(&BigUint::from(2u32), &e, &p).unwrap();
    assert_eq!(x, BigUint::from(1u32));
}

#[test]
fn multiplier_and_engine_agree_on_a_square() {
    let n = BigUint::from(1000003u32);
    let m = BigUint::from(98765u32);
    let k = DEFAULT_PRECISION_BITS;

    // m² mod n via one round-trip through Montgomery form.
    let one = BigUint::from(1u32);
    let r2 = (&one << (2 * k)) % &n;
    let m_mont = mont_multiply(&m, &r2, &n, k).unwrap();
    let square_mont = mont_multiply(&m_mont, &m_mont, &n, k).unwrap();
    let square = mont_multiply(&square_mont, &one, &n, k).unwrap();

    let via_engine = mod_pow(&m, &BigUint::from(2u32), &n).unwrap();
    assert_eq!(square, via_engine);
}

#[test]
fn even_modulus_is_rejected_by_both_operations() {
    let even = BigUint::from(1024u32);
    let a = BigUint::from(3u32);
    let b = BigUint::from(4u32);

    assert_eq!(
        mont_multiply(&a, &b, &even, 16).unwrap_err(),
        MontError::InvalidModulus
    );
    assert_eq!(
        mod_pow(&a, &b, &even).unwrap_err(),
        MontError::InvalidModulus
    );
}
