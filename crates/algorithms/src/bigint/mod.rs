//! Arbitrary-precision integer helpers
//!
//! Thin layer over `num-bigint` providing the operations the curve
//! arithmetic and the codecs need: a remainder normalized to `[0, n)`,
//! the extended Euclidean modular inverse, fixed-width big-endian byte
//! conversion, and an unbiased uniform draw from a closed interval.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Unique integer `m` in `[0, n)` with `m ≡ x (mod n)`.
///
/// Unlike the `%` operator, the result is non-negative for negative `x`.
/// The modulus `n` must be positive.
pub fn modulo(x: &BigInt, n: &BigInt) -> BigInt {
    let r = x % n;
    if r.is_negative() {
        r + n
    } else {
        r
    }
}

/// Modular inverse of `x` modulo `n` via the extended Euclidean algorithm.
///
/// Returns `0` for `x ≡ 0 (mod n)` by convention; callers must not depend
/// on the result at zero.
pub fn inv(x: &BigInt, n: &BigInt) -> BigInt {
    if modulo(x, n).is_zero() {
        return BigInt::zero();
    }
    let mut lm = BigInt::one();
    let mut hm = BigInt::zero();
    let mut low = modulo(x, n);
    let mut high = n.clone();
    while low > BigInt::one() {
        let q = &high / &low;
        let nm = &hm - &lm * &q;
        let new = &high - &low * &q;
        hm = lm;
        high = low;
        lm = nm;
        low = new;
    }
    modulo(&lm, n)
}

/// Uniform random integer in the closed interval `[min, max]`.
///
/// Draws `⌈bits/8⌉` bytes from `rng`, interprets them little-endian, masks
/// down to the smallest power-of-two window covering the range, and
/// rejects-and-retries values past the upper bound. Masking instead of
/// modulo-reduction keeps the draw unbiased; fewer than two retries are
/// expected on average.
pub fn between<R: CryptoRng + RngCore>(min: &BigInt, max: &BigInt, rng: &mut R) -> Result<BigInt> {
    validate::parameter(min <= max, "between", "empty interval: min > max")?;

    let range = (max - min) + 1u8;
    let range = range
        .to_biguint()
        .expect("range of a non-empty interval is positive");
    let mask_bits = (&range - 1u8).bits();
    let byte_count = ((mask_bits + 7) / 8) as usize;
    let mask: BigUint = (BigUint::one() << mask_bits) - 1u8;

    let mut buf = vec![0u8; byte_count];
    loop {
        rng.fill_bytes(&mut buf);
        let candidate = BigUint::from_bytes_le(&buf) & &mask;
        if candidate < range {
            buf.zeroize();
            return Ok(min + BigInt::from(candidate));
        }
    }
}

/// Fixed-width big-endian encoding of a non-negative integer,
/// left-padded with zero bytes.
pub fn to_fixed_be(x: &BigInt, length: usize) -> Result<Vec<u8>> {
    validate::parameter(!x.is_negative(), "to_fixed_be", "value must be non-negative")?;
    let (_, bytes) = x.to_bytes_be();
    validate::max_length("fixed-width integer", bytes.len(), length)?;
    let mut out = vec![0u8; length];
    out[length - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Big-endian bytes to a non-negative integer.
pub fn from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}
