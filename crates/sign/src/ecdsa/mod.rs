//! ECDSA signature generation and verification
//!
//! Implements the textbook ECDSA equations over the registry curves:
//!
//! 1. `e = HASH(M)` interpreted as a big-endian integer
//! 2. draw `k` uniformly from `[1, n-1]`
//! 3. `r = (k·G).x mod n`; redraw `k` if `r = 0`
//! 4. `s = k⁻¹(e + r·d) mod n`; redraw `k` if `s = 0`
//!
//! The nonce is drawn fresh from the thread-local CSPRNG on every call;
//! signatures are therefore randomized, not deterministic.

pub mod keys;
pub mod signature;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::thread_rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use algorithms::bigint::{between, from_be_bytes, inv, modulo, to_fixed_be};
use algorithms::ec::{add, multiply};

use crate::error::Result;
use self::keys::{PrivateKey, PublicKey};
use self::signature::Signature;

/// Sign `message` with SHA-256.
pub fn sign(message: &[u8], private_key: &PrivateKey) -> Result<Signature> {
    sign_with_digest::<Sha256>(message, private_key)
}

/// Sign `message`, hashing with an arbitrary digest.
pub fn sign_with_digest<D: Digest>(
    message: &[u8],
    private_key: &PrivateKey,
) -> Result<Signature> {
    let curve = private_key.curve;
    let n = &curve.n;
    let digest = D::digest(message);
    let e = from_be_bytes(digest.as_slice());

    let mut rng = thread_rng();
    loop {
        let k = between(&BigInt::one(), &(n - 1u8), &mut rng)
            .expect("curve order exceeds one");
        let kg = multiply(&curve.g, &k, curve);
        let Some((x, _)) = kg.coordinates() else {
            continue;
        };
        let r = modulo(x, n);
        if r.is_zero() {
            continue;
        }
        let s = modulo(&(inv(&k, n) * (&e + &r * &private_key.secret)), n);
        if s.is_zero() {
            continue;
        }
        return Ok(Signature::new(r, s));
    }
}

/// Verify a SHA-256 signature over `message`.
pub fn verify(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    verify_with_digest::<Sha256>(message, signature, public_key)
}

/// Verify a signature over `message`, hashing with an arbitrary digest.
///
/// Returns `false` for any shape failure: scalars outside `[1, n-1]`, a
/// verification point at infinity, or a mismatched `x` coordinate.
pub fn verify_with_digest<D: Digest>(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
) -> bool {
    let curve = public_key.curve;
    let n = &curve.n;
    let r = &signature.r;
    let s = &signature.s;

    let one = BigInt::one();
    let n_minus_one = n - 1u8;
    if *r < one || *r > n_minus_one || *s < one || *s > n_minus_one {
        return false;
    }

    let digest = D::digest(message);
    let e = from_be_bytes(digest.as_slice());
    let w = inv(s, n);
    let u1 = modulo(&(&e * &w), n);
    let u2 = modulo(&(r * &w), n);
    let v = add(
        &multiply(&curve.g, &u1, curve),
        &multiply(&public_key.point, &u2, curve),
        curve,
    );
    let Some((x, _)) = v.coordinates() else {
        return false;
    };
    let vx = modulo(x, n);

    let length = curve.length();
    match (to_fixed_be(&vx, length), to_fixed_be(r, length)) {
        (Ok(left), Ok(right)) => bool::from(left.as_slice().ct_eq(right.as_slice())),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
