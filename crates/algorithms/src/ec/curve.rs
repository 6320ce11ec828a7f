//! Curve parameter records and the process-wide curve registry
//!
//! Each supported curve is materialized once from the raw constants in
//! `ecrypt-params` and kept as an immutable static. Lookups go through
//! registry maps keyed by printable name and by ASN.1 OID, so adding a
//! curve means adding one record and two map entries, not another match
//! arm in every consumer.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::bigint::modulo;
use crate::ec::point::AffinePoint;
use crate::error::{Error, Result};

/// Immutable domain parameters of a short Weierstrass curve
/// `y² = x³ + ax + b (mod p)`.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Printable curve name (`secp256k1`, `prime256v1`)
    pub name: &'static str,
    /// ASN.1 object identifier arcs of the named curve
    pub oid: &'static [u64],
    /// Coefficient `a`
    pub a: BigInt,
    /// Coefficient `b`
    pub b: BigInt,
    /// Field prime `p`
    pub p: BigInt,
    /// Order `n` of the base point
    pub n: BigInt,
    /// Base point `G`
    pub g: AffinePoint,
}

impl Curve {
    /// Whether `point` is a finite point on this curve: both coordinates
    /// in `[0, p)` and `y² ≡ x³ + ax + b (mod p)`.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        let (x, y) = match point.coordinates() {
            Some(coordinates) => coordinates,
            None => return false,
        };
        if x < &BigInt::zero() || x >= &self.p || y < &BigInt::zero() || y >= &self.p {
            return false;
        }
        modulo(&(y * y - (x * x * x + &self.a * x + &self.b)), &self.p).is_zero()
    }

    /// Byte length of a field element / scalar: `⌈bitlen(n)/8⌉`.
    pub fn length(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }
}

fn bigint_from_hex(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).expect("curve constants are valid hexadecimal")
}

fn curve_from_params(
    name: &'static str,
    oid: &'static [u64],
    a: &str,
    b: &str,
    p: &str,
    n: &str,
    gx: &str,
    gy: &str,
) -> Curve {
    Curve {
        name,
        oid,
        a: bigint_from_hex(a),
        b: bigint_from_hex(b),
        p: bigint_from_hex(p),
        n: bigint_from_hex(n),
        g: AffinePoint::new(bigint_from_hex(gx), bigint_from_hex(gy)),
    }
}

/// The Koblitz curve secp256k1
pub static SECP256K1: Lazy<Curve> = Lazy::new(|| {
    curve_from_params(
        params::secp256k1::NAME,
        params::secp256k1::OID,
        params::secp256k1::A,
        params::secp256k1::B,
        params::secp256k1::P,
        params::secp256k1::N,
        params::secp256k1::GX,
        params::secp256k1::GY,
    )
});

/// NIST P-256, known to OpenSSL as prime256v1
pub static PRIME256V1: Lazy<Curve> = Lazy::new(|| {
    curve_from_params(
        params::prime256v1::NAME,
        params::prime256v1::OID,
        params::prime256v1::A,
        params::prime256v1::B,
        params::prime256v1::P,
        params::prime256v1::N,
        params::prime256v1::GX,
        params::prime256v1::GY,
    )
});

static BY_NAME: Lazy<HashMap<&'static str, &'static Curve>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for curve in registry() {
        m.insert(curve.name, curve);
    }
    m
});

static BY_OID: Lazy<HashMap<&'static [u64], &'static Curve>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for curve in registry() {
        m.insert(curve.oid, curve);
    }
    m
});

/// All curves the library ships with.
pub fn registry() -> Vec<&'static Curve> {
    vec![Lazy::force(&SECP256K1), Lazy::force(&PRIME256V1)]
}

/// Look a curve up by its printable name.
pub fn by_name(name: &str) -> Result<&'static Curve> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| Error::param("curve", format!("unknown curve '{}'", name)))
}

/// Look a curve up by its ASN.1 object identifier.
pub fn by_oid(oid: &[u64]) -> Result<&'static Curve> {
    BY_OID.get(oid).copied().ok_or_else(|| {
        let arcs: Vec<String> = oid.iter().map(|arc| arc.to_string()).collect();
        Error::param("curve", format!("unknown curve oid {}", arcs.join(".")))
    })
}
