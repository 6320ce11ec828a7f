//! Point arithmetic in affine and Jacobian coordinates

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::bigint::{inv, modulo};
use crate::ec::curve::Curve;

/// A point on a short Weierstrass curve in affine coordinates.
///
/// The group identity is carried as an explicit variant rather than a
/// `y = 0` sentinel, so arithmetic never has to guess whether a zero
/// coordinate means "at infinity".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AffinePoint {
    /// The point at infinity, identity of the curve group
    Infinity,
    /// A finite point with coordinates reduced modulo the field prime
    Point {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl AffinePoint {
    /// Construct a finite point from its coordinates.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        AffinePoint::Point { x, y }
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Coordinates of a finite point, `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Point { x, y } => Some((x, y)),
        }
    }
}

/// A point in Jacobian coordinates: `(X, Y, Z)` represents the affine
/// point `(X/Z², Y/Z³)`.
#[derive(Clone, Debug)]
pub(crate) enum JacobianPoint {
    Infinity,
    Point { x: BigInt, y: BigInt, z: BigInt },
}

impl JacobianPoint {
    pub(crate) fn from_affine(point: &AffinePoint) -> Self {
        match point {
            AffinePoint::Infinity => JacobianPoint::Infinity,
            AffinePoint::Point { x, y } => JacobianPoint::Point {
                x: x.clone(),
                y: y.clone(),
                z: BigInt::one(),
            },
        }
    }

    pub(crate) fn to_affine(&self, p: &BigInt) -> AffinePoint {
        match self {
            JacobianPoint::Infinity => AffinePoint::Infinity,
            JacobianPoint::Point { x, y, z } => {
                let z_inv = inv(z, p);
                let z_inv_sq = modulo(&(&z_inv * &z_inv), p);
                let z_inv_cu = modulo(&(&z_inv_sq * &z_inv), p);
                AffinePoint::Point {
                    x: modulo(&(x * &z_inv_sq), p),
                    y: modulo(&(y * &z_inv_cu), p),
                }
            }
        }
    }

    /// Point doubling: 2P.
    pub(crate) fn double(&self, a: &BigInt, p: &BigInt) -> JacobianPoint {
        let (x, y, z) = match self {
            JacobianPoint::Infinity => return JacobianPoint::Infinity,
            JacobianPoint::Point { x, y, z } => (x, y, z),
        };
        // A point of order two doubles to the identity.
        if y.is_zero() {
            return JacobianPoint::Infinity;
        }

        let ysq = modulo(&(y * y), p);
        let s = modulo(&(x * &ysq * 4u8), p);
        let z_sq = modulo(&(z * z), p);
        let m = modulo(&(x * x * 3u8 + a * &z_sq * &z_sq), p);

        let nx = modulo(&(&m * &m - &s * 2u8), p);
        let ny = modulo(&(&m * (&s - &nx) - &ysq * &ysq * 8u8), p);
        let nz = modulo(&(y * z * 2u8), p);

        JacobianPoint::Point {
            x: nx,
            y: ny,
            z: nz,
        }
    }

    /// Point addition: P + Q.
    pub(crate) fn add(&self, other: &JacobianPoint, a: &BigInt, p: &BigInt) -> JacobianPoint {
        let (x1, y1, z1) = match self {
            JacobianPoint::Infinity => return other.clone(),
            JacobianPoint::Point { x, y, z } => (x, y, z),
        };
        let (x2, y2, z2) = match other {
            JacobianPoint::Infinity => return self.clone(),
            JacobianPoint::Point { x, y, z } => (x, y, z),
        };

        let z1_sq = modulo(&(z1 * z1), p);
        let z2_sq = modulo(&(z2 * z2), p);
        let u1 = modulo(&(x1 * &z2_sq), p);
        let u2 = modulo(&(x2 * &z1_sq), p);
        let s1 = modulo(&(y1 * &z2_sq * z2), p);
        let s2 = modulo(&(y2 * &z1_sq * z1), p);

        if u1 == u2 {
            if s1 != s2 {
                // P + (-P)
                return JacobianPoint::Infinity;
            }
            return self.double(a, p);
        }

        let h = modulo(&(&u2 - &u1), p);
        let r = modulo(&(&s2 - &s1), p);
        let h_sq = modulo(&(&h * &h), p);
        let h_cu = modulo(&(&h_sq * &h), p);
        let u1_h_sq = modulo(&(&u1 * &h_sq), p);

        let nx = modulo(&(&r * &r - &h_cu - &u1_h_sq * 2u8), p);
        let ny = modulo(&(&r * (&u1_h_sq - &nx) - &s1 * &h_cu), p);
        let nz = modulo(&(&h * z1 * z2), p);

        JacobianPoint::Point {
            x: nx,
            y: ny,
            z: nz,
        }
    }

    /// Double-and-add scalar multiplication: k·P, with `k` already
    /// normalized into `[0, n)`.
    pub(crate) fn multiply(&self, k: &BigInt, a: &BigInt, p: &BigInt) -> JacobianPoint {
        if k.is_zero() {
            return JacobianPoint::Infinity;
        }
        if matches!(self, JacobianPoint::Infinity) {
            return JacobianPoint::Infinity;
        }

        let (_, k_bytes) = k.to_bytes_be();
        let mut result = JacobianPoint::Infinity;
        for byte in k_bytes.iter() {
            for bit_pos in (0..8).rev() {
                result = result.double(a, p);
                if (byte >> bit_pos) & 1 == 1 {
                    result = result.add(self, a, p);
                }
            }
        }
        result
    }
}

/// Affine point addition on `curve`: P + Q.
pub fn add(p: &AffinePoint, q: &AffinePoint, curve: &Curve) -> AffinePoint {
    JacobianPoint::from_affine(p)
        .add(&JacobianPoint::from_affine(q), &curve.a, &curve.p)
        .to_affine(&curve.p)
}

/// Affine scalar multiplication on `curve`: k·P.
///
/// The scalar is reduced modulo the subgroup order first, so any integer
/// (including negative ones) is accepted.
pub fn multiply(point: &AffinePoint, k: &BigInt, curve: &Curve) -> AffinePoint {
    let k = modulo(k, &curve.n);
    JacobianPoint::from_affine(point)
        .multiply(&k, &curve.a, &curve.p)
        .to_affine(&curve.p)
}
