//! Short Weierstrass elliptic curve primitives
//!
//! Points are kept in affine coordinates at the API boundary and moved
//! into Jacobian coordinates internally so that doubling and addition
//! need no per-step field inversion. The scalar multiplier is a plain
//! double-and-add walk over the bits of the scalar; it is variable-time.

mod point;
pub use point::{add, multiply, AffinePoint};

pub mod curve;
pub use curve::Curve;

#[cfg(test)]
mod tests;
