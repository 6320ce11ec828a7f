//! Core arithmetic and codecs for ECDSA over short Weierstrass curves
//!
//! This crate provides the three building blocks the signature layer is
//! assembled from:
//!
//! - arbitrary-precision modular arithmetic and unbiased random sampling
//!   ([`bigint`]),
//! - Jacobian-coordinate point arithmetic and the curve registry ([`ec`]),
//! - a self-contained ASN.1 DER codec with PEM framing ([`encoding`]).
//!
//! The arithmetic is deliberately variable-time: scalars are processed bit
//! by bit and nonces are drawn by rejection sampling. Callers that need
//! side-channel resistance must use a hardened implementation instead.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Arbitrary-precision integer helpers
pub mod bigint;

// Elliptic curve primitives
pub mod ec;
pub use ec::{curve, AffinePoint, Curve};

// ASN.1 DER and PEM codecs
pub mod encoding;
pub use encoding::{der, pem, Asn1};
