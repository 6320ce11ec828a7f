//! ECDSA signatures over short Weierstrass curves
//!
//! This crate assembles the arithmetic and codec primitives from
//! `ecrypt-algorithms` into the public signature API: key generation,
//! signing, verification, and OpenSSL-compatible serialization of keys
//! (SEC1 / SubjectPublicKeyInfo, DER and PEM) and signatures (DER and
//! Base64).

#![forbid(unsafe_code)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::keys::{PrivateKey, PublicKey};
pub use ecdsa::signature::Signature;
pub use ecdsa::{sign, sign_with_digest, verify, verify_with_digest};
pub use error::{Error, Result};
