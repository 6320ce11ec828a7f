//! # ecrypt
//!
//! A pure-Rust ECDSA library: key generation, signing, verification and
//! OpenSSL-compatible DER / PEM / Base64 serialization over secp256k1 and
//! prime256v1.
//!
//! ## Usage
//!
//! ```
//! use ecrypt::prelude::*;
//!
//! let private_key = PrivateKey::generate(&SECP256K1);
//! let public_key = private_key.public_key();
//!
//! let message = b"{\"amount\": 100, \"to\": \"alice\"}";
//! let signature = sign(message, &private_key).unwrap();
//! assert!(verify(message, &signature, &public_key));
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `ecrypt-params`: raw curve constants
//! - `ecrypt-algorithms`: bignum helpers, point arithmetic, DER/PEM codecs
//! - `ecrypt-sign`: key types, the signature type, sign/verify

pub use ecrypt_algorithms as algorithms;
pub use ecrypt_params as params;
pub use ecrypt_sign as sign;

/// Common imports for ecrypt users
pub mod prelude {
    pub use crate::algorithms::ec::curve::{by_name, by_oid, PRIME256V1, SECP256K1};
    pub use crate::algorithms::ec::AffinePoint;
    pub use crate::algorithms::Curve;
    pub use crate::sign::{sign, verify, PrivateKey, PublicKey, Signature};
}
