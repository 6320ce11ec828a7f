//! Parameter constants for the supported elliptic curves
//!
//! This crate holds the raw domain parameters of the short Weierstrass
//! curves the library ships with, embedded literally from the SEC 2 and
//! FIPS 186-4 standards. Everything here is a plain constant; the typed
//! curve records are built from these values by `ecrypt-algorithms`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod prime256v1;
pub mod secp256k1;

/// ASN.1 object identifier for `id-ecPublicKey` (RFC 5480): 1.2.840.10045.2.1
pub const EC_PUBLIC_KEY_OID: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// PEM label used for SEC1 `ECPrivateKey` envelopes
pub const EC_PRIVATE_KEY_PEM_LABEL: &str = "EC PRIVATE KEY";

/// PEM label used for `SubjectPublicKeyInfo` envelopes
pub const PUBLIC_KEY_PEM_LABEL: &str = "PUBLIC KEY";

/// PEM label of the `EC PARAMETERS` block `openssl ecparam` emits ahead of
/// the private key
pub const EC_PARAMETERS_PEM_LABEL: &str = "EC PARAMETERS";
