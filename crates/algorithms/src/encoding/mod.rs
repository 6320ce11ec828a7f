//! ASN.1 DER codec and PEM framing
//!
//! Only the DER shapes ECDSA envelopes need are supported: INTEGER,
//! BIT STRING, OCTET STRING, OBJECT IDENTIFIER, SEQUENCE and
//! context-specific constructed tags. Values are modeled as a small typed
//! AST ([`Asn1`]); the encoder serializes an AST to bytes and the decoder
//! parses bytes back into an AST plus the unconsumed remainder.

pub mod der;
pub mod pem;

pub use der::{decode, decode_full, encode, Asn1};
pub use pem::{decode_pem, encode_pem};

#[cfg(test)]
mod tests;
