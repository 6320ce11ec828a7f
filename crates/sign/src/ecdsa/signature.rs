//! The `(r, s)` signature pair and its DER / Base64 codecs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use num_bigint::BigInt;

use algorithms::encoding::{decode_full, encode, Asn1};

use crate::error::{Error, Result};

/// An ECDSA signature.
///
/// Scalar ranges are enforced at verification time, not on construction,
/// so foreign signatures can be parsed and inspected even when invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// First signature scalar: `(k·G).x mod n`
    pub r: BigInt,
    /// Second signature scalar: `k⁻¹(e + r·d) mod n`
    pub s: BigInt,
}

impl Signature {
    /// Build a signature from its scalars.
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Signature { r, s }
    }

    /// Serialize to DER: `SEQUENCE { INTEGER r, INTEGER s }`.
    ///
    /// Fails if either scalar is negative: DER INTEGERs in signatures are
    /// non-negative, and a negative scalar can only come from a hand-built
    /// pair.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        encode(&Asn1::Sequence(vec![
            Asn1::Integer(self.r.clone()),
            Asn1::Integer(self.s.clone()),
        ]))
        .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse a DER signature.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let tree = decode_full(der)?;
        let fields = tree.as_sequence()?;
        if fields.len() != 2 {
            return Err(Error::Deserialization(format!(
                "signature needs r and s, got {} fields",
                fields.len()
            )));
        }
        Ok(Signature {
            r: fields[0].as_integer()?.clone(),
            s: fields[1].as_integer()?.clone(),
        })
    }

    /// The DER signature as Base64.
    ///
    /// Fails under the same conditions as [`Self::to_der`].
    pub fn to_base64(&self) -> Result<String> {
        Ok(BASE64.encode(self.to_der()?))
    }

    /// Parse a Base64 DER signature.
    pub fn from_base64(base64: &str) -> Result<Self> {
        let der = BASE64.decode(base64.trim().as_bytes()).map_err(|e| {
            Error::Deserialization(format!("invalid base64 signature: {}", e))
        })?;
        Self::from_der(&der)
    }
}
