//! X.690 DER encoding and decoding

use num_bigint::{BigInt, Sign};
use num_traits::Signed;

use crate::error::{Error, Result};

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_OBJECT_IDENTIFIER: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;
const TAG_CONSTRUCTED_BASE: u8 = 0xA0;

/// A DER value.
///
/// `BitString` holds the payload bits only; the codec adds and strips the
/// leading unused-bits byte (always `0x00` for the byte-aligned strings
/// ECDSA uses). `Constructed` carries the context-specific tag number of
/// an `[n]` wrapper together with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asn1 {
    /// SEQUENCE (tag 0x30)
    Sequence(Vec<Asn1>),
    /// INTEGER (tag 0x02), non-negative in every shape this library emits
    Integer(BigInt),
    /// BIT STRING (tag 0x03), payload without the unused-bits byte
    BitString(Vec<u8>),
    /// OCTET STRING (tag 0x04)
    OctetString(Vec<u8>),
    /// OBJECT IDENTIFIER (tag 0x06) as its sequence of arcs
    Oid(Vec<u64>),
    /// Context-specific constructed value `[n]` (tags 0xA0..=0xBF)
    Constructed(u8, Vec<Asn1>),
}

impl Asn1 {
    fn tag(&self) -> u8 {
        match self {
            Asn1::Sequence(_) => TAG_SEQUENCE,
            Asn1::Integer(_) => TAG_INTEGER,
            Asn1::BitString(_) => TAG_BIT_STRING,
            Asn1::OctetString(_) => TAG_OCTET_STRING,
            Asn1::Oid(_) => TAG_OBJECT_IDENTIFIER,
            Asn1::Constructed(n, _) => TAG_CONSTRUCTED_BASE | (n & 0x1F),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Asn1::Sequence(_) => "sequence",
            Asn1::Integer(_) => "integer",
            Asn1::BitString(_) => "bit string",
            Asn1::OctetString(_) => "octet string",
            Asn1::Oid(_) => "object identifier",
            Asn1::Constructed(_, _) => "constructed",
        }
    }

    /// The children of a SEQUENCE, or a `wanted sequence` error.
    pub fn as_sequence(&self) -> Result<&[Asn1]> {
        match self {
            Asn1::Sequence(children) => Ok(children),
            other => Err(wanted("sequence", TAG_SEQUENCE, other)),
        }
    }

    /// The value of an INTEGER, or a `wanted integer` error.
    pub fn as_integer(&self) -> Result<&BigInt> {
        match self {
            Asn1::Integer(value) => Ok(value),
            other => Err(wanted("integer", TAG_INTEGER, other)),
        }
    }

    /// The payload of a BIT STRING, or a `wanted bit string` error.
    pub fn as_bit_string(&self) -> Result<&[u8]> {
        match self {
            Asn1::BitString(bytes) => Ok(bytes),
            other => Err(wanted("bit string", TAG_BIT_STRING, other)),
        }
    }

    /// The payload of an OCTET STRING, or a `wanted octet string` error.
    pub fn as_octet_string(&self) -> Result<&[u8]> {
        match self {
            Asn1::OctetString(bytes) => Ok(bytes),
            other => Err(wanted("octet string", TAG_OCTET_STRING, other)),
        }
    }

    /// The arcs of an OBJECT IDENTIFIER, or a `wanted object identifier`
    /// error.
    pub fn as_oid(&self) -> Result<&[u64]> {
        match self {
            Asn1::Oid(arcs) => Ok(arcs),
            other => Err(wanted("object identifier", TAG_OBJECT_IDENTIFIER, other)),
        }
    }

    /// The children of the constructed value `[expected]`, or an error.
    pub fn as_constructed(&self, expected: u8) -> Result<&[Asn1]> {
        match self {
            Asn1::Constructed(n, children) if *n == expected => Ok(children),
            other => Err(wanted(
                "constructed",
                TAG_CONSTRUCTED_BASE | (expected & 0x1F),
                other,
            )),
        }
    }
}

fn wanted(name: &'static str, tag: u8, got: &Asn1) -> Error {
    Error::encoding(
        "DER value",
        format!(
            "wanted {} {:02x}, got {} {:02x}",
            name,
            tag,
            got.type_name(),
            got.tag()
        ),
    )
}

/// Serialize a DER value.
///
/// Fails on shapes no ECDSA envelope carries: a negative INTEGER or an
/// OBJECT IDENTIFIER with fewer than two arcs.
pub fn encode(value: &Asn1) -> Result<Vec<u8>> {
    let content = encode_content(value)?;
    let mut out = Vec::with_capacity(content.len() + 4);
    out.push(value.tag());
    encode_length(content.len(), &mut out);
    out.extend_from_slice(&content);
    Ok(out)
}

fn encode_content(value: &Asn1) -> Result<Vec<u8>> {
    match value {
        Asn1::Sequence(children) | Asn1::Constructed(_, children) => {
            let mut content = Vec::new();
            for child in children {
                content.extend_from_slice(&encode(child)?);
            }
            Ok(content)
        }
        Asn1::Integer(value) => encode_integer(value),
        Asn1::BitString(payload) => {
            // Leading byte counts unused bits; always zero here.
            let mut content = Vec::with_capacity(payload.len() + 1);
            content.push(0x00);
            content.extend_from_slice(payload);
            Ok(content)
        }
        Asn1::OctetString(bytes) => Ok(bytes.clone()),
        Asn1::Oid(arcs) => encode_oid(arcs),
    }
}

fn encode_length(length: usize, out: &mut Vec<u8>) {
    if length < 0x80 {
        out.push(length as u8);
        return;
    }
    let be = length.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    let bytes = &be[skip..];
    out.push(0x80 | bytes.len() as u8);
    out.extend_from_slice(bytes);
}

fn encode_integer(value: &BigInt) -> Result<Vec<u8>> {
    if value.is_negative() {
        return Err(Error::encoding(
            "DER integer",
            format!("cannot encode negative value {}", value),
        ));
    }
    let (_, mut bytes) = value.to_bytes_be();
    // The sign bit must stay clear for a non-negative INTEGER.
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    Ok(bytes)
}

fn encode_oid(arcs: &[u64]) -> Result<Vec<u8>> {
    if arcs.len() < 2 {
        return Err(Error::encoding(
            "DER object identifier",
            format!("an OID needs at least two arcs, got {}", arcs.len()),
        ));
    }
    let mut out = Vec::with_capacity(arcs.len() + 1);
    out.push((arcs[0] * 40 + arcs[1]) as u8);
    for &arc in &arcs[2..] {
        encode_base128(arc, &mut out);
    }
    Ok(out)
}

fn encode_base128(mut value: u64, out: &mut Vec<u8>) {
    let mut groups = [0u8; 10];
    let mut count = 0;
    loop {
        groups[count] = (value & 0x7F) as u8;
        value >>= 7;
        count += 1;
        if value == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(groups[i] | continuation);
    }
}

/// Parse one DER value, returning it together with the unconsumed
/// remainder of the input.
pub fn decode(input: &[u8]) -> Result<(Asn1, &[u8])> {
    let (&tag, after_tag) = input
        .split_first()
        .ok_or_else(|| Error::encoding("DER value", "empty input".to_string()))?;
    let (content, rest) = split_length_prefixed(after_tag)?;

    let value = match tag {
        TAG_SEQUENCE => Asn1::Sequence(decode_children(content)?),
        TAG_INTEGER => Asn1::Integer(decode_integer(content)?),
        TAG_BIT_STRING => Asn1::BitString(decode_bit_string(content)?),
        TAG_OCTET_STRING => Asn1::OctetString(content.to_vec()),
        TAG_OBJECT_IDENTIFIER => Asn1::Oid(decode_oid(content)?),
        tag if (TAG_CONSTRUCTED_BASE..=0xBF).contains(&tag) => {
            Asn1::Constructed(tag & 0x1F, decode_children(content)?)
        }
        tag => {
            return Err(Error::encoding(
                "DER value",
                format!("unexpected tag {:02x}", tag),
            ))
        }
    };
    Ok((value, rest))
}

/// Parse a DER value that must span the whole input; trailing bytes are an
/// error.
pub fn decode_full(input: &[u8]) -> Result<Asn1> {
    let (value, rest) = decode(input)?;
    if !rest.is_empty() {
        return Err(Error::encoding(
            "DER value",
            format!("trailing bytes after structure: {}", hex::encode(rest)),
        ));
    }
    Ok(value)
}

fn split_length_prefixed(input: &[u8]) -> Result<(&[u8], &[u8])> {
    let (&first, after_first) = input
        .split_first()
        .ok_or_else(|| Error::encoding("DER length", "missing length byte".to_string()))?;
    let (length, after_length) = if first < 0x80 {
        (first as usize, after_first)
    } else {
        let count = (first & 0x7F) as usize;
        if count == 0 || count > std::mem::size_of::<usize>() {
            return Err(Error::encoding(
                "DER length",
                format!("unsupported length prefix {:02x}", first),
            ));
        }
        if after_first.len() < count {
            return Err(Error::encoding(
                "DER length",
                format!(
                    "truncated length: need {} bytes, have {}",
                    count,
                    after_first.len()
                ),
            ));
        }
        let mut length = 0usize;
        for &byte in &after_first[..count] {
            length = (length << 8) | byte as usize;
        }
        (length, &after_first[count..])
    };
    if after_length.len() < length {
        return Err(Error::encoding(
            "DER length",
            format!(
                "truncated content: need {} bytes, have {}",
                length,
                after_length.len()
            ),
        ));
    }
    Ok(after_length.split_at(length))
}

fn decode_integer(content: &[u8]) -> Result<BigInt> {
    let (&first, rest) = content
        .split_first()
        .ok_or_else(|| Error::encoding("DER integer", "empty content".to_string()))?;
    if first >= 0xA0 {
        return Err(Error::encoding(
            "DER integer",
            format!("first byte {:02x} out of range", first),
        ));
    }
    let magnitude = if first == 0x00 { rest } else { content };
    Ok(BigInt::from_bytes_be(Sign::Plus, magnitude))
}

fn decode_bit_string(content: &[u8]) -> Result<Vec<u8>> {
    let (&unused_bits, payload) = content
        .split_first()
        .ok_or_else(|| Error::encoding("DER bit string", "empty content".to_string()))?;
    if unused_bits != 0 {
        return Err(Error::encoding(
            "DER bit string",
            format!("unsupported unused-bits byte {:02x}", unused_bits),
        ));
    }
    Ok(payload.to_vec())
}

fn decode_oid(content: &[u8]) -> Result<Vec<u64>> {
    let (&first, rest) = content
        .split_first()
        .ok_or_else(|| Error::encoding("DER object identifier", "empty content".to_string()))?;
    let mut arcs = if first < 40 {
        vec![0, first as u64]
    } else if first < 80 {
        vec![1, (first - 40) as u64]
    } else {
        vec![2, (first - 80) as u64]
    };

    let mut accumulator: u64 = 0;
    let mut in_arc = false;
    for &byte in rest {
        accumulator = (accumulator << 7) | (byte & 0x7F) as u64;
        in_arc = true;
        if byte & 0x80 == 0 {
            arcs.push(accumulator);
            accumulator = 0;
            in_arc = false;
        }
    }
    if in_arc {
        return Err(Error::encoding(
            "DER object identifier",
            format!("truncated arc in {}", hex::encode(content)),
        ));
    }
    Ok(arcs)
}

fn decode_children(mut content: &[u8]) -> Result<Vec<Asn1>> {
    let mut children = Vec::new();
    while !content.is_empty() {
        let (child, rest) = decode(content)?;
        children.push(child);
        content = rest;
    }
    Ok(children)
}
