//! Domain parameters for NIST P-256 / prime256v1 (FIPS 186-4, D.1.2.3)

/// Printable curve name, as used by OpenSSL's `-name` switch
pub const NAME: &str = "prime256v1";

/// ASN.1 object identifier 1.2.840.10045.3.1.7
pub const OID: &[u64] = &[1, 2, 840, 10045, 3, 1, 7];

/// Field prime p, big-endian hexadecimal
pub const P: &str = "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF";

/// Curve coefficient a (p - 3)
pub const A: &str = "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC";

/// Curve coefficient b
pub const B: &str = "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B";

/// Order n of the base point G
pub const N: &str = "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551";

/// x-coordinate of the base point G
pub const GX: &str = "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296";

/// y-coordinate of the base point G
pub const GY: &str = "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5";

/// Size of a scalar (and of a field element) in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of an uncompressed point: marker byte (0x04) + x + y
pub const POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SCALAR_SIZE;
