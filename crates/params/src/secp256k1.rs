//! Domain parameters for the Koblitz curve secp256k1 (SEC 2, section 2.4.1)
//!
//! The curve equation is y² = x³ + 7 over F_p with p = 2^256 - 2^32 - 977.

/// Printable curve name, as used by OpenSSL's `-name` switch
pub const NAME: &str = "secp256k1";

/// ASN.1 object identifier 1.3.132.0.10
pub const OID: &[u64] = &[1, 3, 132, 0, 10];

/// Field prime p, big-endian hexadecimal
pub const P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Curve coefficient a
pub const A: &str = "0";

/// Curve coefficient b
pub const B: &str = "7";

/// Order n of the base point G
pub const N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// x-coordinate of the base point G
pub const GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// y-coordinate of the base point G
pub const GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Size of a scalar (and of a field element) in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of an uncompressed point: marker byte (0x04) + x + y
pub const POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SCALAR_SIZE;
