//! Interoperability tests: OpenSSL-shaped inputs and known-answer vectors.

use ecrypt::prelude::*;
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A secp256k1 DER signature produced by `openssl dgst -sha256 -sign`,
/// transported as Base64.
const OPENSSL_SIGNATURE_BASE64: &str =
    "MEYCIQD861pJq/fZE7GnDBycwAbb3YglVoSCVub6TwMkgFS0NgIhAJCEZTh1Mlp1cWCgMXABqh9nOQznEXnhGoSYmZK6T99T";

#[test]
fn known_signature_decodes_to_expected_scalars() {
    let signature = Signature::from_base64(OPENSSL_SIGNATURE_BASE64).unwrap();
    let expected_r = BigInt::parse_bytes(
        b"114398670046563728651181765316495176217036114587592994448444521545026466264118",
        10,
    )
    .unwrap();
    let expected_s = BigInt::parse_bytes(
        b"65366972607021398158454632864220554542282541376523937745916477386966386597715",
        10,
    )
    .unwrap();
    assert_eq!(signature.r, expected_r);
    assert_eq!(signature.s, expected_s);
}

#[test]
fn known_signature_reencodes_byte_exactly() {
    let signature = Signature::from_base64(OPENSSL_SIGNATURE_BASE64).unwrap();
    assert_eq!(signature.to_base64().unwrap(), OPENSSL_SIGNATURE_BASE64);
}

#[test]
fn pem_with_leading_ec_parameters_block_parses() {
    // `openssl ecparam -name secp256k1 -genkey` writes an EC PARAMETERS
    // block (the DER-encoded curve OID) ahead of the key itself.
    let ec_parameters = "-----BEGIN EC PARAMETERS-----\n\
                         BgUrgQQACg==\n\
                         -----END EC PARAMETERS-----\n";
    let key = PrivateKey::generate(&SECP256K1);
    let stream = format!("{}{}", ec_parameters, key.to_pem());

    let parsed = PrivateKey::from_pem(&stream).unwrap();
    assert_eq!(key, parsed);

    // Re-emitting and re-parsing yields an identical struct.
    let reparsed = PrivateKey::from_pem(&parsed.to_pem()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn pem_without_private_key_marker_is_rejected() {
    let ec_parameters = "-----BEGIN EC PARAMETERS-----\n\
                         BgUrgQQACg==\n\
                         -----END EC PARAMETERS-----\n";
    assert!(PrivateKey::from_pem(ec_parameters).is_err());
}

#[test]
fn nonce_interval_sampling_is_unbiased() {
    // 10 000 draws from [1, n-1]: all in range, top nibble close to
    // uniform (expected 625 per bucket).
    let curve = by_name("secp256k1").unwrap();
    let min = BigInt::from(1);
    let max = &curve.n - 1;
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);

    let mut buckets = [0usize; 16];
    for _ in 0..10_000 {
        let draw =
            ecrypt::algorithms::bigint::between(&min, &max, &mut rng).unwrap();
        assert!(draw >= min && draw <= max);
        let bytes = ecrypt::algorithms::bigint::to_fixed_be(&draw, curve.length()).unwrap();
        buckets[(bytes[0] >> 4) as usize] += 1;
    }
    for (nibble, &count) in buckets.iter().enumerate() {
        assert!(
            (450..=800).contains(&count),
            "bucket {:x} count {} strays too far from uniform",
            nibble,
            count
        );
    }
}
