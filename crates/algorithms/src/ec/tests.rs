use super::curve::{by_name, by_oid, registry, PRIME256V1, SECP256K1};
use super::{add, multiply, AffinePoint};
use crate::bigint::between;
use num_bigint::BigInt;
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_base_points_are_on_their_curves() {
    for curve in registry() {
        assert!(curve.contains(&curve.g), "{} generator off-curve", curve.name);
    }
}

#[test]
fn test_curve_lengths() {
    assert_eq!(SECP256K1.length(), 32);
    assert_eq!(PRIME256V1.length(), 32);
}

#[test]
fn test_lookup_by_name() {
    assert_eq!(by_name("secp256k1").unwrap().name, "secp256k1");
    assert_eq!(by_name("prime256v1").unwrap().name, "prime256v1");
    assert!(by_name("brainpoolP256r1").is_err());
}

#[test]
fn test_lookup_by_oid() {
    assert_eq!(by_oid(&[1, 3, 132, 0, 10]).unwrap().name, "secp256k1");
    assert_eq!(
        by_oid(&[1, 2, 840, 10045, 3, 1, 7]).unwrap().name,
        "prime256v1"
    );
    let err = by_oid(&[1, 2, 3]).unwrap_err();
    assert!(err.to_string().contains("1.2.3"));
}

#[test]
fn test_scalar_multiples_stay_on_curve() {
    let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
    for curve in registry() {
        for _ in 0..4 {
            let k = between(&BigInt::one(), &(&curve.n - 1u8), &mut rng).unwrap();
            let point = multiply(&curve.g, &k, curve);
            assert!(curve.contains(&point));
        }
    }
}

#[test]
fn test_order_times_generator_is_infinity() {
    for curve in registry() {
        let identity = multiply(&curve.g, &curve.n, curve);
        assert!(identity.is_infinity(), "{}: n·G != O", curve.name);
    }
}

#[test]
fn test_add_inverse_points() {
    // (n-1)·G + G = n·G = O
    for curve in registry() {
        let minus_g = multiply(&curve.g, &(&curve.n - 1u8), curve);
        let identity = add(&minus_g, &curve.g, curve);
        assert!(identity.is_infinity());
    }
}

#[test]
fn test_infinity_is_neutral() {
    let curve = &*SECP256K1;
    assert_eq!(add(&AffinePoint::Infinity, &curve.g, curve), curve.g);
    assert_eq!(add(&curve.g, &AffinePoint::Infinity, curve), curve.g);
    assert!(add(&AffinePoint::Infinity, &AffinePoint::Infinity, curve).is_infinity());
}

#[test]
fn test_multiply_by_zero_and_one() {
    let curve = &*SECP256K1;
    assert!(multiply(&curve.g, &BigInt::from(0), curve).is_infinity());
    assert_eq!(multiply(&curve.g, &BigInt::one(), curve), curve.g);
}

#[test]
fn test_scalar_is_reduced_modulo_order() {
    let curve = &*PRIME256V1;
    let k = BigInt::from(123456789u64);
    let shifted = &k + &curve.n;
    assert_eq!(
        multiply(&curve.g, &k, curve),
        multiply(&curve.g, &shifted, curve)
    );
}

#[test]
fn test_doubling_matches_addition() {
    for curve in registry() {
        let two = BigInt::from(2);
        assert_eq!(
            multiply(&curve.g, &two, curve),
            add(&curve.g, &curve.g, curve)
        );
    }
}

#[test]
fn test_multiplication_distributes_over_addition() {
    // (a + b)·G == a·G + b·G
    let mut rng = ChaCha20Rng::from_seed([33u8; 32]);
    for curve in registry() {
        let a = between(&BigInt::one(), &(&curve.n - 1u8), &mut rng).unwrap();
        let b = between(&BigInt::one(), &(&curve.n - 1u8), &mut rng).unwrap();
        let lhs = multiply(&curve.g, &(&a + &b), curve);
        let rhs = add(
            &multiply(&curve.g, &a, curve),
            &multiply(&curve.g, &b, curve),
            curve,
        );
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn test_contains_rejects_bogus_points() {
    let curve = &*SECP256K1;
    let bogus = AffinePoint::new(BigInt::from(7), BigInt::from(11));
    assert!(!curve.contains(&bogus));
    assert!(!curve.contains(&AffinePoint::Infinity));

    // Coordinates outside [0, p) are rejected even if congruent.
    if let Some((x, y)) = curve.g.coordinates() {
        let shifted = AffinePoint::new(x + &curve.p, y.clone());
        assert!(!curve.contains(&shifted));
    }
}
