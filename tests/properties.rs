//! Cross-operation properties checked through the public API.

use core::num::NonZeroU64;

use bigdecimal_math::{
    exp_with_context, ln_with_context, pi, pow_with_context, sqrt_with_context, BigDecimal,
    Context, Error, RoundingMode,
};
use num_traits::One;
use rand::Rng;

fn ctx(p: u64) -> Context {
    Context::new(NonZeroU64::new(p).unwrap(), RoundingMode::HalfEven)
}

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn test_exp_inverts_ln() {
    let wrk = ctx(40);
    let eps = dec("1e-35");

    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        // x in (0.001, 1000)
        let x = BigDecimal::new(rng.gen_range(1u64..1_000_000).into(), 3);

        let l = ln_with_context(&x, &wrk).unwrap();
        let e = exp_with_context(&l, &wrk).unwrap();

        assert!((&e - &x).abs() < eps, "exp(ln({})) = {}", x, e);
    }
}

#[test]
fn test_ln_inverts_exp() {
    let wrk = ctx(40);
    let eps = dec("1e-35");

    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        // x in (-5, 5), away from zero
        let x = BigDecimal::new(rng.gen_range(1u64..50_000).into(), 4);

        let e = exp_with_context(&x, &wrk).unwrap();
        let l = ln_with_context(&e, &wrk).unwrap();

        assert!((&l - &x).abs() < eps, "ln(exp({})) = {}", x, l);
    }
}

#[test]
fn test_sqrt_squares_back() {
    let wrk = ctx(40);
    let eps = dec("1e-35");

    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let x = BigDecimal::new(rng.gen_range(1u64..1_000_000_000).into(), 4);

        let r = sqrt_with_context(&x, &wrk).unwrap();
        let sq = &r * &r;

        assert!((&sq - &x).abs() < eps, "sqrt({})^2 = {}", x, sq);
    }
}

#[test]
fn test_pow_reciprocal_identity() {
    let wrk = ctx(40);
    let eps = dec("1e-30");
    let one = BigDecimal::one();

    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let a = BigDecimal::new(rng.gen_range(11u64..500).into(), 1);
        let b = BigDecimal::new(rng.gen_range(1u64..40).into(), 1);

        let pos = pow_with_context(&a, &b, &wrk).unwrap();
        let neg = pow_with_context(&a, &-&b, &wrk).unwrap();
        let product = &pos * &neg;

        assert!(
            (&product - &one).abs() < eps,
            "{}^{} * {}^-{} = {}",
            a,
            b,
            a,
            b,
            product
        );
    }
}

#[test]
fn test_pi_prefix_is_stable() {
    let reference = pi(100).unwrap().to_string();

    for precision in [16u64, 25, 40, 60, 85] {
        let p = pi(precision).unwrap().to_string();
        assert!(reference.starts_with(&p), "pi({}) = {}", precision, p);
    }
}

#[test]
fn test_domain_errors() {
    let wrk = ctx(30);

    assert_eq!(
        sqrt_with_context(&dec("-1"), &wrk),
        Err(Error::InvalidArgument)
    );
    assert_eq!(
        ln_with_context(&dec("0"), &wrk),
        Err(Error::InvalidArgument)
    );
    assert_eq!(
        ln_with_context(&dec("-2.5"), &wrk),
        Err(Error::InvalidArgument)
    );
    assert_eq!(
        pow_with_context(&dec("-2"), &dec("0.5"), &wrk),
        Err(Error::Undefined)
    );
}
