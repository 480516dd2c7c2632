//! Exponential function.

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_traits::{One, ToPrimitive, Zero};

use crate::common::consts::{LN2, ONE, TWO};
use crate::common::util::{div, epsilon, ipow};
use crate::ctx::{derived_context, padded, round};
use crate::defs::Error;

/// Computes `e` raised to the power `x`, rounded to the context `ctx`.
///
/// The argument is split as `x = k*ln(2) + r` with `k` the nearest integer
/// (ties to even), leaving `|r| <= ln(2)/2` so the Taylor series
/// `e^r = sum(r^i / i!)` converges in a few terms per digit. The series
/// epsilon carries two digits beyond the working precision to protect the
/// closing multiplication by `2^k`.
///
/// The range reduction uses a 114-digit literal of ln(2); digits requested
/// beyond that length are undefined.
///
/// ## Errors
///
///  - InvalidArgument: the reduction count `k` does not fit a 64-bit
///    integer (the argument is astronomically large).
pub fn exp_with_context(x: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return Ok(round(&ONE, ctx));
    }

    let wrk = padded(ctx);
    let ln2 = round(&LN2, &wrk);

    // x = k*ln2 + r
    let k = div(x, &ln2, &wrk)?
        .with_scale_round(0, RoundingMode::HalfEven)
        .to_i64()
        .ok_or(Error::InvalidArgument)?;
    let reduced = round(&(&ln2 * BigDecimal::from(k)), &wrk);
    let r = round(&(x - reduced), &wrk);

    // e^r = 1 + r + r^2/2! + r^3/3! + ...
    let eps = epsilon(wrk.precision().get() + 2);
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let mut i: i64 = 1;
    while term.abs() > eps {
        term = div(&round(&(&term * &r), &wrk), &BigDecimal::from(i), &wrk)?;
        sum = round(&(&sum + &term), &wrk);
        i += 1;
    }

    let two_pow_k = ipow(&TWO, k, &wrk)?;
    Ok(round(&round(&(sum * two_pow_k), &wrk), ctx))
}

/// Computes `e^x` with a context derived from the scale of `x`
/// (precision = max(fractional digits, 6), rounding half-up).
pub fn exp(x: &BigDecimal) -> Result<BigDecimal, Error> {
    let digits = x.fractional_digit_count().max(6);
    exp_with_context(x, &derived_context(digits, RoundingMode::HalfUp)?)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::num::NonZeroU64;

    fn ctx(p: u64) -> Context {
        Context::new(NonZeroU64::new(p).unwrap(), RoundingMode::HalfUp)
    }

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_exp_reference_value() {
        let r = exp_with_context(&dec("3.14159"), &ctx(50)).unwrap();
        assert_eq!(
            r,
            dec("23.140631226954963164517207589887985761017433256922")
        );
    }

    #[test]
    fn test_exp_of_zero_is_one() {
        let r = exp_with_context(&dec("0"), &ctx(50)).unwrap();
        assert_eq!(r, dec("1"));
    }

    #[test]
    fn test_exp_of_negative() {
        let r = exp_with_context(&dec("-3.14159"), &ctx(50)).unwrap();
        assert_eq!(
            r,
            dec("0.043214032935936826737102548769119770695866118181655")
        );
    }

    #[test]
    fn test_exp_of_ln2_multiple() {
        // e^(8*ln2) = 256
        let x = round(&(&*LN2 * BigDecimal::from(8)), &ctx(60));
        let r = exp_with_context(&x, &ctx(40)).unwrap();

        let eps = dec("1e-35");
        assert!((r - dec("256")).abs() < eps);
    }

    #[test]
    fn test_exp_default_context() {
        // scale 5 -> max(5, 6) = 6 significant digits
        assert_eq!(exp(&dec("3.14159")).unwrap(), dec("23.1406"));
    }
}
