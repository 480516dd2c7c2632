//! π number.

use core::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::{ONE, PI_F64, TWO};
use crate::common::util::{div, epsilon};
use crate::ctx::round;
use crate::defs::{Error, GUARD_DIGITS};

/// Computes π with exactly `precision` digits after the decimal point, the
/// final digit rounded toward zero.
///
/// Two paths are used depending on the requested precision:
///
///  - `precision <= 15`: the decimal expansion of the `f64` value of π is
///    truncated to the requested length. 15 digits is the practical accuracy
///    limit of that representation, so the shortcut is exact within it.
///  - `precision > 15`: the Gauss-Legendre arithmetic-geometric-mean
///    iteration runs in a working context of `precision + 10` digits with
///    half-to-even rounding until `|a - b| <= 10^(-precision)`.
///
/// The AGM converges quadratically, but the cost of each iteration grows
/// with the working precision, so the total cost grows worse than linearly.
/// Requests beyond roughly 32768 digits are impractical.
///
/// ## Errors
///
///  - InvalidArgument: the working precision is not representable.
pub fn pi(precision: u64) -> Result<BigDecimal, Error> {
    let value = if precision <= 15 {
        PI_F64.clone()
    } else {
        agm_pi(precision)?
    };

    Ok(value.with_scale_round(precision as i64, RoundingMode::Floor))
}

// Gauss-Legendre: a = 1, b = 1/sqrt(2), t = 1/4, p = 1, then
// a' = (a+b)/2, b' = sqrt(a*b), t' = t - p*(a-a')^2, p' = 2p,
// and pi ~ (a+b)^2 / (4t).
fn agm_pi(precision: u64) -> Result<BigDecimal, Error> {
    let p_wrk = NonZeroU64::new(precision.saturating_add(GUARD_DIGITS))
        .ok_or(Error::InvalidArgument)?;
    let wrk = Context::new(p_wrk, RoundingMode::HalfEven);

    let sqrt2 = TWO
        .sqrt_with_context(&wrk)
        .ok_or(Error::InvalidArgument)?;

    let mut a = BigDecimal::one();
    let mut b = div(&ONE, &sqrt2, &wrk)?;
    let mut t = BigDecimal::new(BigInt::from(25), 2);
    let mut p = BigDecimal::one();

    let eps = epsilon(precision);

    while (&a - &b).abs() > eps {
        let a_next = div(&(&a + &b), &TWO, &wrk)?;
        b = round(&(&a * &b), &wrk)
            .sqrt_with_context(&wrk)
            .ok_or(Error::InvalidArgument)?;

        let d = round(&(&a - &a_next), &wrk);
        let d2 = round(&(&d * &d), &wrk);
        let pd2 = round(&(&p * &d2), &wrk);
        t = round(&(&t - &pd2), &wrk);

        a = a_next;
        p = &p * &*TWO;
    }

    let s = &a + &b;
    let s2 = round(&(&s * &s), &wrk);
    let den = round(&(&t * &BigDecimal::from(4)), &wrk);

    div(&s2, &den, &wrk)
}
