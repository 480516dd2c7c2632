//! Natural logarithm.

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::Sign;
use num_traits::Zero;

use crate::common::consts::{LN2, ONE, TWO};
use crate::common::util::{div, epsilon};
use crate::ctx::{derived_context, padded, round};
use crate::defs::{Error, GUARD_DIGITS};

/// Computes the natural logarithm of `x`, rounded to the context `ctx`.
///
/// The argument is range-reduced to `[1, 2)` by halving or doubling while a
/// counter `k` tracks the number of steps, so that
/// `ln(x) = ln(m) + k*ln(2)`. The reduced part is summed with the atanh
/// series `ln(m) = 2*(z + z^3/3 + z^5/5 + ...)` for `z = (m-1)/(m+1)`
/// (`|z| <= 1/3` after reduction), stopping once the term drops below the
/// working epsilon.
///
/// The `k*ln(2)` correction uses a 114-digit literal of ln(2); digits
/// requested beyond that length are undefined.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero or negative.
pub fn ln_with_context(x: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    let result = ln_series(x, &padded(ctx))?;
    Ok(round(&result, ctx))
}

// Range reduction and series summation at the working context, without the
// caller's final rounding.
fn ln_series(x: &BigDecimal, wrk: &Context) -> Result<BigDecimal, Error> {
    if x.sign() != Sign::Plus {
        return Err(Error::InvalidArgument);
    }

    // range-reduce to [1, 2)
    let mut m = x.clone();
    let mut k: i64 = 0;
    while m >= *TWO {
        m = div(&m, &TWO, wrk)?;
        k += 1;
    }
    while m < *ONE {
        m = round(&(&m * &*TWO), wrk);
        k -= 1;
    }

    let num = round(&(&m - &*ONE), wrk);
    let den = round(&(&m + &*ONE), wrk);
    let z = div(&num, &den, wrk)?;
    let z2 = round(&(&z * &z), wrk);

    let eps = epsilon(wrk.precision().get());
    let mut term = z;
    let mut sum = BigDecimal::zero();
    let mut n: i64 = 1;
    loop {
        sum = round(&(sum + div(&term, &BigDecimal::from(n), wrk)?), wrk);
        term = round(&(&term * &z2), wrk);
        n += 2;
        if term.abs() <= eps {
            break;
        }
    }

    let ln2 = round(&LN2, wrk);
    let doubled = round(&(sum * &*TWO), wrk);
    let correction = round(&(&ln2 * BigDecimal::from(k)), wrk);

    Ok(round(&(doubled + correction), wrk))
}

/// Computes the natural logarithm of `x` with a context derived from its
/// scale (precision = fractional digits, rounding half-up). An integer
/// argument has no fractional digits to derive a precision from; it is
/// computed at the guard digits alone and returned without a final
/// rounding.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero or negative, or its scale is negative.
pub fn ln(x: &BigDecimal) -> Result<BigDecimal, Error> {
    let digits = x.fractional_digit_count();
    if digits == 0 {
        let wrk = derived_context(GUARD_DIGITS as i64, RoundingMode::HalfEven)?;
        return ln_series(x, &wrk);
    }
    ln_with_context(x, &derived_context(digits, RoundingMode::HalfUp)?)
}
