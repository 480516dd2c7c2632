//! Square root.

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

use crate::common::consts::TWO;
use crate::common::util::div;
use crate::ctx::{derived_context, padded, round};
use crate::defs::Error;

// 2*log2(10): bits of the unscaled value per digit of the root.
const BITS_PER_ROOT_DIGIT: f64 = 6.64385618977;

/// Computes the square root of `x`, rounded to the context `ctx`.
///
/// The root is found by Newton-Raphson iteration over the working context.
/// The initial guess is a power of ten matching the digit length of the
/// root, and the iteration `y -> (x/y + y)/2` runs until two successive
/// iterates compare equal at the working precision.
///
/// ## Errors
///
///  - InvalidArgument: `x` is negative.
pub fn sqrt_with_context(x: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    if x.sign() == Sign::Minus {
        return Err(Error::InvalidArgument);
    }
    if x.is_zero() {
        return Ok(round(x, ctx));
    }

    let wrk = padded(ctx);

    // first guess: 10^ceil(bits / (2*log2(10)))
    let bits = x.as_bigint_and_exponent().0.bits();
    let q = bits as f64 / BITS_PER_ROOT_DIGIT;
    let mut e = q as i64;
    if (e as f64) < q {
        e += 1;
    }
    let mut guess = BigDecimal::new(BigInt::one(), -e);

    // the rounded iteration can cycle between two adjacent values, so both
    // the last and the second-to-last iterates end it
    let mut prev = BigDecimal::zero();
    loop {
        let next = div(&(div(x, &guess, &wrk)? + &guess), &TWO, &wrk)?;
        if next == guess || next == prev {
            guess = next;
            break;
        }
        prev = core::mem::replace(&mut guess, next);
    }

    Ok(round(&guess, ctx))
}

/// Computes the square root of `x` with a context derived from its scale:
/// half the fractional digits (at least two), rounding half-up. Intended for
/// callers that want a reasonable default rather than exact control.
///
/// ## Errors
///
///  - InvalidArgument: `x` is negative.
pub fn sqrt(x: &BigDecimal) -> Result<BigDecimal, Error> {
    let digits = (x.fractional_digit_count() / 2).max(2);
    sqrt_with_context(x, &derived_context(digits, RoundingMode::HalfUp)?)
}
