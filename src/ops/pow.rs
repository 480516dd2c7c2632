//! Power function.

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::Sign;
use num_traits::{One, ToPrimitive, Zero};

use crate::common::consts::ONE;
use crate::common::util::ipow;
use crate::ctx::{derived_context, round};
use crate::defs::Error;
use crate::ops::exp::exp_with_context;
use crate::ops::ln::ln_with_context;

/// Computes `a` raised to the power `b`, rounded to the context `ctx`.
///
/// A zero exponent follows the sign of the base: `+1` for a positive base
/// and `-1` otherwise. `a = 1` and `b = 1` short-circuit to `a`, and a zero
/// base yields zero. An exponent holding an exact integer value dispatches
/// to exponentiation by squaring (the reciprocal for negative exponents);
/// integers too large for that path fall through to the general case
/// `exp(b * ln(a))`.
///
/// ## Errors
///
///  - Undefined: `a` is negative and `b` is not an integer.
pub fn pow_with_context(a: &BigDecimal, b: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    if b.is_zero() {
        return if a.sign() == Sign::Plus {
            Ok(round(&ONE, ctx))
        } else {
            Ok(round(&-BigDecimal::one(), ctx))
        };
    }
    if *a == *ONE || *b == *ONE {
        return Ok(round(a, ctx));
    }
    if a.is_zero() {
        return Ok(round(a, ctx));
    }

    // integer-exponent fast path
    if b.is_integer() {
        if let Some(n) = b.to_i64() {
            return ipow(a, n, ctx);
        }
    }

    if a.sign() == Sign::Minus {
        return Err(Error::Undefined);
    }

    let ln_a = ln_with_context(a, ctx)?;
    let y = round(&(b * &ln_a), ctx);
    exp_with_context(&y, ctx)
}

/// Computes `a^b` with a context sized to absorb the precision loss of
/// composing `ln` and `exp`: precision = max(6, scale of `a` + significant
/// digits of `b` + 2), rounding half-up.
///
/// ## Errors
///
///  - Undefined: `a` is negative and `b` is not an integer.
pub fn pow(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal, Error> {
    let digits = (a.fractional_digit_count() + b.digits() as i64 + 2).max(6);
    pow_with_context(a, b, &derived_context(digits, RoundingMode::HalfUp)?)
}
