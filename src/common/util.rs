//! Auxiliary decimal arithmetic.

use bigdecimal::{BigDecimal, Context};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

use crate::common::consts::ONE;
use crate::ctx::round;
use crate::defs::Error;

/// 10^(-p), the convergence threshold for a working precision of `p` digits.
pub(crate) fn epsilon(p: u64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), p as i64)
}

fn ten_to_the(n: u64) -> Result<BigInt, Error> {
    let n = u32::try_from(n).map_err(|_| Error::InvalidArgument)?;
    Ok(BigInt::from(10u32).pow(n))
}

/// Divides `num` by `den`, correctly rounded to `ctx`.
///
/// The primitive's `/` operator rounds to a compiled-in default precision, so
/// the quotient is formed on the unscaled integers instead: the numerator is
/// shifted to yield two digits beyond the context, and an inexact quotient
/// gets a sticky digit appended to keep it off the rounding boundary.
pub(crate) fn div(num: &BigDecimal, den: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    if den.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if num.is_zero() {
        return Ok(round(num, ctx));
    }

    let (n, ns) = num.as_bigint_and_exponent();
    let (d, ds) = den.as_bigint_and_exponent();

    let prec = ctx.precision().get() as i64;
    let shift = prec + 2 + den.digits() as i64 - num.digits() as i64;

    let (sn, sd) = if shift >= 0 {
        (n * ten_to_the(shift as u64)?, d)
    } else {
        (n, d * ten_to_the(shift.unsigned_abs())?)
    };

    let mut q = &sn / &sd;
    let r = &sn % &sd;
    let mut scale = ns - ds + shift;

    if !r.is_zero() {
        let sticky = if (sn.sign() == Sign::Minus) != (sd.sign() == Sign::Minus) {
            -1
        } else {
            1
        };
        q = q * BigInt::from(10) + BigInt::from(sticky);
        scale += 1;
    }

    Ok(round(&BigDecimal::new(q, scale), ctx))
}

/// Raises `x` to the integer power `n` by squaring, rounding every product to
/// `ctx`. A negative exponent produces the reciprocal of the positive-power
/// result.
pub(crate) fn ipow(x: &BigDecimal, n: i64, ctx: &Context) -> Result<BigDecimal, Error> {
    if n == 0 {
        return Ok(round(&ONE, ctx));
    }

    let mut result = BigDecimal::one();
    let mut base = x.clone();
    let mut exp = n.unsigned_abs();

    while exp > 0 {
        if exp & 1 == 1 {
            result = round(&(&result * &base), ctx);
        }
        base = round(&(&base * &base), ctx);
        exp >>= 1;
    }

    if n < 0 {
        div(&ONE, &result, ctx)
    } else {
        Ok(result)
    }
}
