//! Rounding contexts and the guard-digit padding policy.

use core::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};

use crate::defs::{Error, GUARD_DIGITS};

/// Derives the working context for intermediate arithmetic: the precision of
/// `ctx` plus the guard digits, rounding fixed to half-to-even regardless of
/// the caller's rule. Iterative algorithms evaluate in this context and round
/// to the caller's context exactly once at the end, so accumulated rounding
/// error cannot reach the requested digits.
pub(crate) fn padded(ctx: &Context) -> Context {
    Context::new(
        ctx.precision().saturating_add(GUARD_DIGITS),
        RoundingMode::HalfEven,
    )
}

/// Builds a context from a digit count derived from the scale of an input.
/// Fails if the count is not a positive number of digits.
pub(crate) fn derived_context(digits: i64, rm: RoundingMode) -> Result<Context, Error> {
    u64::try_from(digits)
        .ok()
        .and_then(NonZeroU64::new)
        .map(|p| Context::new(p, rm))
        .ok_or(Error::InvalidArgument)
}

/// Rounds `x` to the precision and rounding rule of `ctx`.
pub(crate) fn round(x: &BigDecimal, ctx: &Context) -> BigDecimal {
    x.with_precision_round(ctx.precision(), ctx.rounding_mode())
}
