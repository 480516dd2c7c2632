//! Extended mathematical operations for arbitrary-precision decimal numbers.
//!
//! The crate builds a numerical-analysis layer on top of the [`bigdecimal`]
//! crate: square root, natural logarithm, exponential, general power, and the
//! constant π, each computed to a caller-specified number of significant
//! decimal digits. The engines share a single discipline: evaluate at the
//! requested precision plus guard digits with half-to-even rounding, iterate
//! until the result stabilizes, and round once to the caller's context at
//! the very end.
//!
//! A few small integer utilities round out the crate: divisor enumeration,
//! primality testing and prime generation, and a generic ordered pair.
//!
//! ## Examples
//!
//! ```
//! use bigdecimal_math::{sqrt_with_context, BigDecimal, Context, RoundingMode};
//! use core::num::NonZeroU64;
//!
//! let ctx = Context::new(NonZeroU64::new(30).unwrap(), RoundingMode::HalfUp);
//!
//! let x: BigDecimal = "2".parse().unwrap();
//! let root = sqrt_with_context(&x, &ctx).unwrap();
//!
//! assert!(root.to_string().starts_with("1.41421356237309504880168872420"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod ctx;
mod defs;
mod ops;
mod pair;

pub mod divisors;
pub mod primes;

pub use bigdecimal::BigDecimal;
pub use bigdecimal::Context;
pub use bigdecimal::RoundingMode;

pub use crate::defs::Error;
pub use crate::pair::Pair;

pub use crate::ops::consts::pi;
pub use crate::ops::exp::exp;
pub use crate::ops::exp::exp_with_context;
pub use crate::ops::ln::ln;
pub use crate::ops::ln::ln_with_context;
pub use crate::ops::pow::pow;
pub use crate::ops::pow::pow_with_context;
pub use crate::ops::sqrt::sqrt;
pub use crate::ops::sqrt::sqrt_with_context;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigdecimal_math() {
        use crate::{exp_with_context, ln_with_context, BigDecimal, Context, RoundingMode};
        use core::num::NonZeroU64;

        // Precision with some space for error.
        let p = NonZeroU64::new(64).unwrap();

        let ctx = Context::new(p, RoundingMode::HalfEven);

        // Compute x -> ln(x) -> e^ln(x) and compare with the original.
        let x: BigDecimal = "3.5".parse().unwrap();

        let l = ln_with_context(&x, &ctx).unwrap();
        let e = exp_with_context(&l, &ctx).unwrap();

        let eps: BigDecimal = "1e-60".parse().unwrap();
        assert!((e - &x).abs() < eps);
    }
}
