//! Divisor enumeration.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::defs::Error;

/// Returns all unique divisors of `n`, including 1 and `n` itself.
///
/// Trial division runs up to the square root of `n`; every divisor found
/// below the root is pushed together with its complementary divisor `n / i`,
/// except when the two coincide (perfect squares). Divisors therefore appear
/// in complementary pairs rather than in ascending order.
///
/// ## Errors
///
///  - InvalidArgument: `n` is zero.
pub fn divisors(n: u32) -> Result<Vec<u32>, Error> {
    if n == 0 {
        return Err(Error::InvalidArgument);
    }

    let mut divisors = Vec::new();

    let mut i = 1u32;
    while u64::from(i) * u64::from(i) <= u64::from(n) {
        if n % i == 0 {
            divisors.push(i);

            if i != n / i {
                divisors.push(n / i);
            }
        }
        i += 1;
    }

    Ok(divisors)
}
