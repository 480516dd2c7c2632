//! Definitions.

use core::fmt::Display;

/// Number of extra significant digits carried by intermediate computations.
pub(crate) const GUARD_DIGITS: u64 = 10;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument lies outside of the domain of the operation, or a derived
    /// context has no usable precision.
    InvalidArgument,

    /// The operation has no defined result, e.g. a negative base raised to a
    /// non-integer exponent.
    Undefined,

    /// Divisor is zero.
    DivisionByZero,

    /// No representable value exists beyond the search bound.
    Exhausted,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidArgument => "invalid argument",
            Error::Undefined => "undefined result",
            Error::DivisionByZero => "division by zero",
            Error::Exhausted => "value range exhausted",
        };
        f.write_str(repr)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidArgument.to_string(), "invalid argument");
        assert_eq!(Error::Undefined.to_string(), "undefined result");
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(Error::Exhausted.to_string(), "value range exhausted");
    }
}
