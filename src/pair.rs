//! Generic two-element tuple.

use core::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair of two values of possibly different types.
///
/// Both elements are plain public fields; the type adds nothing beyond
/// naming them and deriving the usual comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<F, S> {
    /// The first element.
    pub first: F,

    /// The second element.
    pub second: S,
}

impl<F, S> Pair<F, S> {
    /// Creates a pair from its two elements.
    pub fn of(first: F, second: S) -> Self {
        Pair { first, second }
    }
}

impl<F: Display, S: Display> Display for Pair<F, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pair_of() {
        let p = Pair::of(3, "abc");
        assert_eq!(p.first, 3);
        assert_eq!(p.second, "abc");
    }

    #[test]
    fn test_pair_eq() {
        assert_eq!(Pair::of(1, 2), Pair::of(1, 2));
        assert_ne!(Pair::of(1, 2), Pair::of(2, 1));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_pair_display() {
        let p = Pair::of(1, 2.5);
        assert_eq!(p.to_string(), "(1, 2.5)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pair_serde() {
        let p = Pair::of(7u32, -1i64);
        let s = serde_json::to_string(&p).unwrap();
        let q: Pair<u32, i64> = serde_json::from_str(&s).unwrap();
        assert_eq!(p, q);
    }
}
