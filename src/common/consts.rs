//! Static constants.

use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use num_traits::FromPrimitive;

/// Decimal expansion of ln(2) with 114 significant digits. Range reduction in
/// the logarithm and exponential engines multiplies this literal by the
/// reduction counter, so results that ask for more digits than the literal
/// carries are undefined past it.
pub(crate) const LN2_STR: &str = "0.693147180559945309417232121458176568075500134360255254120680009493393621969694715605863326996418687542001481021923";

lazy_static! {

    /// 1
    pub(crate) static ref ONE: BigDecimal = BigDecimal::from(1u32);

    /// 2
    pub(crate) static ref TWO: BigDecimal = BigDecimal::from(2u32);

    /// ln(2)
    pub(crate) static ref LN2: BigDecimal = LN2_STR.parse().expect("Constant LN2 initialization.");

    /// The exact decimal expansion of the f64 value closest to pi.
    pub(crate) static ref PI_F64: BigDecimal = BigDecimal::from_f64(core::f64::consts::PI).expect("Constant PI_F64 initialization.");
}
