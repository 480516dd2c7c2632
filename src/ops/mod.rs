//! Mathematical functions over decimal numbers.

pub(crate) mod consts;
pub(crate) mod exp;
pub(crate) mod ln;
pub(crate) mod pow;
pub(crate) mod sqrt;
