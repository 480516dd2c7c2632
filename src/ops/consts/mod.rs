//! Constants computed to arbitrary precision.

mod pi;

pub use pi::pi;
