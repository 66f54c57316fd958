#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;

pub use bigint::U256;
pub use curve::Curve;
