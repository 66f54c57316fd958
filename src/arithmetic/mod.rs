mod affine_point;
mod field;
mod point;

pub use affine_point::AffinePoint;
pub use field::FieldElement;
pub use point::Point;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("attempted to invert a zero field element")]
    TriedToInvertZero,
}
