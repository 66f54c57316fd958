use super::ArithmeticError;
use crate::curve::Curve;
use crate::U256;

use bigint::{Encoding, NonZero, Split, U512};

use std::marker::PhantomData;

/// An element of the curve's base field, always reduced modulo
/// `C::PRIME_MODULUS`. Every arithmetic operator reduces its result
/// immediately, so intermediate values never exceed the modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn new(number: U256) -> Self {
        let reduced = if number < C::PRIME_MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(C::PRIME_MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    pub fn inner(&self) -> &U256 {
        &self.0
    }

    /// Modular exponentiation via square-and-multiply over the exponent's
    /// big-endian bits. Not constant time.
    pub fn pow(&self, exponent: &U256) -> Self {
        let mut result = Self::ONE;
        for byte in exponent.to_be_bytes() {
            for shift in (0..8).rev() {
                result = result * result;
                if (byte >> shift) & 1 == 1 {
                    result = result * *self;
                }
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem, i.e. `z^(P - 2)`.
    /// The modulus is prime, so this fails only for the zero element.
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.0 == U256::ZERO {
            return Err(ArithmeticError::TriedToInvertZero);
        }
        let exponent = C::PRIME_MODULUS.wrapping_sub(&U256::from_u8(2));
        Ok(self.pow(&exponent))
    }
}

pub(crate) fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    // U512::from takes the (hi, lo) halves, most significant first
    let mod512 = NonZero::new(U512::from((U256::ZERO, *modulus))).unwrap();
    // mul_wide returns the (lo, hi) halves of the full 512-bit product
    let (lo, hi) = lhs.mul_wide(rhs);
    let product = U512::from((hi, lo));
    // split returns the remainder's (hi, lo) halves; 'hi' is always zero
    // because the modulus fits in a U256
    let (_, rem) = (product % mod512).split();
    rem
}

impl<C: Curve> std::ops::Add for FieldElement<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.add_mod(&rhs.0, &C::PRIME_MODULUS), PhantomData)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn add(self, rhs: &'b FieldElement<C>) -> Self::Output {
        *self + *rhs
    }
}

impl<C: Curve> std::ops::AddAssign for FieldElement<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for FieldElement<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.sub_mod(&rhs.0, &C::PRIME_MODULUS), PhantomData)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn sub(self, rhs: &'b FieldElement<C>) -> Self::Output {
        *self - *rhs
    }
}

impl<C: Curve> std::ops::SubAssign for FieldElement<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Curve> std::ops::Neg for FieldElement<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(self.0.neg_mod(&C::PRIME_MODULUS), PhantomData)
    }
}

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(mul_mod_u256(&self.0, &rhs.0, &C::PRIME_MODULUS), PhantomData)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &'b FieldElement<C>) -> Self::Output {
        *self * *rhs
    }
}

impl<C: Curve> std::ops::MulAssign for FieldElement<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
