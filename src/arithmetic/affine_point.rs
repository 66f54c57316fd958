use super::field::FieldElement;
use super::point::Point;
use crate::curve::Curve;

use std::fmt;

/// A curve point in affine form. The point at infinity has no finite affine
/// coordinates, so it is tagged via `z`: `z` is one for a general point and
/// zero for the identity, which keeps the identity distinguishable from a
/// genuine point with zero coordinates. This invariant is preserved by every
/// constructor.
#[derive(Debug, Clone)]
pub struct AffinePoint<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
    z: FieldElement<C>,
}

impl<C: Curve> AffinePoint<C> {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub const GENERATOR: Self = Self {
        x: FieldElement(C::GENERATOR_X, std::marker::PhantomData),
        y: FieldElement(C::GENERATOR_Y, std::marker::PhantomData),
        z: FieldElement::ONE,
    };

    /// Wraps affine coordinates. The caller guarantees that `(x, y)` denotes
    /// a point on the curve.
    pub fn new(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self {
            x,
            y,
            z: FieldElement::ONE,
        }
    }

    #[inline(always)]
    pub fn x(&self) -> &FieldElement<C> {
        &self.x
    }

    #[inline(always)]
    pub fn y(&self) -> &FieldElement<C> {
        &self.y
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.z == FieldElement::ZERO
    }

    /// Lifts into Jacobian coordinates with `Z = 1` (or `Z = 0` for the
    /// identity). Costs nothing in field arithmetic.
    pub fn to_point(&self) -> Point<C> {
        Point::new(self.x, self.y, self.z)
    }

    pub fn into_point(self) -> Point<C> {
        Point::new(self.x, self.y, self.z)
    }
}

impl<C: Curve> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        // the tags must agree, otherwise the identity would compare equal to
        // a finite point with coincidentally matching coordinates
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<C: Curve> From<Point<C>> for AffinePoint<C> {
    fn from(point: Point<C>) -> Self {
        point.into_affine()
    }
}

impl<C: Curve> From<&Point<C>> for AffinePoint<C> {
    fn from(point: &Point<C>) -> Self {
        point.clone().into_affine()
    }
}

impl<C: Curve> From<AffinePoint<C>> for Point<C> {
    fn from(point: AffinePoint<C>) -> Self {
        point.into_point()
    }
}

impl<C: Curve> From<&AffinePoint<C>> for Point<C> {
    fn from(point: &AffinePoint<C>) -> Self {
        point.to_point()
    }
}

impl<C: Curve> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn neg(self) -> Self::Output {
        AffinePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Add for AffinePoint<C> {
    type Output = Point<C>;
    fn add(self, rhs: Self) -> Self::Output {
        self.into_point().geometric_add(&rhs.into_point())
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b AffinePoint<C>> for &'a AffinePoint<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b AffinePoint<C>) -> Self::Output {
        self.to_point().geometric_add(&rhs.to_point())
    }
}

impl<C: Curve> std::ops::Add<&AffinePoint<C>> for Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &AffinePoint<C>) -> Self::Output {
        self.geometric_add(&rhs.to_point())
    }
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "x: {}", self.x.inner())?;
        writeln!(f, "y: {}", self.y.inner())?;
        writeln!(f, "z: {}", self.z.inner())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::Secp256k1;
    use crate::U256;

    type SecAffine = AffinePoint<Secp256k1>;
    type SecPoint = Point<Secp256k1>;

    #[test]
    fn affine_projective_round_trip() {
        let affine = SecAffine::GENERATOR;
        let point = affine.to_point();
        assert_eq!(point.z().inner(), &U256::ONE);
        let back = point.into_affine();
        assert_eq!(back, affine);
        assert_eq!(back.x().inner(), &Secp256k1::GENERATOR_X);
        assert_eq!(back.y().inner(), &Secp256k1::GENERATOR_Y);
    }

    #[test]
    fn conversion_is_idempotent() {
        // to affine and back reproduces (x, y, 1) exactly, not just up to
        // projective scaling
        let point = SecPoint::GENERATOR.double();
        let normalized = AffinePoint::from(&point).into_point();
        assert_eq!(normalized.z().inner(), &U256::ONE);
        let renormalized = AffinePoint::from(&normalized).into_point();
        assert_eq!(renormalized.x().inner(), normalized.x().inner());
        assert_eq!(renormalized.y().inner(), normalized.y().inner());
        assert_eq!(renormalized.z().inner(), normalized.z().inner());
    }

    #[test]
    fn identity_round_trip() {
        let identity = SecAffine::IDENTITY;
        assert!(identity.is_identity());
        assert!(identity.to_point().is_identity());
        assert_eq!(AffinePoint::from(identity.to_point()), SecAffine::IDENTITY);
    }

    #[test]
    fn identity_is_not_a_zero_coordinate_point() {
        // the tag separates the identity from any finite point, even one
        // with coincidentally matching coordinates
        let finite = SecAffine::new(FieldElement::ZERO, FieldElement::ONE);
        assert!(!finite.is_identity());
        assert_ne!(finite, SecAffine::IDENTITY);
        assert_ne!(SecAffine::IDENTITY, finite);
    }

    #[test]
    fn negated_point_sums_to_identity() {
        let g = SecAffine::GENERATOR;
        let neg_g = -(&g);
        assert!((&g + &neg_g).is_identity());
    }

    #[test]
    fn mixed_addition_matches_projective_addition() {
        let g = SecPoint::GENERATOR;
        let g2 = g.double();
        let affine_g2 = AffinePoint::from(&g2);
        assert_eq!(g.clone() + &affine_g2, g.geometric_add(&g2));
    }
}
