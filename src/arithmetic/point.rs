use super::affine_point::AffinePoint;
use super::field::FieldElement;
use crate::curve::Curve;

use std::fmt;
use std::marker::PhantomData;

/// A curve point in Jacobian projective coordinates: `(X, Y, Z)` denotes the
/// affine point `(X / Z^2, Y / Z^3)`, and `Z = 0` denotes the point at
/// infinity. Representations are not unique, so raw coordinate equality is
/// not point equality; `PartialEq` compares the underlying points.
#[derive(Debug, Clone)]
pub struct Point<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
    z: FieldElement<C>,
}

impl<C: Curve> Point<C> {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub const GENERATOR: Self = Self {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
        z: FieldElement::ONE,
    };

    pub fn new(x: FieldElement<C>, y: FieldElement<C>, z: FieldElement<C>) -> Self {
        Self { x, y, z }
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
    pub fn z(&self) -> &FieldElement<C> {
        &self.z
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.z == FieldElement::ZERO
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let a = FieldElement::new(C::COEFF_A);
        let b = FieldElement::new(C::COEFF_B);

        let y2 = self.y * self.y;
        let x3 = self.x * self.x * self.x;
        let z2 = self.z * self.z;
        let z4 = z2 * z2;
        let z6 = z4 * z2;

        y2 == x3 + a * self.x * z4 + b * z6
    }

    /// Doubles the point without inverting anything ("dbl-2009-l").
    ///
    /// Only valid for curves with `COEFF_A = 0`. The input must not be the
    /// point at infinity; [`Point::geometric_add`] dispatches that case before
    /// it gets here. A point with `y = 0` (two-torsion) correctly doubles to
    /// the point at infinity, since `Z3 = 2*Y1*Z1` vanishes.
    pub fn double(&self) -> Point<C> {
        let a = self.x * self.x;
        let b = self.y * self.y;
        let c = b * b;
        // D = 2*((X1 + B)^2 - A - C)
        let x1b = self.x + b;
        let mut d = x1b * x1b - a - c;
        d += d;
        // E = 3*A
        let e = a + a + a;
        let f = e * e;
        let x3 = f - (d + d);
        // Y3 = E*(D - X3) - 8*C
        let mut c8 = c + c;
        c8 += c8;
        c8 += c8;
        let y3 = e * (d - x3) - c8;
        // Z3 = 2*Y1*Z1
        let yz = self.y * self.z;
        let z3 = yz + yz;

        Point::new(x3, y3, z3)
    }

    /// Adds two distinct points without inverting anything ("add-2007-bl").
    ///
    /// Strictly the generic case: neither input may be the point at infinity,
    /// and the inputs must not be equal or each other's negation. The formula
    /// does not detect those inputs and silently returns a wrong point for
    /// them; [`Point::geometric_add`] performs the classification.
    pub fn generic_add(&self, rhs: &Point<C>) -> Point<C> {
        let z1z1 = self.z * self.z;
        let z2z2 = rhs.z * rhs.z;
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;
        let h = u2 - u1;
        // I = (2*H)^2
        let h2 = h + h;
        let i = h2 * h2;
        let j = h * i;
        // r = 2*(S2 - S1)
        let s_diff = s2 - s1;
        let r = s_diff + s_diff;
        let v = u1 * i;
        // X3 = r^2 - J - 2*V
        let x3 = r * r - j - v - v;
        // Y3 = r*(V - X3) - 2*S1*J
        let s1j = s1 * j;
        let y3 = r * (v - x3) - s1j - s1j;
        // Z3 = ((Z1 + Z2)^2 - Z1Z1 - Z2Z2)*H
        let z_sum = self.z + rhs.z;
        let z3 = (z_sum * z_sum - z1z1 - z2z2) * h;

        Point::new(x3, y3, z3)
    }

    /// Complete addition. Classifies the inputs (identity, equal, mutual
    /// inverses, generic) and dispatches to the formula that is valid for
    /// that case. The `+` operators are wired to this, never to the raw
    /// [`Point::generic_add`].
    pub fn geometric_add(&self, rhs: &Point<C>) -> Point<C> {
        if self.is_identity() {
            return rhs.clone();
        }
        if rhs.is_identity() {
            return self.clone();
        }

        // U1 = U2 means the affine x coordinates coincide; S1 = S2 then
        // separates P == Q from P == -Q without any inversion
        let z1z1 = self.z * self.z;
        let z2z2 = rhs.z * rhs.z;
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;

        if u1 == u2 {
            let s1 = self.y * rhs.z * z2z2;
            let s2 = rhs.y * self.z * z1z1;
            if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            }
        } else {
            self.generic_add(rhs)
        }
    }

    /// Converts back to affine form, the only operation that requires a
    /// modular inversion. The point at infinity converts to the tagged
    /// [`AffinePoint::IDENTITY`] without attempting an inversion.
    pub fn into_affine(self) -> AffinePoint<C> {
        match self.z.inverse() {
            Ok(z_inv) => {
                // x = X / Z^2, y = Y / Z^3
                let z_inv_sq = z_inv * z_inv;
                AffinePoint::new(self.x * z_inv_sq, self.y * z_inv_sq * z_inv)
            }
            // z is always reduced, so inversion fails only for z = 0,
            // i.e. the point at infinity
            Err(_) => AffinePoint::IDENTITY,
        }
    }
}

impl<C: Curve> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_identity() || other.is_identity() {
            return self.is_identity() && other.is_identity();
        }
        let z1z1 = self.z * self.z;
        let z2z2 = other.z * other.z;

        let x_eq = self.x * z2z2 == other.x * z1z1;
        let y_eq = self.y * other.z * z2z2 == other.y * self.z * z1z1;
        x_eq && y_eq
    }
}

impl<C: Curve> std::ops::Neg for Point<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Neg for &Point<C> {
    type Output = Point<C>;
    fn neg(self) -> Self::Output {
        Point {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Add for Point<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&Point<C>> for Point<C> {
    fn add_assign(&mut self, rhs: &Point<C>) {
        *self = &*self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for Point<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: &'b Point<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "x: {}", self.x.inner())?;
        writeln!(f, "y: {}", self.y.inner())?;
        writeln!(f, "z: {}", self.z.inner())
    }
}
