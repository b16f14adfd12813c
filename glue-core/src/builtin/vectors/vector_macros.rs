/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![macro_use]

/// Implements component-wise arithmetic operators for a vector type: `-v`, `v + v`, `v - v`, `v * v`, `v * s`, `s * v`,
/// `v / v`, `v / s`, and the assigning forms.
macro_rules! impl_vector_operators {
    (
        // Name of the vector type, for example `Vector2`.
        $Vector:ty,
        // Type of each individual component, for example `real`.
        $Scalar:ty,
        // Names of the components, with parentheses, for example `(x, y)`.
        ($($comp:ident),*)
    ) => {
        impl std::ops::Neg for $Vector {
            type Output = Self;
            fn neg(mut self) -> Self::Output {
                $( self.$comp = -self.$comp; )*
                self
            }
        }

        impl_vector_operators!(@binary $Vector, $Scalar, ($($comp),*), Add, add, AddAssign, add_assign);
        impl_vector_operators!(@binary $Vector, $Scalar, ($($comp),*), Sub, sub, SubAssign, sub_assign);
        impl_vector_operators!(@binary $Vector, $Scalar, ($($comp),*), Mul, mul, MulAssign, mul_assign);
        impl_vector_operators!(@binary $Vector, $Scalar, ($($comp),*), Div, div, DivAssign, div_assign);
        impl_vector_operators!(@scalar $Vector, $Scalar, ($($comp),*), Mul, mul, MulAssign, mul_assign);
        impl_vector_operators!(@scalar $Vector, $Scalar, ($($comp),*), Div, div, DivAssign, div_assign);

        impl std::ops::Mul<$Vector> for $Scalar {
            type Output = $Vector;
            fn mul(self, mut rhs: $Vector) -> Self::Output {
                $( rhs.$comp = rhs.$comp * self; )*
                rhs
            }
        }
    };

    (@binary $Vector:ty, $Scalar:ty, ($($comp:ident),*), $Operator:ident, $func:ident, $AssignOperator:ident, $assign_func:ident) => {
        impl std::ops::$Operator for $Vector {
            type Output = Self;
            fn $func(mut self, rhs: $Vector) -> Self::Output {
                $( self.$comp = std::ops::$Operator::$func(self.$comp, rhs.$comp); )*
                self
            }
        }

        impl std::ops::$AssignOperator for $Vector {
            fn $assign_func(&mut self, rhs: $Vector) {
                $( std::ops::$AssignOperator::$assign_func(&mut self.$comp, rhs.$comp); )*
            }
        }
    };

    (@scalar $Vector:ty, $Scalar:ty, ($($comp:ident),*), $Operator:ident, $func:ident, $AssignOperator:ident, $assign_func:ident) => {
        impl std::ops::$Operator<$Scalar> for $Vector {
            type Output = Self;
            fn $func(mut self, rhs: $Scalar) -> Self::Output {
                $( self.$comp = std::ops::$Operator::$func(self.$comp, rhs); )*
                self
            }
        }

        impl std::ops::$AssignOperator<$Scalar> for $Vector {
            fn $assign_func(&mut self, rhs: $Scalar) {
                $( std::ops::$AssignOperator::$assign_func(&mut self.$comp, rhs); )*
            }
        }
    };
}

/// Constructors, glam conversions and component-wise functions shared by float and integer vectors.
macro_rules! impl_vector_fns {
    (
        // Name of the vector type.
        $Vector:ty,
        // Corresponding glam type.
        $GlamVector:ty,
        // Type of each individual component.
        $Scalar:ty,
        // Names of the components, with parentheses.
        ($($comp:ident),*)
    ) => {
        /// # Constructors and general vector functions
        impl $Vector {
            /// Creates a vector with the given components.
            #[inline]
            pub const fn new($($comp: $Scalar),*) -> Self {
                Self { $($comp),* }
            }

            /// Creates a vector with all components set to `v`.
            #[inline]
            pub const fn splat(v: $Scalar) -> Self {
                Self { $($comp: v),* }
            }

            /// Returns a new vector with all components in absolute values (i.e. positive or zero).
            #[inline]
            pub fn abs(self) -> Self {
                Self::from_glam(self.to_glam().abs())
            }

            /// Returns a new vector containing the minimum of the two vectors, component-wise.
            #[inline]
            pub fn coord_min(self, other: Self) -> Self {
                self.glam2(&other, |a, b| a.min(b))
            }

            /// Returns a new vector containing the maximum of the two vectors, component-wise.
            #[inline]
            pub fn coord_max(self, other: Self) -> Self {
                self.glam2(&other, |a, b| a.max(b))
            }

            #[inline]
            pub(crate) fn from_glam(v: $GlamVector) -> Self {
                Self::new($(v.$comp),*)
            }

            #[inline]
            pub(crate) fn to_glam(self) -> $GlamVector {
                <$GlamVector>::new($(self.$comp),*)
            }

            #[inline]
            pub(crate) fn glam2<F>(&self, rhs: &Self, f: F) -> Self
            where
                F: FnOnce($GlamVector, $GlamVector) -> $GlamVector,
            {
                Self::from_glam(f(self.to_glam(), rhs.to_glam()))
            }
        }

        impl From<$GlamVector> for $Vector {
            fn from(v: $GlamVector) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$Vector> for $GlamVector {
            fn from(v: $Vector) -> Self {
                v.to_glam()
            }
        }
    };
}

/// Functions only meaningful for floating-point vectors.
macro_rules! impl_float_vector_fns {
    (
        // Name of the vector type.
        $Vector:ty,
        // Names of the components, with parentheses.
        ($($comp:ident),*)
    ) => {
        /// # Float-specific functions
        impl $Vector {
            /// Returns the length (magnitude) of this vector.
            #[inline]
            pub fn length(self) -> real {
                self.to_glam().length()
            }

            /// Squared length; cheaper than [`length()`](Self::length) when only comparing.
            #[inline]
            pub fn length_squared(self) -> real {
                self.to_glam().length_squared()
            }

            /// Returns the vector scaled to unit length. If the vector is zero, the result is also zero.
            #[inline]
            pub fn normalized(self) -> Self {
                Self::from_glam(self.to_glam().normalize_or_zero())
            }

            /// Whether the vector has unit length, with the engine's tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                crate::builtin::real_inner::is_equal_approx(self.length_squared(), 1.0)
            }

            #[inline]
            pub fn dot(self, with: Self) -> real {
                self.to_glam().dot(with.to_glam())
            }

            #[inline]
            pub fn distance_to(self, to: Self) -> real {
                (to - self).length()
            }

            /// Linear interpolation between `self` (at `weight = 0`) and `to` (at `weight = 1`).
            #[inline]
            pub fn lerp(self, to: Self, weight: real) -> Self {
                Self::new($( self.$comp + (to.$comp - self.$comp) * weight ),*)
            }

            /// Returns `true` if each component is approximately equal to the corresponding one of `to`.
            #[inline]
            pub fn is_equal_approx(self, to: Self) -> bool {
                $( crate::builtin::real_inner::is_equal_approx(self.$comp, to.$comp) )&&*
            }

            /// Returns `true` if no component is infinite or NaN.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_glam().is_finite()
            }
        }
    };
}

/// `Display` as `(x, y[, z])`, matching the engine's string conversion.
macro_rules! impl_vector_display {
    ($Vector:ty, ($first:ident $(, $comp:ident)*)) => {
        impl std::fmt::Display for $Vector {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}", self.$first)?;
                $( write!(f, ", {}", self.$comp)?; )*
                write!(f, ")")
            }
        }
    };
}
