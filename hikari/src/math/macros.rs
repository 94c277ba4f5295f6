// Component-wise impls shared by the vector-like containers.
// All of them are plain structs of named `T` components.

/// Constructors, NaN checks, indexing, scalar ops and approx comparisons.
macro_rules! impl_components {
    ($ty:ident { $($c:ident: $i:literal),+ }) => {
        impl<T> $ty<T>
        where
            T: FloatValueType,
        {
            /// Constructs a new value from its components.
            ///
            /// NaNs are allowed through as degenerate input has to propagate to the
            /// hit tests instead of panicking.
            #[inline]
            pub fn new($($c: T),+) -> Self {
                Self { $($c),+ }
            }

            /// Constructs a new value of 0s.
            #[inline]
            pub fn zeros() -> Self {
                Self { $($c: T::zero()),+ }
            }

            /// Constructs a new value of 1s.
            #[inline]
            pub fn ones() -> Self {
                Self { $($c: T::one()),+ }
            }

            /// Returns `true` if any component is NaN.
            #[inline]
            pub fn has_nans(&self) -> bool {
                false $(|| self.$c.is_nan())+
            }
        }

        impl<T> Default for $ty<T>
        where
            T: FloatValueType,
        {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T> From<T> for $ty<T>
        where
            T: FloatValueType,
        {
            fn from(v: T) -> Self {
                Self { $($c: v),+ }
            }
        }

        impl<T> Index<usize> for $ty<T>
        where
            T: FloatValueType,
        {
            type Output = T;

            fn index(&self, i: usize) -> &T {
                match i {
                    $($i => &self.$c,)+
                    _ => panic!("Out of bounds {} access with index {}", stringify!($ty), i),
                }
            }
        }

        impl<T> IndexMut<usize> for $ty<T>
        where
            T: FloatValueType,
        {
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($i => &mut self.$c,)+
                    _ => panic!("Out of bounds {} access with index {}", stringify!($ty), i),
                }
            }
        }

        impl<T> Mul<T> for $ty<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self { $($c: self.$c * s),+ }
            }
        }

        impl<T> Div<T> for $ty<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                Self { $($c: self.$c / s),+ }
            }
        }

        impl<T> MulAssign<T> for $ty<T>
        where
            T: FloatValueType,
        {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                $(self.$c *= s;)+
            }
        }

        impl<T> DivAssign<T> for $ty<T>
        where
            T: FloatValueType,
        {
            #[inline]
            fn div_assign(&mut self, s: T) {
                $(self.$c /= s;)+
            }
        }

        impl<T> AbsDiffEq for $ty<T>
        where
            T: FloatValueType,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$c.abs_diff_eq(&other.$c, epsilon))+
            }
        }

        impl<T> RelativeEq for $ty<T>
        where
            T: FloatValueType,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& self.$c.relative_eq(&other.$c, epsilon, max_relative))+
            }
        }
    };
}

/// Component-wise `Lhs op Rhs -> Out`.
macro_rules! impl_op {
    ($tr:ident $f:ident $op:tt $lhs:ident $rhs:ident -> $out:ident { $($c:ident),+ }) => {
        impl<T> $tr<$rhs<T>> for $lhs<T>
        where
            T: FloatValueType,
        {
            type Output = $out<T>;

            #[inline]
            fn $f(self, other: $rhs<T>) -> $out<T> {
                $out { $($c: self.$c $op other.$c),+ }
            }
        }
    };
}

/// Component-wise `Lhs op= Rhs`.
macro_rules! impl_assign_op {
    ($tr:ident $f:ident $op:tt $lhs:ident $rhs:ident { $($c:ident),+ }) => {
        impl<T> $tr<$rhs<T>> for $lhs<T>
        where
            T: FloatValueType,
        {
            #[inline]
            fn $f(&mut self, other: $rhs<T>) {
                $(self.$c $op other.$c;)+
            }
        }
    };
}

macro_rules! impl_neg {
    ($ty:ident { $($c:ident),+ }) => {
        impl<T> Neg for $ty<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }
    };
}

/// Length and direction members for types that behave like vectors.
macro_rules! impl_vec_members {
    ($ty:ident { $($c:ident),+ }) => {
        impl<T> $ty<T>
        where
            T: FloatValueType,
        {
            /// Returns the dot product of the two values.
            #[inline]
            pub fn dot(&self, other: Self) -> T {
                T::zero() $(+ self.$c * other.$c)+
            }

            /// Returns the squared length.
            #[inline]
            pub fn len_sqr(&self) -> T {
                self.dot(*self)
            }

            /// Returns the length.
            #[inline]
            pub fn len(&self) -> T {
                self.len_sqr().sqrt()
            }

            /// Returns the normalized value.
            ///
            /// A zero length input gives NaNs.
            #[inline]
            pub fn normalized(&self) -> Self {
                *self / self.len()
            }

            /// Returns the component-wise minimum of the two values.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self { $($c: self.$c.min(other.$c)),+ }
            }

            /// Returns the component-wise maximum of the two values.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self { $($c: self.$c.max(other.$c)),+ }
            }

            /// Returns the component-wise absolute value.
            #[inline]
            pub fn abs(&self) -> Self {
                Self { $($c: self.$c.abs()),+ }
            }
        }
    };
}
