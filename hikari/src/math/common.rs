use approx::RelativeEq;
use num::traits::{Float, FromPrimitive};
use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Float types that can be stored in the math containers
pub trait FloatValueType:
    Float
    + FromPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + RelativeEq<Epsilon = Self>
{
}

// Impl for all matching types
impl<T> FloatValueType for T where
    T: Float
        + FromPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + RelativeEq<Epsilon = T>
{
}

/// Conservative bound on the relative error of `n` consecutive floating point operations.
///
/// Based on Physically Based Rendering 3rd ed.
/// http://www.pbr-book.org/3ed-2018/Shapes/Managing_Rounding_Error.html
#[inline]
pub fn gamma<T>(n: u32) -> T
where
    T: FloatValueType,
{
    let machine_epsilon = T::epsilon() * T::from_f32(0.5).unwrap_or_else(T::zero);
    let n = T::from_u32(n).unwrap_or_else(T::zero);
    (n * machine_epsilon) / (T::one() - n * machine_epsilon)
}
