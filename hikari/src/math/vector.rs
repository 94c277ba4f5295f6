use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{common::FloatValueType, normal::Normal, point::Point3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A four-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec4<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component of the vector.
    pub w: T,
}

impl_components!(Vec2 { x: 0, y: 1 });
impl_neg!(Vec2 { x, y });
impl_op!(Add add + Vec2 Vec2 -> Vec2 { x, y });
impl_op!(Sub sub - Vec2 Vec2 -> Vec2 { x, y });
impl_assign_op!(AddAssign add_assign += Vec2 Vec2 { x, y });
impl_assign_op!(SubAssign sub_assign -= Vec2 Vec2 { x, y });
impl_vec_members!(Vec2 { x, y });

impl_components!(Vec3 { x: 0, y: 1, z: 2 });
impl_neg!(Vec3 { x, y, z });
impl_op!(Add add + Vec3 Vec3 -> Vec3 { x, y, z });
impl_op!(Sub sub - Vec3 Vec3 -> Vec3 { x, y, z });
impl_assign_op!(AddAssign add_assign += Vec3 Vec3 { x, y, z });
impl_assign_op!(SubAssign sub_assign -= Vec3 Vec3 { x, y, z });
impl_vec_members!(Vec3 { x, y, z });

impl_components!(Vec4 { x: 0, y: 1, z: 2, w: 3 });
impl_neg!(Vec4 { x, y, z, w });
impl_op!(Add add + Vec4 Vec4 -> Vec4 { x, y, z, w });
impl_op!(Sub sub - Vec4 Vec4 -> Vec4 { x, y, z, w });
impl_assign_op!(AddAssign add_assign += Vec4 Vec4 { x, y, z, w });
impl_assign_op!(SubAssign sub_assign -= Vec4 Vec4 { x, y, z, w });
impl_vec_members!(Vec4 { x, y, z, w });

/// Shorthand constructor
#[inline]
pub fn vec2<T>(x: T, y: T) -> Vec2<T>
where
    T: FloatValueType,
{
    Vec2::new(x, y)
}

/// Shorthand constructor
#[inline]
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: FloatValueType,
{
    Vec3::new(x, y, z)
}

/// Shorthand constructor
#[inline]
pub fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T>
where
    T: FloatValueType,
{
    Vec4::new(x, y, z, w)
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: (self.y * other.z) - (self.z * other.y),
            y: (self.z * other.x) - (self.x * other.z),
            z: (self.x * other.y) - (self.y * other.x),
        }
    }

    /// Finds the value of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_comp(&self) -> T {
        self.x.max(self.y.max(self.z))
    }

    /// Finds the index of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        if self.x > self.y {
            if self.x > self.z {
                0
            } else {
                2
            }
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }

    /// Returns a `Vec3` with the components of this one in the order `x`, `y`, `z`.
    #[inline]
    pub fn permuted(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    /// Extends this `Vec3` into a [Vec4] with the given `w`.
    #[inline]
    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T> Vec4<T>
where
    T: FloatValueType,
{
    /// Drops the w component.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
