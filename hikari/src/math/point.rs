use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about Point ops:
// Some don't really make mathematical sense but are useful in weighted sums
// point + point = point
// point * scalar = point
// point *= scalar

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: FloatValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl_components!(Point3 { x: 0, y: 1, z: 2 });
impl_op!(Add add + Point3 Vec3 -> Point3 { x, y, z });
impl_op!(Add add + Point3 Point3 -> Point3 { x, y, z });
impl_op!(Sub sub - Point3 Vec3 -> Point3 { x, y, z });
impl_op!(Sub sub - Point3 Point3 -> Vec3 { x, y, z });
impl_assign_op!(AddAssign add_assign += Point3 Vec3 { x, y, z });
impl_assign_op!(SubAssign sub_assign -= Point3 Vec3 { x, y, z });

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Returns the distance between the two points.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    /// Returns the component-wise minimum of the two points.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Returns the component-wise maximum of the two points.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

/// Shorthand constructor
#[inline]
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T>
where
    T: FloatValueType,
{
    Point3::new(x, y, z)
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
