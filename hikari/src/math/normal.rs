use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// Direction perpendicular to a surface, not necessarily of unit length.
///
/// A separate type from [Vec3] so that `&Transform * Normal` can apply the inverse
/// transpose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: FloatValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_components!(Normal { x: 0, y: 1, z: 2 });
impl_neg!(Normal { x, y, z });
impl_op!(Add add + Normal Normal -> Normal { x, y, z });
impl_op!(Sub sub - Normal Normal -> Normal { x, y, z });
impl_assign_op!(AddAssign add_assign += Normal Normal { x, y, z });
impl_assign_op!(SubAssign sub_assign -= Normal Normal { x, y, z });
impl_vec_members!(Normal { x, y, z });

impl<T> Normal<T>
where
    T: FloatValueType,
{
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        Vec3::from(*self).dot(v)
    }
}

#[inline]
pub fn normal<T>(x: T, y: T, z: T) -> Normal<T>
where
    T: FloatValueType,
{
    Normal::new(x, y, z)
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Normal { x: v.x, y: v.y, z: v.z }
    }
}
