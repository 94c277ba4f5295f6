#[macro_use]
mod macros;

mod bounds;
mod common;
mod matrix;
mod normal;
mod point;
mod ray;
mod transform;
pub mod transforms;
mod vector;

pub use bounds::Bounds3;
pub use common::{gamma, FloatValueType};
pub use matrix::Matrix4x4;
pub use normal::{normal, Normal};
pub use point::{point3, Point3};
pub use ray::Ray;
pub use transform::Transform;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

/// Applies `m` to the homogeneous point `(p, 1)` and drops the w component.
///
/// Unlike `&Transform * Point3`, there is no perspective divide.
#[inline]
pub fn transform_point<T>(m: &Matrix4x4<T>, p: Point3<T>) -> Point3<T>
where
    T: FloatValueType,
{
    Point3::from(m.mul_vec4(Vec4::new(p.x, p.y, p.z, T::one())).xyz())
}

/// Applies `m` to the homogeneous direction `(v, 0)` and drops the w component.
#[inline]
pub fn transform_vector<T>(m: &Matrix4x4<T>, v: Vec3<T>) -> Vec3<T>
where
    T: FloatValueType,
{
    m.mul_vec4(v.extend(T::zero())).xyz()
}
