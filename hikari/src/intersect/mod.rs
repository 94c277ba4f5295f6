//! Ray vs. primitive tests.
//!
//! Each test moves the world space ray into the object space of the [Geometry],
//! normalizing its direction, solves there and maps the hit back to world space.
//! Misses are `None`.

mod bounds;
mod cube;
mod mesh;
mod sphere;
mod triangle;

pub use bounds::hit_bounding_box;
pub use cube::intersect_box;
pub use mesh::intersect_mesh;
pub use sphere::intersect_sphere;
pub use triangle::intersect_triangle;

use std::ops::{Add, Mul};

use crate::{
    hit::GeometryHit,
    math::{transform_point, transform_vector, Normal, Point3, Ray},
    scene::{Geometry, GeometryKind, Mesh, PrimitiveData},
};

/// Backward bias of [point_on_ray] to keep follow-up rays off the surface they leave.
pub const RAY_EPSILON: f32 = 1e-4;

/// Returns the point at distance `t - RAY_EPSILON` along the normalized direction of `ray`.
#[inline]
pub fn point_on_ray(ray: &Ray<f32>, t: f32) -> Point3<f32> {
    ray.o + ray.d.normalized() * (t - RAY_EPSILON)
}

/// Blends per-vertex values with the barycentric weights `(1 - u - v, u, v)`.
#[inline]
pub fn barycentric_interpolate<V>(a: V, b: V, c: V, u: f32, v: f32) -> V
where
    V: Copy + Add<Output = V> + Mul<f32, Output = V>,
{
    a * (1.0 - u - v) + b * u + c * v
}

/// Tests `ray` against any kind of [Geometry].
///
/// `meshes` is the table [GeometryKind::Mesh] indexes into.
pub fn intersect_geometry(
    geom: &Geometry,
    meshes: &[Mesh],
    data: &PrimitiveData,
    ray: Ray<f32>,
) -> Option<GeometryHit> {
    match geom.kind {
        GeometryKind::Cube => intersect_box(geom, ray).map(GeometryHit::Shape),
        GeometryKind::Sphere => intersect_sphere(geom, ray).map(GeometryHit::Shape),
        GeometryKind::Mesh(i) => {
            intersect_mesh(geom, &meshes[i], data, ray).map(GeometryHit::Mesh)
        }
    }
}

/// Moves `ray` into the object space of `geom` with a normalized direction.
#[inline]
fn object_ray(geom: &Geometry, ray: &Ray<f32>) -> Ray<f32> {
    let m = geom.world_to_object.m();
    Ray::new(
        transform_point(m, ray.o),
        transform_vector(m, ray.d).normalized(),
    )
}

/// Maps the object space hit at `t` on `object_ray` to world space.
///
/// Returns the world position, its distance from the world ray origin and the unit world
/// normal.
#[inline]
fn world_hit(
    geom: &Geometry,
    ray: &Ray<f32>,
    object_ray: &Ray<f32>,
    t: f32,
    n: Normal<f32>,
) -> (Point3<f32>, f32, Normal<f32>) {
    let p = transform_point(geom.object_to_world.m(), point_on_ray(object_ray, t));
    let n = Normal::from(transform_vector(&geom.inv_transpose, n.into()).normalized());
    (p, ray.o.dist(p), n)
}
