use super::{object_ray, point_on_ray, world_hit};
use crate::{
    hit::ShapeHit,
    math::{Normal, Ray, Vec3},
    scene::Geometry,
};

const RADIUS: f32 = 0.5;

/// Intersects `ray` with the sphere of radius 0.5 around the object space origin of `geom`.
///
/// A ray starting inside reports the exit point with `outside == false` and a normal
/// facing back toward the ray origin.
pub fn intersect_sphere(geom: &Geometry, ray: Ray<f32>) -> Option<ShapeHit> {
    let q = object_ray(geom, &ray);
    let o = Vec3::from(q.o);

    // Direction is of unit length so the quadratic's a is 1
    let b = o.dot(q.d);
    let radicand = b * b - (o.len_sqr() - RADIUS * RADIUS);
    // Also rejects NaNs from a degenerate direction
    if !(radicand >= 0.0) {
        return None;
    }

    let root = radicand.sqrt();
    let t1 = -b + root;
    let t2 = -b - root;

    let (t, outside) = if t1 < 0.0 && t2 < 0.0 {
        return None;
    } else if t1 > 0.0 && t2 > 0.0 {
        (t1.min(t2), true)
    } else {
        (t1.max(t2), false)
    };

    let n = Normal::from(Vec3::from(point_on_ray(&q, t)));
    let (p, t, n) = world_hit(geom, &ray, &q, t, n);
    let n = if outside { n } else { -n };

    Some(ShapeHit { t, p, n, outside })
}
