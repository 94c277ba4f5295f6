use super::{object_ray, world_hit};
use crate::{
    hit::ShapeHit,
    math::{Normal, Ray},
    scene::Geometry,
};

/// Intersects `ray` with the box spanning [-0.5, 0.5]³ in the object space of `geom`.
///
/// A ray starting inside reports the exit point with `outside == false` and a normal
/// facing back toward the ray origin.
pub fn intersect_box(geom: &Geometry, ray: Ray<f32>) -> Option<ShapeHit> {
    let q = object_ray(geom, &ray);

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    let mut n_min = None;
    let mut n_max = None;
    for axis in 0..3 {
        let t1 = (-0.5 - q.o[axis]) / q.d[axis];
        let t2 = (0.5 - q.o[axis]) / q.d[axis];
        let ta = t1.min(t2);
        let tb = t1.max(t2);

        // Faces toward the ray's side of the slab
        let mut n = Normal::zeros();
        n[axis] = if t2 < t1 { 1.0 } else { -1.0 };

        // Entry is only tracked in front of the origin
        if ta > 0.0 && ta > t_min {
            t_min = ta;
            n_min = Some(n);
        }
        if tb < t_max {
            t_max = tb;
            n_max = Some(n);
        }
    }

    // No finite exit means the direction was degenerate
    let n_max = n_max?;
    if !(t_max >= t_min && t_max > 0.0) {
        return None;
    }

    let (t, n, outside) = match n_min {
        Some(n_min) if t_min > 0.0 => (t_min, n_min, true),
        _ => (t_max, n_max, false),
    };

    let (p, t, n) = world_hit(geom, &ray, &q, t, n);
    Some(ShapeHit { t, p, n, outside })
}
