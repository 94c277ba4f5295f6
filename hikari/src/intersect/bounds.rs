use crate::math::{Bounds3, Ray, Vec3};

/// Cheap rejection test of an object space `ray` against the object space `bb`.
///
/// Conservative: anything inside `bb` that the ray hits in front of its origin passes.
/// Zero direction components aren't special cased, their infinite slabs fall out of the
/// interval logic.
#[inline]
pub fn hit_bounding_box(bb: &Bounds3<f32>, ray: &Ray<f32>) -> bool {
    let inv_dir = Vec3::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
    bb.intersect_p(ray, inv_dir)
}
