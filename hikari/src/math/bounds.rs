use std::ops::{Index, IndexMut};

use super::{
    common::{gamma, FloatValueType},
    point::Point3,
    ray::Ray,
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional axis-aligned bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: FloatValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Creates the `Bounds3` spanned by two corner points.
    #[inline]
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns a `Bounds3` that also covers `p`.
    #[inline]
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns a `Bounds3` that covers both `self` and `other`.
    #[inline]
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Checks if `p` is inside this `Bounds3`, boundary included.
    #[inline]
    pub fn inside(&self, p: Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Returns the vector from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Checks if the ray hits this `Bounds3` in front of its origin.
    /// `inv_dir` is the component-wise reciprocal of `ray.d`, precomputed by the caller.
    ///
    /// Zero direction components give infinite slabs. A NaN slab, i.e. the origin lying on
    /// a slab plane with a zero direction component, never rejects.
    pub fn intersect_p(&self, ray: &Ray<T>, inv_dir: Vec3<T>) -> bool {
        let mut t0 = T::zero();
        let mut t1 = T::infinity();
        let far_scale = T::one() + gamma::<T>(3) * (T::one() + T::one());
        for i in 0..3 {
            let mut t_near = (self.p_min[i] - ray.o[i]) * inv_dir[i];
            let mut t_far = (self.p_max[i] - ray.o[i]) * inv_dir[i];
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            // Robust against rounding in the slab distances
            t_far *= far_scale;

            // Written so that NaNs keep the previous interval
            if t_near > t0 {
                t0 = t_near;
            }
            if t_far < t1 {
                t1 = t_far;
            }
            if t0 > t1 {
                return false;
            }
        }
        true
    }
}

impl<T> Default for Bounds3<T>
where
    T: FloatValueType,
{
    /// Creates an empty `Bounds3` that any union overrides.
    fn default() -> Self {
        Self {
            p_min: Point3::from(T::infinity()),
            p_max: Point3::from(T::neg_infinity()),
        }
    }
}

impl<T> Index<usize> for Bounds3<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn index(&self, i: usize) -> &Point3<T> {
        match i {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Out of bounds Bounds3 access with index {}", i),
        }
    }
}

impl<T> IndexMut<usize> for Bounds3<T>
where
    T: FloatValueType,
{
    fn index_mut(&mut self, i: usize) -> &mut Point3<T> {
        match i {
            0 => &mut self.p_min,
            1 => &mut self.p_max,
            _ => panic!("Out of bounds Bounds3 access with index {}", i),
        }
    }
}
