use approx::{AbsDiffEq, RelativeEq};

use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A half-infinite ray. The direction is not required to be of unit length.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>) -> Self {
        Self { o, d }
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the [Point3] on this `Ray` at parameter `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }

    /// Returns this `Ray` with a normalized direction.
    pub fn normalized(&self) -> Self {
        Self::new(self.o, self.d.normalized())
    }
}

impl<T> AbsDiffEq for Ray<T>
where
    T: FloatValueType,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.o.abs_diff_eq(&other.o, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl<T> RelativeEq for Ray<T>
where
    T: FloatValueType,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.o.relative_eq(&other.o, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
