use std::ops::Mul;

use super::{
    bounds::Bounds3,
    common::FloatValueType,
    matrix::Matrix4x4,
    normal::Normal,
    point::Point3,
    ray::Ray,
    transform_vector,
    vector::{Vec3, Vec4},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Transformations.html

/// A 4x4 transformation that carries its inverse along.
///
/// Composing with `*` keeps both halves in sync so the inverse is never recomputed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: Matrix4x4<T>,
    m_inv: Matrix4x4<T>,
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Builds a `Transform` from matrix rows, `None` if they don't invert.
    pub fn new(rows: [[T; 4]; 4]) -> Option<Self> {
        Self::new_m(Matrix4x4::new(rows))
    }

    /// Builds a `Transform` from `m`, `None` if `m` is singular.
    pub fn new_m(m: Matrix4x4<T>) -> Option<Self> {
        m.inverted().map(|m_inv| Self::new_full(m, m_inv))
    }

    /// Pairs `m` with a known inverse. The pair is trusted as is.
    pub fn new_full(m: Matrix4x4<T>, m_inv: Matrix4x4<T>) -> Self {
        debug_assert!(!m.has_nans());
        debug_assert!(!m_inv.has_nans());
        Self { m, m_inv }
    }

    pub fn m(&self) -> &Matrix4x4<T> {
        &self.m
    }

    pub fn m_inv(&self) -> &Matrix4x4<T> {
        &self.m_inv
    }

    /// Swaps the matrix and its inverse.
    pub fn inverted(&self) -> Self {
        Self {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    /// Transposes both halves. The transpose of the inverse is the inverse of the transpose.
    pub fn transposed(&self) -> Self {
        Self {
            m: self.m.transposed(),
            m_inv: self.m_inv.transposed(),
        }
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        let id = Matrix4x4::identity();
        Self::new_full(id, id)
    }
}

/// Directions ignore the translation.
impl<'a, T> Mul<Vec3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        transform_vector(&self.m, v)
    }
}

/// Points are divided by w when the last row isn't affine.
impl<'a, T> Mul<Point3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, p: Point3<T>) -> Point3<T> {
        let h = self.m.mul_vec4(Vec4::new(p.x, p.y, p.z, T::one()));
        let p = Point3::from(h.xyz());
        if h.w == T::one() {
            p
        } else {
            p / h.w
        }
    }
}

/// Normals go through the transposed inverse.
impl<'a, T> Mul<Normal<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Normal<T>;

    fn mul(self, n: Normal<T>) -> Normal<T> {
        let c = |i: usize| {
            let [x, y, z, _] = self.m_inv.col(i);
            x * n.x + y * n.y + z * n.z
        };
        Normal::new(c(0), c(1), c(2))
    }
}

impl<'a, T> Mul<Ray<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Ray<T>;

    fn mul(self, ray: Ray<T>) -> Ray<T> {
        Ray::new(self * ray.o, self * ray.d)
    }
}

/// Bounds of the eight transformed corners.
impl<'a, T> Mul<Bounds3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Bounds3<T>;

    fn mul(self, bb: Bounds3<T>) -> Bounds3<T> {
        let pick = |bit: bool, lo: T, hi: T| if bit { hi } else { lo };
        let corners = (0u8..8).map(|i| {
            Point3::new(
                pick(i & 1 != 0, bb.p_min.x, bb.p_max.x),
                pick(i & 2 != 0, bb.p_min.y, bb.p_max.y),
                pick(i & 4 != 0, bb.p_min.z, bb.p_max.z),
            )
        });
        corners.fold(Bounds3::default(), |acc, p| acc.union_p(self * p))
    }
}

/// `a * b` applies `b` first.
impl<'a, 'b, T> Mul<&'b Transform<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Transform<T>;

    fn mul(self, other: &'b Transform<T>) -> Transform<T> {
        Transform::new_full(&self.m * &other.m, &other.m_inv * &self.m_inv)
    }
}
