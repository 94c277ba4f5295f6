use super::{common::FloatValueType, matrix::Matrix4x4, vector::Vec3, Transform};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Transformations.html

/// Embeds the 3x3 `linear` part and the `offset` column into an affine matrix.
fn affine<T>(linear: [[T; 3]; 3], offset: Vec3<T>) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    for (row, values) in linear.iter().enumerate() {
        m.m[row][..3].copy_from_slice(values);
        m.m[row][3] = offset[row];
    }
    m
}

/// Creates a new `Transform` that is a translation by `delta`.
pub fn translation<T>(delta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let (zero, one) = (T::zero(), T::one());
    let id = [[one, zero, zero], [zero, one, zero], [zero, zero, one]];
    Transform::new_full(affine(id, delta), affine(id, -delta))
}

/// Creates a new `Transform` that is a scaling by `x`, `y` and `z`.
pub fn scale<T>(x: T, y: T, z: T) -> Transform<T>
where
    T: FloatValueType,
{
    let diagonal = |x: T, y: T, z: T| {
        let zero = T::zero();
        affine(
            [[x, zero, zero], [zero, y, zero], [zero, zero, z]],
            Vec3::zeros(),
        )
    };
    let one = T::one();
    Transform::new_full(diagonal(x, y, z), diagonal(one / x, one / y, one / z))
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the x-axis.
pub fn rotation_x<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    rotation(theta, Vec3::new(T::one(), T::zero(), T::zero()))
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the y-axis.
pub fn rotation_y<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    rotation(theta, Vec3::new(T::zero(), T::one(), T::zero()))
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the z-axis.
pub fn rotation_z<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    rotation(theta, Vec3::new(T::zero(), T::zero(), T::one()))
}

/// Creates a new `Transform` that is a rotation of `theta` radians around `axis`.
///
/// Rodrigues' formula, `axis` doesn't need to be of unit length.
pub fn rotation<T>(theta: T, axis: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let a = axis.normalized();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let k = T::one() - cos_theta;

    // Diagonal and the symmetric/antisymmetric halves of the off-diagonal terms
    let d = |c: T| c * c * k + cos_theta;
    let xy = a.x * a.y * k;
    let xz = a.x * a.z * k;
    let yz = a.y * a.z * k;
    let sx = a.x * sin_theta;
    let sy = a.y * sin_theta;
    let sz = a.z * sin_theta;

    let m = affine(
        [
            [d(a.x), xy - sz, xz + sy],
            [xy + sz, d(a.y), yz - sx],
            [xz - sy, yz + sx, d(a.z)],
        ],
        Vec3::zeros(),
    );

    // Orthonormal so the inverse is the transpose
    Transform::new_full(m, m.transposed())
}

/// Creates a new `Transform` that rotates by the euler angles `theta`, z first.
pub fn rotation_euler<T>(theta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    &rotation_x(theta.x) * &(&rotation_y(theta.y) * &rotation_z(theta.z))
}
