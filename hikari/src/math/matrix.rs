use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{common::FloatValueType, vector::Vec4};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// Row-major 4x4 matrix. Column vectors multiply from the right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    pub fn new(rows: [[T; 4]; 4]) -> Self {
        let m = Self { m: rows };
        debug_assert!(!m.has_nans());
        m
    }

    pub fn identity() -> Self {
        let mut id = Self::zeros();
        (0..4).for_each(|i| id.m[i][i] = T::one());
        id
    }

    /// All zeros, which is not a valid transform.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Row `i` as an array.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Column `i` as an array.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    pub fn transposed(&self) -> Self {
        Self {
            m: [self.col(0), self.col(1), self.col(2), self.col(3)],
        }
    }

    /// Multiplies the homogeneous column vector `v` with this `Matrix4x4`.
    pub fn mul_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        let row = |i: usize| {
            self.m[i][0] * v.x + self.m[i][1] * v.y + self.m[i][2] * v.z + self.m[i][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Returns the inverse of this `Matrix4x4` or `None` if it is singular.
    pub fn inverted(&self) -> Option<Self> {
        // Gauss-Jordan elimination with full pivoting, reducing one column at a time.
        // The matrix is inverted in place so the row swaps are tracked and the
        // matching column swaps are applied in reverse at the end.
        let mut mi = self.m;
        let mut indxc = [0usize; 4];
        let mut indxr = [0usize; 4];
        let mut ipiv = [0u8; 4];

        for col in 0..4 {
            let mut icol = 0;
            let mut irow = 0;
            let mut big = T::zero();

            // Largest magnitude not already part of a pivot
            for row in 0..4 {
                if ipiv[row] == 1 {
                    continue;
                }
                for (rcol, &piv) in ipiv.iter().enumerate() {
                    if piv == 0 && mi[row][rcol].abs() > big {
                        big = mi[row][rcol].abs();
                        irow = row;
                        icol = rcol;
                    }
                }
            }
            if big == T::zero() {
                return None;
            }
            ipiv[icol] += 1;

            if irow != icol {
                mi.swap(irow, icol);
            }
            indxr[col] = irow;
            indxc[col] = icol;

            let pivinv = T::one() / mi[icol][icol];
            mi[icol][icol] = T::one();
            for v in mi[icol].iter_mut() {
                *v *= pivinv;
            }

            for row in 0..4 {
                if row != icol {
                    let factor = mi[row][icol];
                    mi[row][icol] = T::zero();
                    for rcol in 0..4 {
                        let sub = factor * mi[icol][rcol];
                        mi[row][rcol] -= sub;
                    }
                }
            }
        }

        for col in (0..4).rev() {
            if indxr[col] != indxc[col] {
                for row in mi.iter_mut() {
                    row.swap(indxr[col], indxc[col]);
                }
            }
        }

        let ret = Self { m: mi };
        if ret.has_nans() {
            None
        } else {
            Some(ret)
        }
    }
}

impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        // Each row of the product is `other` applied from the left by a row of `self`
        let rows = self.m.map(|r| {
            let mut out = [T::zero(); 4];
            for (k, &a) in r.iter().enumerate() {
                for (o, &b) in out.iter_mut().zip(other.m[k].iter()) {
                    *o += a * b;
                }
            }
            out
        });
        Matrix4x4 { m: rows }
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
