use crate::{
    hit::TriangleHit,
    math::{Normal, Point3, Ray, Vec2, Vec3, Vec4},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Triangle_Meshes.html

/// UV determinants below this are treated as degenerate mappings.
const MIN_UV_DET: f32 = 1e-8;

/// Intersects `ray` with the triangle `p0`, `p1`, `p2`, from either side.
///
/// Only hits in front of the origin count. Degenerate triangles and directions miss.
pub fn intersect_triangle(
    ray: &Ray<f32>,
    p0: Point3<f32>,
    p1: Point3<f32>,
    p2: Point3<f32>,
) -> Option<TriangleHit> {
    // pbrt's ray-triangle test performs the test in a coordinate space where the
    // ray lies on the +z axis. This way we don't get incorrect misses e.g. on rays
    // that intersect directly on an edge.

    let (p0t, p1t, p2t, sz) = {
        // Do things in relation to ray's origin
        let mut p0t = p0 - ray.o;
        let mut p1t = p1 - ray.o;
        let mut p2t = p2 - ray.o;

        // Permute direction so that Z is largest
        // This ensures there is a non-zero magnitude on Z
        let kz = ray.d.abs().max_dimension();
        let kx = if kz < 2 { kz + 1 } else { 0 };
        let ky = if kx < 2 { kx + 1 } else { 0 };
        p0t = p0t.permuted(kx, ky, kz);
        p1t = p1t.permuted(kx, ky, kz);
        p2t = p2t.permuted(kx, ky, kz);
        let d = ray.d.permuted(kx, ky, kz);

        // Shear to get +Z forward
        // Defer shearing Z since we won't need it if we don't intersect
        let sx = -d.x / d.z;
        let sy = -d.y / d.z;
        let sz = 1.0 / d.z;
        p0t.x += sx * p0t.z;
        p0t.y += sy * p0t.z;
        p1t.x += sx * p1t.z;
        p1t.y += sy * p1t.z;
        p2t.x += sx * p2t.z;
        p2t.y += sy * p2t.z;

        (p0t, p1t, p2t, sz)
    };

    // Edge coefficients
    let (e0, e1, e2) = {
        // No need for Z since we know d is on +Z
        let e0 = p1t.x * p2t.y - p1t.y * p2t.x;
        let e1 = p2t.x * p0t.y - p2t.y * p0t.x;
        let e2 = p0t.x * p1t.y - p0t.y * p1t.x;

        // Fall back to f64 if we're exactly on any edge
        if (e0 == 0.0) || (e1 == 0.0) || (e2 == 0.0) {
            let e0 = (p1t.x as f64) * (p2t.y as f64) - (p1t.y as f64) * (p2t.x as f64);
            let e1 = (p2t.x as f64) * (p0t.y as f64) - (p2t.y as f64) * (p0t.x as f64);
            let e2 = (p0t.x as f64) * (p1t.y as f64) - (p0t.y as f64) * (p1t.x as f64);
            (e0 as f32, e1 as f32, e2 as f32)
        } else {
            (e0, e1, e2)
        }
    };

    // Edge test, i.e. if we miss the triangle
    // Written as the accepting condition so NaNs miss
    let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
    if !inside {
        return None;
    }

    // Determinant test, i.e. if we hit the triangle edge-on
    let det = e0 + e1 + e2;
    if det == 0.0 {
        return None;
    }

    // Scaled hit distance
    let p0z = p0t.z * sz;
    let p1z = p1t.z * sz;
    let p2z = p2t.z * sz;
    let t = (e0 * p0z + e1 * p1z + e2 * p2z) / det;
    if !(t > 0.0) {
        return None;
    }

    let inv_det = 1.0 / det;
    Some(TriangleHit {
        t,
        u: e1 * inv_det,
        v: e2 * inv_det,
    })
}

/// Returns the unit face normal of the triangle, following its winding.
#[inline]
pub(super) fn face_normal(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Normal<f32> {
    Normal::from((p1 - p0).cross(p2 - p0).normalized())
}

/// Derives a tangent from the UV gradients of the triangle, orthogonal to `n`.
///
/// The bitangent sign ends up in w. Returns `None` for degenerate mappings.
///
/// Mathematics for 3D Game Programming and Computer Graphics, 3rd ed., Section 7.8
pub(super) fn uv_tangent(
    p: [Point3<f32>; 3],
    uv: [Vec2<f32>; 3],
    n: Normal<f32>,
) -> Option<Vec4<f32>> {
    let d1 = p[1] - p[0];
    let d2 = p[2] - p[0];
    let duv1 = uv[1] - uv[0];
    let duv2 = uv[2] - uv[0];

    let det = duv1.x * duv2.y - duv2.x * duv1.y;
    if !(det.abs() >= MIN_UV_DET) {
        return None;
    }
    let r = 1.0 / det;

    let sdir = (d1 * duv2.y - d2 * duv1.y) * r;
    let tdir = (d2 * duv1.x - d1 * duv2.x) * r;

    let n = Vec3::from(n);
    let t = (sdir - n * n.dot(sdir)).normalized();
    if t.has_nans() {
        return None;
    }
    let w = if n.cross(sdir).dot(tdir) < 0.0 {
        -1.0
    } else {
        1.0
    };

    Some(t.extend(w))
}

/// Blended per-vertex tangent, re-orthogonalized against `n`.
pub(super) fn orthogonalized_tangent(t: Vec4<f32>, n: Normal<f32>) -> Option<Vec4<f32>> {
    let n = Vec3::from(n);
    let xyz = t.xyz();
    let xyz = (xyz - n * n.dot(xyz)).normalized();
    if xyz.has_nans() {
        return None;
    }
    let w = if t.w < 0.0 { -1.0 } else { 1.0 };
    Some(xyz.extend(w))
}

/// Builds an arbitrary tangent for `n` with a positive bitangent sign.
pub(super) fn fallback_tangent(n: Normal<f32>) -> Vec4<f32> {
    let (t, _) = coordinate_system(Vec3::from(n));
    t.extend(1.0)
}

/// Returns two unit vectors that form an orthonormal basis with the unit vector `v`.
///
/// Based on Physically Based Rendering 3rd ed.
/// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#CoordinateSystemfromaVector
pub(super) fn coordinate_system(v: Vec3<f32>) -> (Vec3<f32>, Vec3<f32>) {
    let v2 = if v.x.abs() > v.y.abs() {
        Vec3::new(-v.z, 0.0, v.x) / (v.x * v.x + v.z * v.z).sqrt()
    } else {
        Vec3::new(0.0, v.z, -v.y) / (v.y * v.y + v.z * v.z).sqrt()
    };
    let v3 = v.cross(v2);
    (v2, v3)
}
