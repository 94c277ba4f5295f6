use super::{
    barycentric_interpolate, hit_bounding_box, intersect_triangle, object_ray,
    triangle::{face_normal, fallback_tangent, orthogonalized_tangent, uv_tangent},
    world_hit,
};
use crate::{
    hit::{MeshHit, TriangleHit},
    math::{transform_vector, Ray, Vec2},
    scene::{Geometry, Mesh, Primitive, PrimitiveData},
};

/// Intersects `ray` with the triangles of `mesh` and returns the closest hit.
///
/// Primitives whose bounds the object space ray misses are skipped without looking at their
/// triangles. Exactly equal distances keep the hit found first.
pub fn intersect_mesh(
    geom: &Geometry,
    mesh: &Mesh,
    data: &PrimitiveData,
    ray: Ray<f32>,
) -> Option<MeshHit> {
    let q = object_ray(geom, &ray);

    let mut closest: Option<(TriangleHit, &Primitive, [usize; 3])> = None;
    for prim in &data.primitives[mesh.primitives()] {
        if !hit_bounding_box(&prim.bounds, &q) {
            continue;
        }

        for tri in data.indices[prim.index_range()].chunks_exact(3) {
            let tri = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let [p0, p1, p2] = tri.map(|i| data.vertices[prim.vertex_offset + i]);
            if let Some(hit) = intersect_triangle(&q, p0, p1, p2) {
                if closest.map_or(true, |(best, _, _)| hit.t < best.t) {
                    closest = Some((hit, prim, tri));
                }
            }
        }
    }

    let (hit, prim, tri) = closest?;
    let TriangleHit { t, u, v } = hit;

    // Attributes are only blended for the winner
    let p = tri.map(|i| data.vertices[prim.vertex_offset + i]);
    let n = prim
        .normal_offset
        .map(|offset| {
            let [n0, n1, n2] = tri.map(|i| data.normals[offset + i]);
            barycentric_interpolate(n0, n1, n2, u, v).normalized()
        })
        .filter(|n| !n.has_nans())
        .unwrap_or_else(|| face_normal(p[0], p[1], p[2]));

    let uvs = prim
        .uv_offset
        .map(|offset| tri.map(|i| data.tex_coords[offset + i]));
    let uv = uvs.map_or(Vec2::zeros(), |[uv0, uv1, uv2]| {
        barycentric_interpolate(uv0, uv1, uv2, u, v)
    });

    let tangent = match prim.tangent_offset {
        Some(offset) => {
            let [t0, t1, t2] = tri.map(|i| data.tangents[offset + i]);
            orthogonalized_tangent(barycentric_interpolate(t0, t1, t2, u, v), n)
        }
        None => uvs.and_then(|uvs| uv_tangent(p, uvs, n)),
    }
    .unwrap_or_else(|| fallback_tangent(n));

    let (p, t, n) = world_hit(geom, &ray, &q, t, n);
    let tangent = transform_vector(&geom.inv_transpose, tangent.xyz())
        .normalized()
        .extend(tangent.w);

    Some(MeshHit {
        t,
        p,
        n,
        uv,
        tangent,
        material_id: prim.material_id,
    })
}
