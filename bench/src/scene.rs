use std::f32::consts::{PI, TAU};

use hikari::{
    hikari_info, hit_distance, intersect_geometry,
    math::{normal, point3, transforms, vec2, vec3, vec4, Ray},
    Geometry, GeometryHit, GeometryKind, Mesh, PrimitiveData, PrimitiveSource,
};

use crate::Result;

/// A box, a stretched sphere and a mesh of a tessellated sphere resting on a grid.
pub struct DemoScene {
    pub geometry: Vec<Geometry>,
    pub meshes: Vec<Mesh>,
    pub data: PrimitiveData,
}

impl DemoScene {
    pub fn new(resolution: u32) -> Result<Self> {
        let resolution = resolution.max(2);

        let mut data = PrimitiveData::new();
        let meshes = vec![data.add_mesh(vec![uv_sphere(resolution, 2), grid(resolution, 3)])];
        data.validate(&meshes)?;

        let geometry = vec![
            Geometry::new(
                GeometryKind::Cube,
                &(&transforms::translation(vec3(-1.5, 0.0, 0.0))
                    * &transforms::rotation_euler(vec3(0.3, 0.5, 0.0))),
            ),
            Geometry::new(
                GeometryKind::Sphere,
                &(&transforms::translation(vec3(1.5, 0.0, 0.0))
                    * &transforms::scale(1.0, 1.5, 1.0)),
            ),
            Geometry::new(GeometryKind::Mesh(0), &transforms::scale(2.0, 2.0, 2.0)),
        ];

        hikari_info!(
            "Demo scene: {} geometries, {} primitives, {} triangles",
            geometry.len(),
            data.primitives.len(),
            data.indices.len() / 3
        );

        Ok(Self {
            geometry,
            meshes,
            data,
        })
    }

    /// Closest hit over every geometry, ties going to the first one.
    pub fn closest_hit(&self, ray: Ray<f32>) -> Option<GeometryHit> {
        self.geometry
            .iter()
            .filter_map(|g| intersect_geometry(g, &self.meshes, &self.data, ray))
            .fold(None, |closest, hit| match closest {
                Some(c) if hit_distance(Some(&c)) <= hit_distance(Some(&hit)) => Some(c),
                _ => Some(hit),
            })
    }
}

/// Sphere of radius 0.5 with normals and uvs. Tangents are left for the kernel to derive.
fn uv_sphere(rings: u32, material_id: u32) -> PrimitiveSource {
    let segments = rings * 2;

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut tex_coords = Vec::new();
    for r in 0..=rings {
        let theta = PI * (r as f32) / (rings as f32);
        for s in 0..=segments {
            let phi = TAU * (s as f32) / (segments as f32);
            let n = normal(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            vertices.push(point3(n.x, n.y, n.z) * 0.5);
            normals.push(n);
            tex_coords.push(vec2(
                (s as f32) / (segments as f32),
                (r as f32) / (rings as f32),
            ));
        }
    }

    // Pole rows collapse into degenerate triangles, which the kernel has to skip
    let mut indices = Vec::new();
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let i0 = r * stride + s;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    PrimitiveSource {
        indices,
        vertices,
        normals: Some(normals),
        tex_coords: Some(tex_coords),
        tangents: None,
        material_id,
    }
}

/// Unit grid on the y = -0.5 plane with stored tangents.
fn grid(cells: u32, material_id: u32) -> PrimitiveSource {
    let side = cells + 1;

    let mut vertices = Vec::new();
    let mut tex_coords = Vec::new();
    for z in 0..side {
        for x in 0..side {
            let u = (x as f32) / (cells as f32);
            let v = (z as f32) / (cells as f32);
            vertices.push(point3(u * 2.0 - 1.0, -0.5, v * 2.0 - 1.0));
            tex_coords.push(vec2(u, v));
        }
    }

    let mut indices = Vec::new();
    for z in 0..cells {
        for x in 0..cells {
            let i0 = z * side + x;
            let i1 = i0 + 1;
            let i2 = i0 + side;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    let vertex_count = vertices.len();
    PrimitiveSource {
        indices,
        vertices,
        normals: Some(vec![normal(0.0, 1.0, 0.0); vertex_count]),
        tex_coords: Some(tex_coords),
        tangents: Some(vec![vec4(1.0, 0.0, 0.0, 1.0); vertex_count]),
        material_id,
    }
}
