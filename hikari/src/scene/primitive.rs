use std::ops::Range;

use super::SceneError;
use crate::{
    hikari_debug, hikari_warn,
    math::{Bounds3, Normal, Point3, Vec2, Vec4},
};

/// A contiguous range of primitives in [PrimitiveData] that make up one mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mesh {
    pub prim_offset: usize,
    pub prim_count: usize,
}

impl Mesh {
    /// Returns the range of primitive indices covered by this `Mesh`.
    pub fn primitives(&self) -> Range<usize> {
        self.prim_offset..self.prim_offset + self.prim_count
    }
}

/// One indexed triangle group, e.g. a single material group of a mesh.
///
/// Vertex indices are local: the actual slot of index value `i` in a channel is that
/// channel's offset plus `i`. Absent channels have no offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Object space bounds of the referenced vertices.
    pub bounds: Bounds3<f32>,
    pub index_offset: usize,
    /// Number of indices, a multiple of 3.
    pub count: usize,
    pub vertex_offset: usize,
    pub normal_offset: Option<usize>,
    pub uv_offset: Option<usize>,
    pub tangent_offset: Option<usize>,
    pub material_id: u32,
}

impl Primitive {
    /// Returns the range of this `Primitive`'s indices in the shared index array.
    pub fn index_range(&self) -> Range<usize> {
        self.index_offset..self.index_offset + self.count
    }
}

/// Attribute arrays shared by every mesh in a scene.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveData {
    pub primitives: Vec<Primitive>,
    pub indices: Vec<u32>,
    pub vertices: Vec<Point3<f32>>,
    pub normals: Vec<Normal<f32>>,
    pub tex_coords: Vec<Vec2<f32>>,
    /// Tangents with the bitangent sign in w.
    pub tangents: Vec<Vec4<f32>>,
}

/// Loader side description of one triangle group, to be appended into [PrimitiveData].
///
/// Optional channels have to match `vertices` in length.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveSource {
    pub indices: Vec<u32>,
    pub vertices: Vec<Point3<f32>>,
    pub normals: Option<Vec<Normal<f32>>>,
    pub tex_coords: Option<Vec<Vec2<f32>>>,
    pub tangents: Option<Vec<Vec4<f32>>>,
    pub material_id: u32,
}

/// Appends `channel` into `dst` if present and returns its base offset.
fn append_channel<T: Copy>(dst: &mut Vec<T>, channel: Option<Vec<T>>) -> Option<usize> {
    channel.map(|values| {
        let offset = dst.len();
        dst.extend(values);
        offset
    })
}

/// Checks that `channel[offset + i]` exists.
fn check_slot(
    primitive: usize,
    channel: &'static str,
    offset: usize,
    index: u32,
    len: usize,
) -> Result<usize, SceneError> {
    let slot = offset + index as usize;
    if slot < len {
        Ok(slot)
    } else {
        Err(SceneError::AttributeRange {
            primitive,
            channel,
            slot,
            len,
        })
    }
}

impl PrimitiveData {
    /// Creates an empty `PrimitiveData`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a triangle group and returns the index of its [Primitive].
    ///
    /// Bounds are computed from the group's vertices.
    pub fn add_primitive(&mut self, source: PrimitiveSource) -> usize {
        let PrimitiveSource {
            indices,
            vertices,
            normals,
            tex_coords,
            tangents,
            material_id,
        } = source;

        let bounds = vertices
            .iter()
            .fold(Bounds3::default(), |bb, &v| bb.union_p(v));

        let primitive = Primitive {
            bounds,
            index_offset: self.indices.len(),
            count: indices.len(),
            vertex_offset: self.vertices.len(),
            normal_offset: append_channel(&mut self.normals, normals),
            uv_offset: append_channel(&mut self.tex_coords, tex_coords),
            tangent_offset: append_channel(&mut self.tangents, tangents),
            material_id,
        };
        self.indices.extend(indices);
        self.vertices.extend(vertices);

        hikari_debug!(
            "Primitive {}: {} triangles, material {}",
            self.primitives.len(),
            primitive.count / 3,
            material_id
        );

        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Appends triangle groups contiguously and returns the [Mesh] covering them.
    pub fn add_mesh(&mut self, sources: Vec<PrimitiveSource>) -> Mesh {
        let prim_offset = self.primitives.len();
        for source in sources {
            self.add_primitive(source);
        }
        Mesh {
            prim_offset,
            prim_count: self.primitives.len() - prim_offset,
        }
    }

    /// Checks the layout invariants the kernels rely on.
    ///
    /// Returns the first violation found.
    pub fn validate(&self, meshes: &[Mesh]) -> Result<(), SceneError> {
        let log_failure = |e: SceneError| {
            hikari_warn!("Scene validation failed: {}", e);
            e
        };

        for (i, mesh) in meshes.iter().enumerate() {
            let end = mesh.prim_offset + mesh.prim_count;
            if end > self.primitives.len() {
                return Err(log_failure(SceneError::MeshRange {
                    mesh: i,
                    end,
                    len: self.primitives.len(),
                }));
            }
        }

        for (i, prim) in self.primitives.iter().enumerate() {
            self.validate_primitive(i, prim).map_err(log_failure)?;
        }

        hikari_debug!(
            "Validated {} meshes, {} primitives",
            meshes.len(),
            self.primitives.len()
        );

        Ok(())
    }

    fn validate_primitive(&self, i: usize, prim: &Primitive) -> Result<(), SceneError> {
        if prim.count % 3 != 0 {
            return Err(SceneError::PartialTriangle {
                primitive: i,
                count: prim.count,
            });
        }

        let range = prim.index_range();
        if range.end > self.indices.len() {
            return Err(SceneError::IndexRange {
                primitive: i,
                end: range.end,
                len: self.indices.len(),
            });
        }

        for &index in &self.indices[range] {
            let slot = check_slot(i, "vertex", prim.vertex_offset, index, self.vertices.len())?;
            if !prim.bounds.inside(self.vertices[slot]) {
                return Err(SceneError::LooseBounds { primitive: i, slot });
            }
            if let Some(offset) = prim.normal_offset {
                check_slot(i, "normal", offset, index, self.normals.len())?;
            }
            if let Some(offset) = prim.uv_offset {
                check_slot(i, "uv", offset, index, self.tex_coords.len())?;
            }
            if let Some(offset) = prim.tangent_offset {
                check_slot(i, "tangent", offset, index, self.tangents.len())?;
            }
        }

        Ok(())
    }
}
