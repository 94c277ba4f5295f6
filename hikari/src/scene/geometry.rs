use super::SceneError;
use crate::math::{Matrix4x4, Transform};

/// The canonical shape a [Geometry] instance places into the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    /// Box spanning [-0.5, 0.5] on every object space axis.
    Cube,
    /// Sphere of radius 0.5 around the object space origin.
    Sphere,
    /// Index into the caller's mesh table.
    Mesh(usize),
}

/// A shape instance with its transforms.
///
/// Everything is derived once from the object-to-world transform so the kernels only read.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub kind: GeometryKind,
    pub object_to_world: Transform<f32>,
    pub world_to_object: Transform<f32>,
    /// Transposed inverse of `object_to_world` for mapping normals.
    pub inv_transpose: Matrix4x4<f32>,
}

impl Geometry {
    /// Creates a new `Geometry`.
    pub fn new(kind: GeometryKind, object_to_world: &Transform<f32>) -> Self {
        debug_assert!(!object_to_world.m().has_nans());
        Self {
            kind,
            object_to_world: *object_to_world,
            world_to_object: object_to_world.inverted(),
            inv_transpose: object_to_world.m_inv().transposed(),
        }
    }

    /// Creates a new `Geometry` from a raw object-to-world matrix, inverting it on the way.
    pub fn from_matrix(kind: GeometryKind, m: Matrix4x4<f32>) -> Result<Self, SceneError> {
        let object_to_world = Transform::new_m(m).ok_or(SceneError::SingularTransform)?;
        Ok(Self::new(kind, &object_to_world))
    }
}
