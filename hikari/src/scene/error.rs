use thiserror::Error;

/// Violations of the scene soup layout, caught once at load time.
///
/// The kernels assume none of these and read the soup without bounds validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Object-to-world matrix has no inverse.
    #[error("Geometry transform is singular")]
    SingularTransform,

    /// Index count that doesn't describe whole triangles.
    #[error("Primitive {primitive}: index count {count} is not a multiple of 3")]
    PartialTriangle { primitive: usize, count: usize },

    /// Index range past the end of the shared index array.
    #[error("Primitive {primitive}: index range ends at {end} but there are {len} indices")]
    IndexRange {
        primitive: usize,
        end: usize,
        len: usize,
    },

    /// Attribute lookup past the end of its shared array.
    #[error("Primitive {primitive}: {channel} slot {slot} is out of bounds for {len} entries")]
    AttributeRange {
        primitive: usize,
        channel: &'static str,
        slot: usize,
        len: usize,
    },

    /// Primitive range past the end of the primitive table.
    #[error("Mesh {mesh}: primitive range ends at {end} but there are {len} primitives")]
    MeshRange { mesh: usize, end: usize, len: usize },

    /// Bounds that don't enclose every vertex of the primitive.
    #[error("Primitive {primitive}: bounds don't enclose vertex {slot}")]
    LooseBounds { primitive: usize, slot: usize },
}
