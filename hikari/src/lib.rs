//! Ray/primitive intersection kernels for unit boxes, unit spheres and indexed triangle
//! meshes, along with the math types and the flat scene soup they read from.
//!
//! Every kernel is a pure function over shared references so they can be called from
//! any number of threads at once.

mod macros;

#[doc(hidden)]
pub use log;

pub mod hash;
pub mod hit;
pub mod intersect;
pub mod math;
pub mod scene;

pub use hash::mix_hash;
pub use hit::{hit_distance, GeometryHit, Hit, MeshHit, ShapeHit, TriangleHit, MISS_DISTANCE};
pub use intersect::{
    barycentric_interpolate, hit_bounding_box, intersect_box, intersect_geometry, intersect_mesh,
    intersect_sphere, intersect_triangle, point_on_ray, RAY_EPSILON,
};
pub use scene::{
    Geometry, GeometryKind, Mesh, Primitive, PrimitiveData, PrimitiveSource, SceneError,
};
