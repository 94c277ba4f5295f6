//! The flat, read-only scene soup the kernels consume.
//!
//! Everything here is built once by the loader side and then shared by reference with
//! any number of intersection tests.

mod error;
mod geometry;
mod primitive;

pub use error::SceneError;
pub use geometry::{Geometry, GeometryKind};
pub use primitive::{Mesh, Primitive, PrimitiveData, PrimitiveSource};
