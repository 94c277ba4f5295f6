use crate::math::{Normal, Point3, Vec2, Vec4};

/// Distance reported for a miss by [hit_distance].
pub const MISS_DISTANCE: f32 = -1.0;

/// Common access to the distance of any kind of hit.
pub trait Hit {
    /// Hit distance
    fn t(&self) -> f32;
}

/// Flattens an optional hit into a distance, [MISS_DISTANCE] for misses.
pub fn hit_distance<H>(hit: Option<&H>) -> f32
where
    H: Hit,
{
    hit.map_or(MISS_DISTANCE, |h| h.t())
}

/// Info of an analytic shape hit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit {
    /// World space distance from the ray origin to `p`
    pub t: f32,
    /// World position
    pub p: Point3<f32>,
    /// World space unit normal, facing the ray origin's side
    pub n: Normal<f32>,
    /// `false` if the ray started inside the shape
    pub outside: bool,
}

/// Raw result of a ray-triangle test
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter
    pub t: f32,
    /// Barycentric weight of the second vertex
    pub u: f32,
    /// Barycentric weight of the third vertex
    pub v: f32,
}

/// Info of a mesh hit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshHit {
    /// World space distance from the ray origin to `p`
    pub t: f32,
    /// World position
    pub p: Point3<f32>,
    /// World space unit shading normal
    pub n: Normal<f32>,
    pub uv: Vec2<f32>,
    /// World space unit tangent with the bitangent sign in w
    pub tangent: Vec4<f32>,
    pub material_id: u32,
}

/// A hit on any kind of geometry
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryHit {
    Shape(ShapeHit),
    Mesh(MeshHit),
}

impl Hit for ShapeHit {
    fn t(&self) -> f32 {
        self.t
    }
}

impl Hit for TriangleHit {
    fn t(&self) -> f32 {
        self.t
    }
}

impl Hit for MeshHit {
    fn t(&self) -> f32 {
        self.t
    }
}

impl Hit for GeometryHit {
    fn t(&self) -> f32 {
        match self {
            GeometryHit::Shape(hit) => hit.t,
            GeometryHit::Mesh(hit) => hit.t,
        }
    }
}
