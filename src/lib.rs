pub mod math {
    pub mod approx_eq;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod intersection;
    pub mod ray;
}

pub mod scene;

pub use math::{matrix::Matrix, point::Point, transform::Transform, tuple::Tuple, vector::Vector};
pub use render::{intersection::IntersectionValues, ray::Ray};
pub use scene::{
    object::{
        primitive::{sphere::Sphere, square::Square},
        transform_context::{TransformContext, TransformError},
        Intersectable, Primitive,
    },
    Hit, Scene, SceneBuilder,
};
