pub mod transform_context;

pub mod primitive {
    pub mod sphere;
    pub mod square;
}

use primitive::{sphere::Sphere, square::Square};
use transform_context::{TransformContext, TransformError};

use crate::{
    math::{matrix::Matrix, point::Point, vector::Vector},
    render::{intersection::IntersectionValues, ray::Ray},
};

/// Anything a world-space ray can be tested against.
///
/// Implementations are pure: the same ray always produces the same result,
/// and misses are reported as `t_w = +∞` rather than through an error.
pub trait Intersectable {
    fn intersect(&self, p0_w: Point, v_w: Vector) -> IntersectionValues;

    fn intersect_ray(&self, ray: &Ray) -> IntersectionValues {
        self.intersect(*ray.origin(), *ray.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Unit sphere at point zero, unless given an explicit center and radius
    Sphere(Sphere),
    /// Square with sides of length 2 in the z = 0 plane, centered at origin
    Square(Square),
}

impl Primitive {
    pub fn sphere(matrix: Matrix) -> Result<Self, TransformError> {
        Ok(Sphere::with_transformation(matrix)?.into())
    }

    pub fn square(matrix: Matrix) -> Result<Self, TransformError> {
        Ok(Square::with_transformation(matrix)?.into())
    }

    pub fn transform(&self) -> &TransformContext {
        match self {
            Primitive::Sphere(sphere) => sphere.transform(),
            Primitive::Square(square) => square.transform(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Square(_) => "square",
        }
    }
}

impl Intersectable for Primitive {
    fn intersect(&self, p0_w: Point, v_w: Vector) -> IntersectionValues {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(p0_w, v_w),
            Primitive::Square(square) => square.intersect(p0_w, v_w),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(val: Sphere) -> Self {
        Primitive::Sphere(val)
    }
}

impl From<Square> for Primitive {
    fn from(val: Square) -> Self {
        Primitive::Square(val)
    }
}
