use crate::{
    math::{matrix::Matrix, point::Point, tuple::Tuple, vector::Vector},
    render::intersection::{accept_root, IntersectionValues, BOUNDS_EPSILON, NO_HIT},
    scene::object::{
        transform_context::{TransformContext, TransformError},
        Intersectable,
    },
};

/// Square in the object-space z = 0 plane, spanning x and y from -1 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Square {
    transform: TransformContext,
}

impl Square {
    const HALF_EXTENT: f64 = 1.;

    pub fn new(transform: TransformContext) -> Self {
        Self { transform }
    }

    pub fn with_transformation(matrix: Matrix) -> Result<Self, TransformError> {
        Ok(Self::new(TransformContext::new(matrix)?))
    }

    pub fn transform(&self) -> &TransformContext {
        &self.transform
    }

    pub fn local_normal_at() -> Vector {
        Vector::new(0., 0., 1.)
    }

    /// Distance along `p0 + t * v` to the square, `+∞` for a miss.
    pub fn ray_square_intersection(p0: Point, v: Vector) -> f64 {
        let normal = Self::local_normal_at();

        // parallel rays divide by zero and come out non-finite
        let t = accept_root((Point::zero() - p0).dot(normal) / v.dot(normal));
        if t == NO_HIT {
            return NO_HIT;
        }

        let on_plane = p0 + v * t;
        let bound = Self::HALF_EXTENT + BOUNDS_EPSILON;
        if on_plane.x().abs() <= bound && on_plane.y().abs() <= bound {
            t
        } else {
            NO_HIT
        }
    }
}

impl Intersectable for Square {
    fn intersect(&self, p0_w: Point, v_w: Vector) -> IntersectionValues {
        self.transform.intersect_with(
            p0_w,
            v_w,
            Self::ray_square_intersection,
            |_| Self::local_normal_at(),
        )
    }
}
