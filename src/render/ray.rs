use crate::math::{point::Point, vector::Vector};

/// Ray `origin + t * direction`. The direction is not required to be normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
