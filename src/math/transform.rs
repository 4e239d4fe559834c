use super::{matrix::Matrix, tuple::Axis};

/// A single affine step, composable into an object-to-world matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    Scaling(f64, f64, f64),
    Translation(f64, f64, f64),
    Rotation(Axis, f64),
    Shearing(f64, f64, f64, f64, f64, f64),
    Identity,
}

impl From<Transformation> for Matrix {
    fn from(val: Transformation) -> Self {
        Matrix::identity().apply(val).transformed()
    }
}

/// Folds the steps in order: the first one is applied to the object first.
impl From<&[Transformation]> for Matrix {
    fn from(val: &[Transformation]) -> Self {
        let mut matrix = Matrix::identity();
        for step in val {
            matrix.apply(*step);
        }
        matrix
    }
}

impl From<Vec<Transformation>> for Matrix {
    fn from(val: Vec<Transformation>) -> Self {
        Matrix::from(&val[..])
    }
}

pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix);

    fn transform_new(&self, matrix: &Matrix) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    fn transformed(self) -> Self {
        self
    }

    fn transform_chain(&mut self, transformation: &Matrix) -> &mut Self {
        self.transform(transformation);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_z(radians))
    }

    fn apply(&mut self, step: Transformation) -> &mut Self {
        match step {
            Transformation::Scaling(x, y, z) => self.scale(x, y, z),
            Transformation::Translation(x, y, z) => self.translate(x, y, z),
            Transformation::Rotation(Axis::X, radians) => self.rotate_x(radians),
            Transformation::Rotation(Axis::Y, radians) => self.rotate_y(radians),
            Transformation::Rotation(Axis::Z, radians) => self.rotate_z(radians),
            Transformation::Shearing(xpy, xpz, ypx, ypz, zpx, zpy) => {
                self.transform_chain(&Matrix::shearing(xpy, xpz, ypx, ypz, zpx, zpy))
            }
            Transformation::Identity => self,
        }
    }
}
