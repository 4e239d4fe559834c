use thiserror::Error;

use crate::{
    math::{matrix::Matrix, point::Point, vector::Vector},
    render::intersection::IntersectionValues,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("object transformation has non-finite entries")]
    NonFinite,
    #[error("object transformation is not invertible")]
    Singular,
}

/// Object-to-world transformation of a primitive, together with
/// the three matrices an intersection query needs to go back and forth.
///
/// The inverses are separate fields, one per kind of operand:
/// points, directions and normals. Normals must go through the inverse transpose,
/// otherwise they stop being perpendicular to the surface under non-uniform scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    /// Object to world (`C`).
    c: Matrix,
    /// World to object, for points (`INVC`).
    invc: Matrix,
    /// World to object, for directions (`INVCStar`).
    invc_star: Matrix,
    /// Transposed inverse, for normals (`TRANINVC`).
    traninvc: Matrix,
}

impl Default for TransformContext {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformContext {
    pub fn new(c: Matrix) -> Result<Self, TransformError> {
        if !c.is_finite() {
            log::debug!("rejecting object transformation with non-finite entries: {c:?}");
            return Err(TransformError::NonFinite);
        }
        let invc = c.inverse().ok_or_else(|| {
            log::debug!("rejecting singular object transformation: {c:?}");
            TransformError::Singular
        })?;

        Ok(Self {
            c,
            invc,
            invc_star: invc.linear_part(),
            traninvc: invc.transpose(),
        })
    }

    /// Takes an externally computed bundle as is.
    pub fn from_parts(c: Matrix, invc: Matrix, invc_star: Matrix, traninvc: Matrix) -> Self {
        Self {
            c,
            invc,
            invc_star,
            traninvc,
        }
    }

    pub fn identity() -> Self {
        let identity = Matrix::identity();
        Self::from_parts(identity, identity, identity, identity)
    }

    pub fn c(&self) -> &Matrix {
        &self.c
    }
    pub fn invc(&self) -> &Matrix {
        &self.invc
    }
    pub fn invc_star(&self) -> &Matrix {
        &self.invc_star
    }
    pub fn traninvc(&self) -> &Matrix {
        &self.traninvc
    }

    /// Runs an object-space intersection routine for a world-space ray.
    ///
    /// `local_intersect` receives the object-space origin and the *normalized*
    /// object-space direction and returns the object-space distance, `+∞` for a miss.
    /// `local_normal_at` maps the object-space hit point to the object-space normal.
    pub fn intersect_with<I, N>(
        &self,
        p0_w: Point,
        v_w: Vector,
        local_intersect: I,
        local_normal_at: N,
    ) -> IntersectionValues
    where
        I: FnOnce(Point, Vector) -> f64,
        N: FnOnce(Point) -> Vector,
    {
        let p0_o = self.invc * p0_w;
        let v_o = self.invc_star * v_w;

        // object-space distances are in units of the normalized direction,
        // this is the factor back to units of `v_w`
        let mag = v_o.magnitude();
        if mag == 0. || !mag.is_finite() {
            log::warn!("degenerate ray direction {v_w:?}, treating as a miss");
            return IntersectionValues::miss();
        }
        let v_o = v_o / mag;

        let t_o = local_intersect(p0_o, v_o);
        if !t_o.is_finite() {
            return IntersectionValues::miss();
        }

        let t_w = t_o / mag;
        let p_o = p0_o + v_o * t_o;
        // from the original ray, re-transforming `p_o` would compound the error
        let p_w = p0_w + v_w * t_w;

        let n_o = local_normal_at(p_o).normalize();
        let n_w = (self.traninvc * n_o).normalize();

        IntersectionValues::new(t_w, p_w, n_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{transform::Transform, tuple::Tuple},
    };

    #[test]
    fn identity_context() {
        let ctx = TransformContext::default();
        assert_approx_eq_low_prec!(*ctx.c(), Matrix::identity());
        assert_approx_eq_low_prec!(*ctx.invc(), Matrix::identity());
        assert_approx_eq_low_prec!(*ctx.invc_star(), Matrix::identity());
        assert_approx_eq_low_prec!(*ctx.traninvc(), Matrix::identity());
    }

    #[test]
    fn derived_matrices() {
        let c = Matrix::identity()
            .scale(2., 3., 4.)
            .rotate_z(0.3)
            .translate(1., -2., 5.)
            .transformed();
        let ctx = TransformContext::new(c).unwrap();

        assert_approx_eq_low_prec!(*ctx.c() * *ctx.invc(), Matrix::identity());
        assert_approx_eq_low_prec!(*ctx.traninvc(), ctx.invc().transpose());
        assert_approx_eq_low_prec!(*ctx.invc_star(), ctx.invc().linear_part());

        let v = Vector::new(1., 2., 3.);
        assert_approx_eq_low_prec!(*ctx.invc_star() * v, *ctx.invc() * v);
    }

    #[test]
    fn singular_transformation_is_rejected() {
        #[rustfmt::skip]
        let flat = Matrix::new([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 0., 0.,
            0., 0., 0., 1.,
        ]);
        assert_eq!(TransformContext::new(flat), Err(TransformError::Singular));
    }

    #[test]
    fn non_finite_transformation_is_rejected() {
        let c = Matrix::translation(f64::NAN, 0., 0.);
        assert_eq!(TransformContext::new(c), Err(TransformError::NonFinite));
    }

    #[test]
    fn distance_is_rescaled_to_world_direction() {
        let ctx = TransformContext::new(Matrix::scaling(2., 2., 2.)).unwrap();
        let values = ctx.intersect_with(
            Point::new(0., 0., 10.),
            Vector::new(0., 0., -4.),
            // object-space plane z = 1, the ray starts at z = 5 in object space
            |p0, v| (1. - p0.z()) / v.z(),
            |_| Vector::new(0., 0., 1.),
        );

        // 4 object units, direction is 2 object units long
        assert_approx_eq_low_prec!(values.t_w, 2.);
        assert_approx_eq_low_prec!(values.p_w, Point::new(0., 0., 2.));
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., 1.));
    }

    #[test]
    fn zero_direction_is_a_miss() {
        let values = TransformContext::identity().intersect_with(
            Point::zero(),
            Vector::zero(),
            |_, _| 1.,
            |_| Vector::new(0., 0., 1.),
        );
        assert!(!values.is_hit());
    }

    #[test]
    fn infinite_local_distance_short_circuits() {
        let values = TransformContext::identity().intersect_with(
            Point::zero(),
            Vector::new(1., 0., 0.),
            |_, _| f64::INFINITY,
            |_| unreachable!("normal is not needed for a miss"),
        );
        assert_eq!(values.t_w, f64::INFINITY);
    }
}
