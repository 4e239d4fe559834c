use crate::{
    math::{matrix::Matrix, point::Point, vector::Vector},
    render::intersection::{accept_root, IntersectionValues, NO_HIT},
    scene::object::{
        transform_context::{TransformContext, TransformError},
        Intersectable,
    },
};

/// Sphere defined in object space, by default the unit sphere at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
    transform: TransformContext,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(TransformContext::identity())
    }
}

impl Sphere {
    pub fn new(transform: TransformContext) -> Self {
        Self::with_center_and_radius(Point::zero(), 1., transform)
    }

    pub fn with_transformation(matrix: Matrix) -> Result<Self, TransformError> {
        Ok(Self::new(TransformContext::new(matrix)?))
    }

    /// Negative radii are clamped to zero. A sphere without a positive radius
    /// has no surface and is never hit.
    pub fn with_center_and_radius(center: Point, radius: f64, transform: TransformContext) -> Self {
        Self {
            center,
            radius: radius.max(0.),
            transform,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn transform(&self) -> &TransformContext {
        &self.transform
    }

    /// Nearest root of `p0 + t * v` against the unit sphere at the origin.
    pub fn ray_sphere_intersection(p0: Point, v: Vector) -> f64 {
        Self::ray_sphere_intersection_at(p0, v, Point::zero(), 1.)
    }

    /// Nearest root of `p0 + t * v` against the sphere at `center` with `radius`,
    /// `+∞` when there is no root at or past the self-intersection guard.
    pub fn ray_sphere_intersection_at(p0: Point, v: Vector, center: Point, radius: f64) -> f64 {
        // a degenerate sphere would hand out a zero normal
        if radius.is_nan() || radius <= 0. {
            return NO_HIT;
        }
        let center_to_origin = p0 - center;

        let a = v.dot(v);
        let b = 2. * v.dot(center_to_origin);
        let c = center_to_origin.dot(center_to_origin) - radius * radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return NO_HIT;
        }

        let delta_sqrt = discriminant.sqrt();
        let t1 = accept_root((-b + delta_sqrt) / (2. * a));
        let t2 = accept_root((-b - delta_sqrt) / (2. * a));

        t1.min(t2)
    }

    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        (object_point - self.center).normalize()
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, p0_w: Point, v_w: Vector) -> IntersectionValues {
        self.transform.intersect_with(
            p0_w,
            v_w,
            |p0_o, v_o| Self::ray_sphere_intersection_at(p0_o, v_o, self.center, self.radius),
            |p_o| self.local_normal_at(p_o),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{transform::Transform, tuple::Tuple},
        render::{intersection::SELF_INTERSECTION_EPSILON, ray::Ray},
    };

    #[test]
    fn ray_hits_unit_sphere_head_on() {
        let sphere = Sphere::default();
        let values = sphere.intersect(Point::new(0., 0., 5.), Vector::new(0., 0., -1.));

        assert_approx_eq_low_prec!(values.t_w, 4.);
        assert_approx_eq_low_prec!(values.p_w, Point::new(0., 0., 1.));
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., 1.));
    }

    #[test]
    fn ray_misses_sphere() {
        let sphere = Sphere::default();
        let rays = [
            Ray::new(Point::new(0., 2., -5.), Vector::new(0., 0., 1.)),
            Ray::new(Point::new(5., 5., 5.), Vector::new(1., 0., 0.)),
            Ray::new(Point::new(1.0001, 0., -5.), Vector::new(0., 0., 1.)),
            // sphere behind the ray
            Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.)),
        ];

        for ray in rays {
            assert_eq!(sphere.intersect_ray(&ray).t_w, f64::INFINITY);
        }
    }

    #[test]
    fn ray_inside_sphere_hits_far_side() {
        let sphere = Sphere::default();
        let values = sphere.intersect(Point::zero(), Vector::new(0., 0., 1.));

        assert_approx_eq_low_prec!(values.t_w, 1.);
        assert_approx_eq_low_prec!(values.p_w, Point::new(0., 0., 1.));
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., 1.));
    }

    #[test]
    fn ray_starting_on_surface_ignores_that_surface() {
        let sphere = Sphere::default();
        let values = sphere.intersect(Point::new(0., 0., 1.), Vector::new(0., 0., -1.));

        assert_approx_eq_low_prec!(values.t_w, 2.);
        assert_approx_eq_low_prec!(values.p_w, Point::new(0., 0., -1.));

        let leaving = sphere.intersect(Point::new(0., 0., 1.), Vector::new(0., 0., 1.));
        assert!(!leaving.is_hit());
    }

    #[test]
    fn near_root_just_below_epsilon_is_rejected() {
        let sphere = Sphere::default();
        let d = SELF_INTERSECTION_EPSILON * 0.5;
        let values = sphere.intersect(Point::new(0., 0., 1. + d), Vector::new(0., 0., -1.));

        // the near surface is skipped, the far one is still there
        assert_approx_eq_low_prec!(values.t_w, 2. + d);
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., -1.));
    }

    #[test]
    fn near_root_just_above_epsilon_is_accepted() {
        let sphere = Sphere::default();
        let d = SELF_INTERSECTION_EPSILON * 2.;
        let values = sphere.intersect(Point::new(0., 0., 1. + d), Vector::new(0., 0., -1.));

        assert!((values.t_w - d).abs() < SELF_INTERSECTION_EPSILON * 1.0e-3);
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., 1.));
    }

    #[test]
    fn tangent_ray_has_single_root() {
        let t = Sphere::ray_sphere_intersection(Point::new(1., 0., 5.), Vector::new(0., 0., -1.));
        assert_approx_eq_low_prec!(t, 5.);

        let values = Sphere::default().intersect(Point::new(1., 0., 5.), Vector::new(0., 0., -1.));
        assert_approx_eq_low_prec!(values.t_w, 5.);
        assert_approx_eq_low_prec!(values.p_w, Point::new(1., 0., 0.));
        assert_approx_eq_low_prec!(values.n_w, Vector::new(1., 0., 0.));
    }

    #[test]
    fn distance_to_transformed_sphere_scales_with_direction_length() {
        let center = Point::new(1., 2., 3.);
        let radius = 2.;
        let c = Matrix::scaling(radius, radius, radius)
            .translate(center.x(), center.y(), center.z())
            .transformed();
        let sphere = Sphere::with_transformation(c).unwrap();

        let origin = Point::new(4., 6., 3.);
        let examples = [
            Vector::new(-3., -4., 0.),
            Vector::new(-0.3, -0.4, 0.),
            Vector::new(-30., -40., 0.),
        ];

        for direction in examples {
            let values = sphere.intersect(origin, direction);
            let distance = (center - origin).magnitude() - radius;

            assert_approx_eq_low_prec!(values.t_w * direction.magnitude(), distance);
            assert_approx_eq_low_prec!(values.p_w, Point::new(2.2, 3.6, 3.));
            assert_approx_eq_low_prec!(values.n_w, Vector::new(0.6, 0.8, 0.));
        }
    }

    #[test]
    fn normal_is_unit_and_parallel_to_radius() {
        let sphere = Sphere::with_transformation(Matrix::translation(0., 1., 0.)).unwrap();
        let origin = Point::new(3., -2., 4.);
        let targets = [
            Point::new(0., 1., 0.),
            Point::new(0.3, 1.2, -0.1),
            Point::new(-0.5, 0.5, 0.2),
        ];

        for target in targets {
            let values = sphere.intersect(origin, target - origin);
            assert!(values.is_hit());

            let radial = (values.p_w - Point::new(0., 1., 0.)).normalize();
            assert_approx_eq_low_prec!(values.n_w.magnitude(), 1.);
            assert_approx_eq_low_prec!(values.n_w, radial);
        }
    }

    #[test]
    fn normal_on_non_uniformly_scaled_sphere() {
        let sphere = Sphere::with_transformation(Matrix::scaling(2., 1., 1.)).unwrap();
        let x = 2_f64.sqrt();
        let values = sphere.intersect(Point::new(x, 5., 0.), Vector::new(0., -1., 0.));

        assert_approx_eq_low_prec!(values.t_w, 5. - FRAC_1_SQRT_2);
        assert_approx_eq_low_prec!(values.p_w, Point::new(x, FRAC_1_SQRT_2, 0.));
        // (1, 2, 0) / sqrt(5), not the naively transformed (2, 1, 0) / sqrt(5)
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0.44721, 0.89443, 0.));
    }

    #[test]
    fn normal_on_rotated_and_scaled_sphere() {
        let c = Matrix::scaling(1., 0.5, 1.) * Matrix::rotation_z(std::f64::consts::PI / 5.);
        let sphere = Sphere::with_transformation(c).unwrap();
        let origin = Point::new(0., 5., -5.);
        let direction = Point::zero() - origin;
        let values = sphere.intersect(origin, direction);

        assert!(values.is_hit());
        assert_approx_eq_low_prec!(values.n_w.magnitude(), 1.);
        // entering the surface, so the outward normal faces the ray
        assert!(values.n_w.dot(direction) < 0.);
    }

    #[test]
    fn explicit_center_and_radius() {
        let sphere = Sphere::with_center_and_radius(
            Point::new(0., 0., -3.),
            2.,
            TransformContext::identity(),
        );
        let values = sphere.intersect(Point::new(0., 0., 5.), Vector::new(0., 0., -2.));

        assert_approx_eq_low_prec!(values.t_w, 3.);
        assert_approx_eq_low_prec!(values.n_w, Vector::new(0., 0., 1.));
    }

    #[test]
    fn sphere_without_positive_radius_is_never_hit() {
        for radius in [0., -2., f64::NAN] {
            let sphere =
                Sphere::with_center_and_radius(Point::zero(), radius, TransformContext::identity());
            let values = sphere.intersect(Point::new(0., 0., 5.), Vector::new(0., 0., -1.));

            assert!(!values.is_hit());
            assert_eq!(values.t_w, f64::INFINITY);
        }

        let t = Sphere::ray_sphere_intersection_at(
            Point::new(-5., 0., 0.),
            Vector::new(1., 0., 0.),
            Point::zero(),
            0.,
        );
        assert_eq!(t, f64::INFINITY);
    }

    #[test]
    fn repeated_queries_are_bit_identical() {
        let c = Matrix::scaling(1., 3., 0.5)
            .rotate_y(0.7)
            .translate(0.2, -1., 4.)
            .transformed();
        let sphere = Sphere::with_transformation(c).unwrap();
        let origin = Point::new(-3., 0.5, 9.);
        let direction = Point::new(0.2, -1., 4.) - origin;

        let first = sphere.intersect(origin, direction);
        let second = sphere.intersect(origin, direction);

        assert!(first.is_hit());
        assert_eq!(first.t_w.to_bits(), second.t_w.to_bits());
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}
