pub const EPSILON: f64 = 1.0e-5;
/// Looser tolerance, used where expected values are written down with limited precision.
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Self) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        // infinities are equal only to themselves
        *self == *other || (self - other).abs() < epsilon
    }
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !$crate::math::approx_eq::ApproxEq::approx_eq_low_prec(left_val, right_val) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}
