/// Homogeneous 4-component tuple.
/// Implementors fix the `w` component: points have `w = 1`, vectors `w = 0`.
pub trait Tuple: Copy {
    fn new(x: f64, y: f64, z: f64) -> Self;

    /// Builds the tuple from all four homogeneous components,
    /// resolving `w` the way the implementor represents it.
    fn from_homogeneous(x: f64, y: f64, z: f64, w: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}
