pub mod barycentric;
pub mod predicates;

/// Integer 2D point used for every fixture coordinate.
pub type Point2 = nalgebra::Point2<i64>;

/// Real-valued 2D point used while sampling.
pub type Point2f = nalgebra::Point2<f64>;

/// Converts an integer point to its real-valued counterpart.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_real(p: &Point2) -> Point2f {
    p.map(|c| c as f64)
}
