use rand::Rng;

use super::{to_real, Point2, Point2f};

/// Folds a sample from the unit square onto the lower-left unit triangle.
///
/// When `r1 + r2 > 1` both weights are mirrored through `(0.5, 0.5)`, which maps
/// the upper half of the square onto the lower half without changing density.
#[must_use]
pub fn reflect_weights(r1: f64, r2: f64) -> (f64, f64) {
    if r1 + r2 > 1.0 {
        (1.0 - r1, 1.0 - r2)
    } else {
        (r1, r2)
    }
}

/// Evaluates `a + r1 (b - a) + r2 (c - a)`.
#[must_use]
pub fn edge_combination(a: &Point2, b: &Point2, c: &Point2, r1: f64, r2: f64) -> Point2f {
    let a = to_real(a);
    let ab = to_real(b) - a;
    let ac = to_real(c) - a;
    a + ab * r1 + ac * r2
}

/// Truncates both coordinates toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(p: &Point2f) -> Point2 {
    Point2::new(p.x.trunc() as i64, p.y.trunc() as i64)
}

/// Maps two unit-square weights to an integer point of triangle `(a, b, c)`.
#[must_use]
pub fn point_from_weights(a: &Point2, b: &Point2, c: &Point2, r1: f64, r2: f64) -> Point2 {
    let (r1, r2) = reflect_weights(r1, r2);
    truncate(&edge_combination(a, b, c, r1, r2))
}

/// Draws a uniformly distributed point of the closed triangle `(a, b, c)`,
/// truncated to integer coordinates.
///
/// Consumes exactly two `f64` draws from `rng`.
pub fn sample_in_triangle<R: Rng + ?Sized>(rng: &mut R, a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    let r1: f64 = rng.random();
    let r2: f64 = rng.random();
    point_from_weights(a, b, c, r1, r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::predicates::{point_in_triangle_closed, point_in_triangle_strict};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reflect_only_above_diagonal() {
        assert_eq!(reflect_weights(0.2, 0.3), (0.2, 0.3));
        assert_eq!(reflect_weights(0.5, 0.5), (0.5, 0.5));
        let (r1, r2) = reflect_weights(0.6, 0.7);
        assert_relative_eq!(r1, 0.4, epsilon = 1e-12);
        assert_relative_eq!(r2, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn reflected_example_lands_inside() {
        let (a, b, c) = (Point2::new(0, 0), Point2::new(100, 0), Point2::new(50, 100));
        let (r1, r2) = reflect_weights(0.6, 0.7);
        let real = edge_combination(&a, &b, &c, r1, r2);
        assert_relative_eq!(real.x, 55.0, epsilon = 1e-9);
        assert_relative_eq!(real.y, 30.0, epsilon = 1e-9);

        let q = point_from_weights(&a, &b, &c, 0.6, 0.7);
        assert_eq!(q, Point2::new(55, 30));
        assert!(point_in_triangle_strict(&q, &a, &b, &c));
    }

    #[test]
    fn unreflected_sum_would_escape() {
        let (a, b, c) = (Point2::new(0, 0), Point2::new(100, 0), Point2::new(50, 100));
        let raw = truncate(&edge_combination(&a, &b, &c, 0.6, 0.7));
        assert!(!point_in_triangle_closed(&raw, &a, &b, &c));
    }

    #[test]
    fn truncation_toward_zero() {
        assert_eq!(truncate(&Point2f::new(3.9, -3.9)), Point2::new(3, -3));
    }

    #[test]
    fn truncation_can_cross_a_steep_edge() {
        let (a, b, c) = (Point2::new(0, 0), Point2::new(100, 0), Point2::new(20, 100));
        let real = edge_combination(&a, &b, &c, 0.000_01, 0.5499);
        let q = truncate(&real);
        assert_eq!(q, Point2::new(10, 54));
        assert!(!point_in_triangle_closed(&q, &a, &b, &c));
    }

    #[test]
    fn sampling_is_seed_deterministic() {
        let (a, b, c) = (Point2::new(0, 0), Point2::new(100, 0), Point2::new(40, 100));
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(
                sample_in_triangle(&mut first, &a, &b, &c),
                sample_in_triangle(&mut second, &a, &b, &c)
            );
        }
    }
}
