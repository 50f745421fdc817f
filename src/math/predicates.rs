use super::Point2;

/// Exact 2D orientation test.
///
/// Returns twice the signed area of triangle `(a, b, c)`: positive when the
/// points turn counter-clockwise, negative when clockwise, zero when collinear.
/// Evaluated in `i128`, so it cannot overflow for any `i64` input spanning
/// less than `2^62` per axis.
#[must_use]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> i128 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let acx = i128::from(c.x) - i128::from(a.x);
    let acy = i128::from(c.y) - i128::from(a.y);
    abx * acy - acx * aby
}

/// Returns `true` if `p` lies strictly inside triangle `(a, b, c)`.
///
/// All three edge cross-products must be nonzero and share a sign, so points
/// on an edge or vertex are rejected. Independent of winding.
#[must_use]
pub fn point_in_triangle_strict(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab = orient2d(p, a, b);
    let bc = orient2d(p, b, c);
    let ca = orient2d(p, c, a);
    (ab > 0 && bc > 0 && ca > 0) || (ab < 0 && bc < 0 && ca < 0)
}

/// Returns `true` if `p` lies inside or on the boundary of triangle `(a, b, c)`.
#[must_use]
pub fn point_in_triangle_closed(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab = orient2d(p, a, b);
    let bc = orient2d(p, b, c);
    let ca = orient2d(p, c, a);
    (ab >= 0 && bc >= 0 && ca >= 0) || (ab <= 0 && bc <= 0 && ca <= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orient_ccw_cw_collinear() {
        assert_eq!(orient2d(&p(0, 0), &p(10, 0), &p(0, 10)), 100);
        assert_eq!(orient2d(&p(0, 0), &p(0, 10), &p(10, 0)), -100);
        assert_eq!(orient2d(&p(0, 0), &p(5, 5), &p(10, 10)), 0);
    }

    #[test]
    fn orient_large_coordinates() {
        let big = i64::MAX / 4;
        let area = orient2d(&p(0, 0), &p(big, 0), &p(0, big));
        assert_eq!(area, i128::from(big) * i128::from(big));
    }

    #[test]
    fn strict_interior_either_winding() {
        let (a, b, c) = (p(0, 0), p(100, 0), p(50, 100));
        assert!(point_in_triangle_strict(&p(50, 50), &a, &b, &c));
        assert!(point_in_triangle_strict(&p(50, 50), &a, &c, &b));
    }

    #[test]
    fn strict_rejects_boundary() {
        let (a, b, c) = (p(0, 0), p(100, 0), p(50, 100));
        assert!(!point_in_triangle_strict(&p(50, 0), &a, &b, &c));
        assert!(!point_in_triangle_strict(&p(0, 0), &a, &b, &c));
        assert!(!point_in_triangle_strict(&p(25, 50), &a, &b, &c));
    }

    #[test]
    fn closed_accepts_boundary() {
        let (a, b, c) = (p(0, 0), p(100, 0), p(50, 100));
        assert!(point_in_triangle_closed(&p(50, 0), &a, &b, &c));
        assert!(point_in_triangle_closed(&p(25, 50), &a, &b, &c));
        assert!(point_in_triangle_closed(&p(50, 100), &a, &b, &c));
    }

    #[test]
    fn both_reject_exterior() {
        let (a, b, c) = (p(0, 0), p(100, 0), p(50, 100));
        for q in [p(-1, 0), p(50, 101), p(10, 50), p(200, 50)] {
            assert!(!point_in_triangle_strict(&q, &a, &b, &c));
            assert!(!point_in_triangle_closed(&q, &a, &b, &c));
        }
    }
}
