use crate::math::Point2;

/// An axis-aligned bounding box with inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Smallest box enclosing `points`.
    ///
    /// An empty slice yields an inverted box that intersects nothing.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut min = Point2::new(i64::MAX, i64::MAX);
        let mut max = Point2::new(i64::MIN, i64::MIN);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Returns `true` if the boxes share at least one point, edges included.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns `true` if `p` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(x0: i64, y0: i64, x1: i64, y1: i64) -> Aabb {
        Aabb {
            min: Point2::new(x0, y0),
            max: Point2::new(x1, y1),
        }
    }

    #[test]
    fn touching_boxes_intersect() {
        assert!(bb(0, 0, 10, 10).intersects(&bb(10, 0, 20, 10)));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        assert!(!bb(0, 0, 80, 100).intersects(&bb(200, 0, 280, 100)));
        assert!(!bb(0, 0, 100, 80).intersects(&bb(0, 200, 100, 280)));
    }

    #[test]
    fn empty_box_intersects_nothing() {
        let empty = Aabb::from_points(&[]);
        assert!(!empty.intersects(&bb(-100, -100, 100, 100)));
        assert!(!empty.contains(&Point2::new(0, 0)));
    }

    #[test]
    fn contains_boundary() {
        let b = bb(0, 0, 10, 10);
        assert!(b.contains(&Point2::new(10, 5)));
        assert!(!b.contains(&Point2::new(11, 5)));
    }
}
