use std::fmt;

use crate::math::predicates::{orient2d, point_in_triangle_closed, point_in_triangle_strict};
use crate::math::Point2;

use super::Aabb;

/// A triangle given by three integer vertices.
///
/// Vertex order carries no winding meaning; every query here is
/// orientation-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex.
    pub a: Point2,
    /// Second vertex.
    pub b: Point2,
    /// Third vertex.
    pub c: Point2,
}

impl Triangle {
    /// Creates a triangle from its three vertices.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Twice the unsigned area, computed exactly.
    #[must_use]
    pub fn doubled_area(&self) -> u128 {
        orient2d(&self.a, &self.b, &self.c).unsigned_abs()
    }

    /// Returns `true` if the vertices are collinear.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.doubled_area() == 0
    }

    /// Returns `true` if `p` is strictly inside (not on an edge or vertex).
    #[must_use]
    pub fn contains_strict(&self, p: &Point2) -> bool {
        point_in_triangle_strict(p, &self.a, &self.b, &self.c)
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_triangle_closed(p, &self.a, &self.b, &self.c)
    }

    /// Axis-aligned bounding box of the three vertices.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&[self.a, self.b, self.c])
    }

    /// Vertices as an array, in declaration order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.a.x, self.a.y, self.b.x, self.b.y, self.c.x, self.c.y
        )
    }
}
