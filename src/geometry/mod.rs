mod aabb;
mod triangle;

pub use aabb::Aabb;
pub use triangle::Triangle;

use crate::math::Point2;

/// Finds a pair of triangles whose bounding boxes intersect.
///
/// Sweeps along whichever axis the triangle field spans furthest, so tilings
/// along either axis are checked in near-linear time. Returns the pair with
/// the smaller index first.
#[must_use]
pub fn first_overlap(triangles: &[Triangle]) -> Option<(usize, usize)> {
    let boxes: Vec<Aabb> = triangles.iter().map(Triangle::aabb).collect();
    let corners: Vec<Point2> = boxes.iter().flat_map(|b| [b.min, b.max]).collect();
    let field = Aabb::from_points(&corners);
    let sweep_x = field.max.x.saturating_sub(field.min.x) >= field.max.y.saturating_sub(field.min.y);
    let lo = |b: &Aabb| if sweep_x { b.min.x } else { b.min.y };
    let hi = |b: &Aabb| if sweep_x { b.max.x } else { b.max.y };

    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by_key(|&i| lo(&boxes[i]));

    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let start = lo(&boxes[i]);
        active.retain(|&j| hi(&boxes[j]) >= start);
        if let Some(&j) = active.iter().find(|&&j| boxes[j].intersects(&boxes[i])) {
            return Some((i.min(j), i.max(j)));
        }
        active.push(i);
    }
    None
}

/// Returns `true` if no two triangles have intersecting bounding boxes.
#[must_use]
pub fn tiles_disjoint(triangles: &[Triangle]) -> bool {
    first_overlap(triangles).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(x0: i64) -> Triangle {
        Triangle::new(Point2::new(x0, 0), Point2::new(x0 + 80, 0), Point2::new(x0 + 40, 100))
    }

    fn vslot(y0: i64) -> Triangle {
        Triangle::new(Point2::new(0, y0), Point2::new(0, y0 + 80), Point2::new(100, y0 + 40))
    }

    #[test]
    fn horizontal_tiling_is_disjoint() {
        let tris: Vec<Triangle> = (0..50).map(|i| slot(i * 200)).collect();
        assert!(tiles_disjoint(&tris));
    }

    #[test]
    fn vertical_tiling_is_disjoint() {
        let tris: Vec<Triangle> = (0..50).map(|i| vslot(i * 200)).collect();
        assert!(tiles_disjoint(&tris));
    }

    #[test]
    fn overlap_is_reported_with_indices() {
        let tris = vec![slot(0), slot(400), slot(200), slot(450)];
        assert_eq!(first_overlap(&tris), Some((1, 3)));
    }

    #[test]
    fn empty_and_single_are_disjoint() {
        assert!(tiles_disjoint(&[]));
        assert!(tiles_disjoint(&[slot(0)]));
    }
}
