//! Fixture generators.
//!
//! Each generator is a parameter struct whose `execute` builds a
//! [`LabeledDataset`](crate::dataset::LabeledDataset) in one call. Triangles are
//! always tiled so that no two bounding boxes meet, which is what makes the
//! labels hold by construction.

mod cluster;
mod randomized;
mod tiled_axis;

pub use cluster::{FewTrianglesManyPoints, ManyTrianglesFewPoints};
pub use randomized::{BoundaryPolicy, Randomized};
pub use tiled_axis::{Axis, TiledAxis};

use crate::error::ConfigError;
use crate::geometry::Triangle;
use crate::math::Point2;

/// Isosceles triangle standing on the x axis with its base at `[x0, x0 + width]`.
fn standing_triangle(x0: i64, width: i64, height: i64) -> Triangle {
    Triangle::new(
        Point2::new(x0, 0),
        Point2::new(x0 + width, 0),
        Point2::new(x0 + width / 2, height),
    )
}

fn require_nonzero(parameter: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroCount { parameter })
    } else {
        Ok(())
    }
}

fn require_inside_within(inside: usize, total: usize) -> Result<(), ConfigError> {
    if inside > total {
        Err(ConfigError::InsideExceedsTotal { inside, total })
    } else {
        Ok(())
    }
}

/// `count * pitch`, failing if the product leaves the `i64` range.
fn extent(parameter: &'static str, count: usize, pitch: i64) -> Result<i64, ConfigError> {
    i64::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(pitch))
        .ok_or(ConfigError::TooLarge {
            parameter,
            value: count,
        })
}

/// Lays out `count` points along a horizontal line at `y`, `pitch` apart,
/// starting at `start`.
fn outside_row(
    parameter: &'static str,
    start: i64,
    count: usize,
    pitch: i64,
    y: i64,
) -> Result<Vec<Point2>, ConfigError> {
    extent(parameter, count, pitch)?
        .checked_add(start)
        .ok_or(ConfigError::TooLarge {
            parameter,
            value: count,
        })?;
    Ok((0_i64..)
        .take(count)
        .map(|j| Point2::new(start + j * pitch, y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_triangle_vertices() {
        let t = standing_triangle(300, 100, 100);
        assert_eq!(t.vertices(), [Point2::new(300, 0), Point2::new(400, 0), Point2::new(350, 100)]);
    }

    #[test]
    fn extent_overflow() {
        assert_eq!(extent("n", 3, 200), Ok(600));
        assert!(matches!(
            extent("n", usize::MAX, 200),
            Err(ConfigError::TooLarge { parameter: "n", .. })
        ));
    }

    #[test]
    fn outside_row_spacing() {
        let row = outside_row("n", 1000, 3, 10, 150).unwrap_or_default();
        assert_eq!(row, vec![Point2::new(1000, 150), Point2::new(1010, 150), Point2::new(1020, 150)]);
    }

    #[test]
    fn validation_helpers() {
        assert!(require_nonzero("n", 1).is_ok());
        assert_eq!(
            require_nonzero("n", 0),
            Err(ConfigError::ZeroCount { parameter: "n" })
        );
        assert!(require_inside_within(5, 5).is_ok());
        assert_eq!(
            require_inside_within(6, 5),
            Err(ConfigError::InsideExceedsTotal { inside: 6, total: 5 })
        );
    }
}
