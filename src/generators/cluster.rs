use tracing::debug;

use super::{extent, outside_row, require_inside_within, require_nonzero, standing_triangle};
use crate::dataset::{Dataset, Label, LabeledDataset};
use crate::error::{ConfigError, Result};
use crate::geometry::Triangle;
use crate::math::Point2;

const TRI_WIDTH: i64 = 100;
const TRI_HEIGHT: i64 = 100;
/// Height of the row of outside points, above every triangle.
const OUTSIDE_Y: i64 = 150;
/// Spacing between consecutive outside points.
const OUTSIDE_PITCH: i64 = 10;
/// Clearance between the last triangle's right edge and the first outside point.
const OUTSIDE_MARGIN: i64 = 100;

/// First x of the outside row: `floor`, or further right when the field of
/// `field / stride` triangles reaches past it.
fn outside_start(floor: i64, field: i64, stride: i64) -> i64 {
    let right_edge = field - stride + TRI_WIDTH;
    floor.max(right_edge + OUTSIDE_MARGIN)
}

/// A handful of triangles receiving a large mass of interior points.
///
/// Inside points are split as evenly as possible, the first
/// `inside % triangles` triangles taking one extra. Every inside point of a
/// triangle sits at the same interior coordinate. Outside points form a row
/// past the last triangle and above the triangle field.
#[derive(Debug, Clone, Copy)]
pub struct FewTrianglesManyPoints {
    triangles: usize,
    points: usize,
    inside: usize,
}

impl Default for FewTrianglesManyPoints {
    fn default() -> Self {
        Self {
            triangles: 3,
            points: 5000,
            inside: 4000,
        }
    }
}

impl FewTrianglesManyPoints {
    /// Distance between consecutive triangle origins.
    pub const STRIDE: i64 = 300;
    /// Minimum x of the outside point row.
    pub const NEAR_OFFSET: i64 = 1000;

    /// Creates a new generator for `points` points, `inside` of which fall in
    /// one of `triangles` triangles.
    #[must_use]
    pub fn new(triangles: usize, points: usize, inside: usize) -> Self {
        Self {
            triangles,
            points,
            inside,
        }
    }

    /// Executes the generator.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `triangles` or `points` is zero, if `inside`
    /// exceeds `points`, or if the layout leaves the `i64` range.
    pub fn execute(&self) -> Result<LabeledDataset> {
        require_nonzero("triangles", self.triangles)?;
        require_nonzero("points", self.points)?;
        require_inside_within(self.inside, self.points)?;
        let field = extent("triangles", self.triangles, Self::STRIDE)?;

        let triangles: Vec<Triangle> = (0_i64..)
            .take(self.triangles)
            .map(|slot| standing_triangle(slot * Self::STRIDE, TRI_WIDTH, TRI_HEIGHT))
            .collect();

        let share = self.inside / self.triangles;
        let remainder = self.inside % self.triangles;

        let mut points = Vec::with_capacity(self.points);
        let mut labels = Vec::with_capacity(self.points);
        for (t, triangle) in triangles.iter().enumerate() {
            let count = share + usize::from(t < remainder);
            let interior = Point2::new(triangle.a.x + TRI_WIDTH / 2, TRI_HEIGHT / 2);
            points.extend(std::iter::repeat_n(interior, count));
            labels.extend(std::iter::repeat_n(Label::Inside(t), count));
        }

        let outside = self.points - self.inside;
        points.extend(outside_row(
            "points",
            outside_start(Self::NEAR_OFFSET, field, Self::STRIDE),
            outside,
            OUTSIDE_PITCH,
            OUTSIDE_Y,
        )?);
        labels.extend(std::iter::repeat_n(Label::Outside, outside));

        debug!(
            triangles = self.triangles,
            points = self.points,
            inside = self.inside,
            "generated few-triangles cluster"
        );
        Ok(LabeledDataset::new(Dataset::new(points, triangles), labels)?)
    }
}

/// A large triangle field hit by only a few points.
///
/// Inside point `i` lands in triangle `i * stride`, so only a strided subset of
/// the field is ever hit. Outside points sit far beyond the field.
#[derive(Debug, Clone, Copy)]
pub struct ManyTrianglesFewPoints {
    triangles: usize,
    points: usize,
    inside: usize,
    stride: usize,
}

impl Default for ManyTrianglesFewPoints {
    fn default() -> Self {
        Self {
            triangles: 5000,
            points: 50,
            inside: 20,
            stride: 10,
        }
    }
}

impl ManyTrianglesFewPoints {
    /// Distance between consecutive triangle origins.
    pub const STRIDE: i64 = 200;
    /// Minimum x of the outside point row.
    pub const FAR_OFFSET: i64 = 1_000_000;

    /// Creates a new generator with a triangle stride of 10.
    #[must_use]
    pub fn new(triangles: usize, points: usize, inside: usize) -> Self {
        Self {
            triangles,
            points,
            inside,
            stride: 10,
        }
    }

    /// Sets how many triangles apart consecutive inside points land.
    #[must_use]
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Executes the generator.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any count or the stride is zero, if `inside`
    /// exceeds `points`, or if the last strided index is not a valid triangle.
    pub fn execute(&self) -> Result<LabeledDataset> {
        require_nonzero("triangles", self.triangles)?;
        require_nonzero("points", self.points)?;
        require_nonzero("stride", self.stride)?;
        require_inside_within(self.inside, self.points)?;
        if let Some(last) = self.inside.checked_sub(1) {
            let index = last.checked_mul(self.stride).unwrap_or(usize::MAX);
            if index >= self.triangles {
                return Err(ConfigError::StrideOutOfRange {
                    index,
                    triangles: self.triangles,
                }
                .into());
            }
        }
        let field = extent("triangles", self.triangles, Self::STRIDE)?;

        let triangles: Vec<Triangle> = (0_i64..)
            .take(self.triangles)
            .map(|slot| standing_triangle(slot * Self::STRIDE, TRI_WIDTH, TRI_HEIGHT))
            .collect();

        let mut points = Vec::with_capacity(self.points);
        let mut labels = Vec::with_capacity(self.points);
        for t in (0..self.inside).map(|i| i * self.stride) {
            points.push(Point2::new(triangles[t].a.x + TRI_WIDTH / 2, TRI_HEIGHT / 2));
            labels.push(Label::Inside(t));
        }

        let outside = self.points - self.inside;
        let start = outside_start(Self::FAR_OFFSET, field, Self::STRIDE);
        points.extend(outside_row("points", start, outside, OUTSIDE_PITCH, OUTSIDE_Y)?);
        labels.extend(std::iter::repeat_n(Label::Outside, outside));

        debug!(
            triangles = self.triangles,
            points = self.points,
            inside = self.inside,
            stride = self.stride,
            "generated many-triangles cluster"
        );
        Ok(LabeledDataset::new(Dataset::new(points, triangles), labels)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use crate::geometry::tiles_disjoint;

    fn config_err(result: Result<LabeledDataset>) -> ConfigError {
        match result {
            Err(FixtureError::Config(e)) => e,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn few_default_layout() {
        let out = FewTrianglesManyPoints::default().execute().unwrap();
        let d = out.dataset();
        assert_eq!(d.points().len(), 5000);
        assert_eq!(d.triangles().len(), 3);
        assert_eq!(
            d.triangles()[2].vertices(),
            [Point2::new(600, 0), Point2::new(700, 0), Point2::new(650, 100)]
        );
        // 4000 = 3 * 1333 + 1
        let per: Vec<usize> = (0..3)
            .map(|t| out.labels().iter().filter(|l| **l == Label::Inside(t)).count())
            .collect();
        assert_eq!(per, vec![1334, 1333, 1333]);
        assert_eq!(d.points()[0], Point2::new(50, 50));
        assert_eq!(d.points()[4000], Point2::new(1000, 150));
        assert_eq!(d.points()[4999], Point2::new(1000 + 999 * 10, 150));
        assert!(tiles_disjoint(d.triangles()));
        out.verify().unwrap();
    }

    #[test]
    fn few_remainder_goes_to_earliest() {
        let out = FewTrianglesManyPoints::new(4, 10, 7).execute().unwrap();
        let per: Vec<usize> = (0..4)
            .map(|t| out.labels().iter().filter(|l| **l == Label::Inside(t)).count())
            .collect();
        assert_eq!(per, vec![2, 2, 2, 1]);
        assert_eq!(out.inside_count(), 7);
        out.verify().unwrap();
    }

    #[test]
    fn few_outside_row_clears_wide_field() {
        let out = FewTrianglesManyPoints::new(10, 12, 2).execute().unwrap();
        // Last triangle spans [2700, 2800].
        assert_eq!(out.dataset().points()[2], Point2::new(2900, 150));
        out.verify().unwrap();
    }

    #[test]
    fn outside_start_keeps_floor_for_default_fields() {
        // 3 triangles at pitch 300 end at x = 700; 5000 at pitch 200 end at 999_900.
        assert_eq!(outside_start(1000, 3 * 300, 300), 1000);
        assert_eq!(outside_start(1_000_000, 5000 * 200, 200), 1_000_000);
        assert_eq!(outside_start(1_000_000, 5001 * 200, 200), 1_000_200);
    }

    #[test]
    fn many_outside_row_touches_nothing_at_floor() {
        let out = ManyTrianglesFewPoints::new(5000, 25, 5).execute().unwrap();
        let d = out.dataset();
        assert_eq!(d.points()[5], Point2::new(1_000_000, 150));
        let last = d.triangles()[4999];
        assert_eq!(last.b.x + OUTSIDE_MARGIN, 1_000_000);
        out.verify().unwrap();
    }

    #[test]
    fn few_rejects_bad_config() {
        assert_eq!(
            config_err(FewTrianglesManyPoints::new(0, 10, 5).execute()),
            ConfigError::ZeroCount { parameter: "triangles" }
        );
        assert_eq!(
            config_err(FewTrianglesManyPoints::new(3, 0, 0).execute()),
            ConfigError::ZeroCount { parameter: "points" }
        );
        assert_eq!(
            config_err(FewTrianglesManyPoints::new(3, 10, 11).execute()),
            ConfigError::InsideExceedsTotal { inside: 11, total: 10 }
        );
    }

    #[test]
    fn many_default_layout() {
        let out = ManyTrianglesFewPoints::default().execute().unwrap();
        let d = out.dataset();
        assert_eq!(d.points().len(), 50);
        assert_eq!(d.triangles().len(), 5000);
        assert_eq!(d.points()[1], Point2::new(10 * 200 + 50, 50));
        assert_eq!(out.labels()[19], Label::Inside(190));
        assert_eq!(d.points()[20], Point2::new(1_000_000, 150));
        assert_eq!(out.inside_count(), 20);
        out.verify().unwrap();
    }

    #[test]
    fn many_far_offset_moves_past_huge_field() {
        let out = ManyTrianglesFewPoints::new(6000, 3, 1).execute().unwrap();
        // Last triangle spans [1_199_800, 1_199_900].
        assert_eq!(out.dataset().points()[1], Point2::new(1_200_000, 150));
        out.verify().unwrap();
    }

    #[test]
    fn many_custom_stride() {
        let out = ManyTrianglesFewPoints::new(20, 5, 4)
            .with_stride(5)
            .execute()
            .unwrap();
        assert_eq!(
            &out.labels()[..4],
            &[Label::Inside(0), Label::Inside(5), Label::Inside(10), Label::Inside(15)]
        );
        out.verify().unwrap();
    }

    #[test]
    fn many_rejects_bad_config() {
        assert_eq!(
            config_err(ManyTrianglesFewPoints::new(100, 50, 20).execute()),
            ConfigError::StrideOutOfRange { index: 190, triangles: 100 }
        );
        assert_eq!(
            config_err(ManyTrianglesFewPoints::new(100, 5, 1).with_stride(0).execute()),
            ConfigError::ZeroCount { parameter: "stride" }
        );
        assert_eq!(
            config_err(ManyTrianglesFewPoints::new(100, 5, 6).execute()),
            ConfigError::InsideExceedsTotal { inside: 6, total: 5 }
        );
    }

    #[test]
    fn many_all_outside() {
        let out = ManyTrianglesFewPoints::new(1, 4, 0).execute().unwrap();
        assert_eq!(out.inside_count(), 0);
        out.verify().unwrap();
    }
}
