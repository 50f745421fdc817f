use tracing::debug;

use super::extent;
use crate::dataset::{Dataset, Label, LabeledDataset};
use crate::error::Result;
use crate::geometry::Triangle;
use crate::math::Point2;

/// Direction along which [`TiledAxis`] lays out its triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Slots advance along x; triangles stand on the x axis.
    Horizontal,
    /// Slots advance along y; triangles lean on the y axis.
    Vertical,
}

/// One triangle per fixed-size slot along a single axis, with points
/// alternating between the interior of their own slot and the gap after it.
///
/// Point `i` is strictly inside triangle `i` when `i` is even and in the gap
/// between triangles `i` and `i + 1` when `i` is odd.
#[derive(Debug, Clone, Copy)]
pub struct TiledAxis {
    count: usize,
    axis: Axis,
}

impl TiledAxis {
    /// Distance between consecutive slot origins.
    pub const STRIDE: i64 = 200;
    /// Triangle extent along the tiling axis.
    pub const EXTENT: i64 = 80;
    /// Triangle extent across the tiling axis.
    pub const DEPTH: i64 = 100;

    /// Offset of an outside point from its slot origin, inside the gap.
    const GAP_OFFSET: i64 = 150;

    /// Creates a new `TiledAxis` generator for `count` points and triangles.
    #[must_use]
    pub fn new(count: usize, axis: Axis) -> Self {
        Self { count, axis }
    }

    /// Horizontal tiling of `count` slots.
    #[must_use]
    pub fn horizontal(count: usize) -> Self {
        Self::new(count, Axis::Horizontal)
    }

    /// Vertical tiling of `count` slots.
    #[must_use]
    pub fn vertical(count: usize) -> Self {
        Self::new(count, Axis::Vertical)
    }

    /// Executes the generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TooLarge` if the tiling would not fit in `i64`
    /// coordinates.
    pub fn execute(&self) -> Result<LabeledDataset> {
        extent("count", self.count, Self::STRIDE)?;

        let mut points = Vec::with_capacity(self.count);
        let mut triangles = Vec::with_capacity(self.count);
        let mut labels = Vec::with_capacity(self.count);

        for (i, slot) in (0..self.count).zip(0_i64..) {
            let origin = slot * Self::STRIDE;
            triangles.push(self.slot_triangle(origin));
            if i % 2 == 0 {
                points.push(self.place(origin + Self::EXTENT / 2, Self::DEPTH / 2));
                labels.push(Label::Inside(i));
            } else {
                points.push(self.place(origin + Self::GAP_OFFSET, Self::DEPTH / 2));
                labels.push(Label::Outside);
            }
        }

        debug!(count = self.count, axis = ?self.axis, "generated tiled dataset");
        Ok(LabeledDataset::new(Dataset::new(points, triangles), labels)?)
    }

    /// Maps `(along, across)` slot coordinates onto the plane.
    fn place(&self, along: i64, across: i64) -> Point2 {
        match self.axis {
            Axis::Horizontal => Point2::new(along, across),
            Axis::Vertical => Point2::new(across, along),
        }
    }

    fn slot_triangle(&self, origin: i64) -> Triangle {
        Triangle::new(
            self.place(origin, 0),
            self.place(origin + Self::EXTENT, 0),
            self.place(origin + Self::EXTENT / 2, Self::DEPTH),
        )
    }
}
