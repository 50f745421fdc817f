mod reader;
mod writer;

pub use reader::{load, parse, read_from};
pub use writer::{save, save_labels, write_dataset, write_labels};

use std::str::FromStr;

use crate::error::{FormatError, GeometryError};
use crate::geometry::{Aabb, Triangle};
use crate::math::Point2;

/// Points followed by triangles, exactly as they appear on the wire.
///
/// The header counts are never stored; they are always the lengths of the two
/// sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    points: Vec<Point2>,
    triangles: Vec<Triangle>,
}

impl Dataset {
    /// Creates a dataset from its point and triangle sequences.
    #[must_use]
    pub fn new(points: Vec<Point2>, triangles: Vec<Triangle>) -> Self {
        Self { points, triangles }
    }

    /// The points, in output order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The triangles, in output order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns `true` if the dataset has neither points nor triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.triangles.is_empty()
    }

    /// Indices of every triangle whose closed interior contains `p`.
    pub fn containing(&self, p: Point2) -> impl Iterator<Item = usize> + '_ {
        self.triangles
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.contains(&p))
            .map(|(i, _)| i)
    }
}

impl FromStr for Dataset {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Ground truth for one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Strictly inside the triangle with this index.
    Inside(usize),
    /// Outside every triangle.
    Outside,
}

/// A generated dataset together with the label of each point.
///
/// Labels are known by construction and are not part of the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDataset {
    dataset: Dataset,
    labels: Vec<Label>,
}

impl LabeledDataset {
    /// Pairs a dataset with one label per point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::LabelCount` if the label and point counts differ.
    pub fn new(dataset: Dataset, labels: Vec<Label>) -> Result<Self, GeometryError> {
        if labels.len() != dataset.points.len() {
            return Err(GeometryError::LabelCount {
                labels: labels.len(),
                points: dataset.points.len(),
            });
        }
        Ok(Self { dataset, labels })
    }

    /// The wire-format contents.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consumes `self`, returning the wire-format contents.
    #[must_use]
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Labels, parallel to [`Dataset::points`].
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of points labeled inside some triangle.
    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|l| matches!(l, Label::Inside(_)))
            .count()
    }

    /// Recomputes ground truth with exact integer predicates.
    ///
    /// Checks that every triangle has positive area, every `Inside(t)` point is
    /// strictly inside `t` and touches no other triangle, and every `Outside`
    /// point touches no triangle, boundaries included.
    ///
    /// # Errors
    ///
    /// Returns the first violated property as a [`GeometryError`].
    pub fn verify(&self) -> Result<(), GeometryError> {
        let triangles = self.dataset.triangles();
        if let Some(index) = triangles.iter().position(Triangle::is_degenerate) {
            return Err(GeometryError::Degenerate { index });
        }
        let boxes: Vec<Aabb> = triangles.iter().map(Triangle::aabb).collect();

        for (point, (p, label)) in self.dataset.points().iter().zip(&self.labels).enumerate() {
            let expected = match *label {
                Label::Inside(t) => {
                    if !triangles.get(t).is_some_and(|tri| tri.contains_strict(p)) {
                        return Err(GeometryError::NotInside { point, triangle: t });
                    }
                    Some(t)
                }
                Label::Outside => None,
            };
            let stray = triangles
                .iter()
                .zip(&boxes)
                .enumerate()
                .find(|(i, (tri, bb))| Some(*i) != expected && bb.contains(p) && tri.contains(p));
            if let Some((triangle, _)) = stray {
                return Err(GeometryError::UnexpectedContainment { point, triangle });
            }
        }
        Ok(())
    }
}
