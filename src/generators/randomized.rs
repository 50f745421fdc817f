use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{extent, require_inside_within, require_nonzero};
use crate::dataset::{Dataset, Label, LabeledDataset};
use crate::error::{GeometryError, Result};
use crate::geometry::Triangle;
use crate::math::barycentric::sample_in_triangle;
use crate::math::Point2;

const TRI_WIDTH: i64 = 100;
const TRI_HEIGHT: i64 = 100;
const GAP: i64 = 50;
const PITCH: i64 = TRI_WIDTH + GAP;
/// Apex x offset from the slot center is drawn from `[-MAX_SKEW, MAX_SKEW]`.
const MAX_SKEW: i64 = 30;
/// Outside x is drawn from `[field + OUTSIDE_NEAR, field + OUTSIDE_FAR]`.
const OUTSIDE_NEAR: i64 = 100;
const OUTSIDE_FAR: i64 = 10_000;
/// Upper bound of attempts per point under [`BoundaryPolicy::Resample`].
const MAX_RESAMPLES: usize = 1024;

// Apex must stay within the slot so bounding boxes never cross into the gap.
const _: () = assert!(MAX_SKEW < TRI_WIDTH / 2 && GAP > 0 && TRI_HEIGHT > 0);

/// What to do when an interior sample truncates onto or across an edge.
///
/// Truncating the real-valued barycentric sample toward zero can move it onto
/// the triangle boundary (for instance any sample with `y < 1`) or, near a
/// steep edge, just outside it. The two policies consume the random stream
/// differently, so the same seed produces different datasets under each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Redraw until the truncated point is strictly inside its triangle.
    /// Every `Inside` label then survives [`LabeledDataset::verify`].
    #[default]
    Resample,
    /// Keep the first truncated sample, whatever it lands on. Matches the
    /// plain sampling algorithm draw for draw; some `Inside` points may sit on
    /// an edge or just outside.
    Accept,
}

/// Triangles with seeded apex skew and uniformly sampled interior points.
///
/// Triangle `i` stands in the slot `[i * 150, i * 150 + 100]` with its apex
/// skewed by a value from `[-30, 30]`. Inside point `k` is sampled in triangle
/// `k % num_triangles`; outside points are scattered to the right of the
/// field. The random source is a [`StdRng`] seeded from `seed` and owned by a
/// single [`execute`](Self::execute) call.
#[derive(Debug, Clone, Copy)]
pub struct Randomized {
    num_triangles: usize,
    num_points: usize,
    num_points_inside: usize,
    seed: u64,
    boundary: BoundaryPolicy,
}

impl Randomized {
    /// Seed used unless [`with_seed`](Self::with_seed) overrides it.
    pub const DEFAULT_SEED: u64 = 42;

    /// Creates a new `Randomized` generator with the default seed and
    /// [`BoundaryPolicy::Resample`].
    #[must_use]
    pub fn new(num_triangles: usize, num_points: usize, num_points_inside: usize) -> Self {
        Self {
            num_triangles,
            num_points,
            num_points_inside,
            seed: Self::DEFAULT_SEED,
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Sets the seed of the random source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how truncation onto the boundary is handled.
    #[must_use]
    pub fn with_boundary_policy(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Executes the generator.
    ///
    /// Draw order is fixed: one skew per triangle, then the inside samples,
    /// then the outside coordinates.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for zero triangles or points, more inside points
    /// than points, or a field beyond the `i64` range. Under
    /// [`BoundaryPolicy::Resample`], returns `GeometryError::NoInteriorPoint`
    /// if no strictly interior sample turns up within the attempt limit.
    pub fn execute(&self) -> Result<LabeledDataset> {
        require_nonzero("num_triangles", self.num_triangles)?;
        require_nonzero("num_points", self.num_points)?;
        require_inside_within(self.num_points_inside, self.num_points)?;
        let field = extent("num_triangles", self.num_triangles, PITCH)?;

        let mut rng = StdRng::seed_from_u64(self.seed);

        let triangles: Vec<Triangle> = (0_i64..)
            .take(self.num_triangles)
            .map(|slot| {
                let base_x = slot * PITCH;
                let skew = rng.random_range(-MAX_SKEW..=MAX_SKEW);
                Triangle::new(
                    Point2::new(base_x, 0),
                    Point2::new(base_x + TRI_WIDTH, 0),
                    Point2::new(base_x + TRI_WIDTH / 2 + skew, TRI_HEIGHT),
                )
            })
            .collect();

        let mut points = Vec::with_capacity(self.num_points);
        let mut labels = Vec::with_capacity(self.num_points);
        let mut redraws = 0_usize;
        for k in 0..self.num_points_inside {
            let t = k % self.num_triangles;
            let point = match self.boundary {
                BoundaryPolicy::Accept => {
                    let tri = &triangles[t];
                    sample_in_triangle(&mut rng, &tri.a, &tri.b, &tri.c)
                }
                BoundaryPolicy::Resample => {
                    let (point, attempts) = sample_strictly_inside(&mut rng, &triangles[t], t)?;
                    redraws += attempts - 1;
                    point
                }
            };
            points.push(point);
            labels.push(Label::Inside(t));
        }

        for _ in self.num_points_inside..self.num_points {
            let x = rng.random_range(field + OUTSIDE_NEAR..=field + OUTSIDE_FAR);
            let y = rng.random_range(0..=2 * TRI_HEIGHT);
            points.push(Point2::new(x, y));
            labels.push(Label::Outside);
        }

        debug!(
            triangles = self.num_triangles,
            points = self.num_points,
            inside = self.num_points_inside,
            seed = self.seed,
            policy = ?self.boundary,
            redraws,
            "generated randomized dataset"
        );
        Ok(LabeledDataset::new(Dataset::new(points, triangles), labels)?)
    }
}

/// Samples until the truncated point is strictly inside `triangle`.
///
/// Returns the point and the number of attempts it took.
fn sample_strictly_inside<R: Rng + ?Sized>(
    rng: &mut R,
    triangle: &Triangle,
    index: usize,
) -> std::result::Result<(Point2, usize), GeometryError> {
    for attempt in 1..=MAX_RESAMPLES {
        let p = sample_in_triangle(rng, &triangle.a, &triangle.b, &triangle.c);
        if triangle.contains_strict(&p) {
            return Ok((p, attempt));
        }
        trace!(triangle = index, x = p.x, y = p.y, "sample truncated onto boundary");
    }
    Err(GeometryError::NoInteriorPoint {
        triangle: index,
        attempts: MAX_RESAMPLES,
    })
}
