//! The standard fixture suite and its command-line configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::dataset::{save, save_labels, LabeledDataset};
use crate::error::{ConfigError, Result};
use crate::generators::{
    BoundaryPolicy, FewTrianglesManyPoints, ManyTrianglesFewPoints, Randomized, TiledAxis,
};

/// Command-line synopsis printed on argument errors.
pub const USAGE: &str = "\
usage: trifixture [OUTPUT_DIR] [options]

options:
  --seed N           seed for the inside-point counts of the random scenarios
  --dataset-seed N   seed passed to every randomized dataset (default 42)
  --shrink N         divide every scenario size by N (default 1)
  --accept-boundary  keep interior samples that truncate onto an edge
  --verify           check ground truth before writing each dataset
  --labels           also write a `.labels` sidecar per dataset";

/// One generator with its parameters.
#[derive(Debug, Clone, Copy)]
pub enum Scenario {
    /// Horizontal or vertical tiling with alternating inside/outside points.
    Tiled(TiledAxis),
    /// A handful of triangles sharing thousands of interior points.
    FewTriangles(FewTrianglesManyPoints),
    /// Thousands of triangles, only a few of them hit.
    ManyTriangles(ManyTrianglesFewPoints),
    /// Seeded skewed triangles with sampled interior points.
    Randomized(Randomized),
}

impl Scenario {
    /// Runs the wrapped generator.
    ///
    /// # Errors
    ///
    /// Propagates the generator's error.
    pub fn execute(&self) -> Result<LabeledDataset> {
        match self {
            Self::Tiled(g) => g.execute(),
            Self::FewTriangles(g) => g.execute(),
            Self::ManyTriangles(g) => g.execute(),
            Self::Randomized(g) => g.execute(),
        }
    }
}

/// A scenario and the file it is written to.
#[derive(Debug, Clone)]
pub struct SuiteEntry {
    /// File name relative to the output directory.
    pub file_name: String,
    /// What to generate.
    pub scenario: Scenario,
}

/// Settings for generating the standard suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Directory receiving every dataset; created if missing.
    pub output_dir: PathBuf,
    /// Seeds the draw of inside-point counts for the random scenarios.
    pub suite_seed: u64,
    /// Seed of every randomized dataset.
    pub dataset_seed: u64,
    /// Every size is divided by this factor (and kept at least 1).
    pub shrink: usize,
    /// Boundary policy of the randomized datasets.
    pub boundary: BoundaryPolicy,
    /// Verify each dataset's ground truth before writing it.
    pub verify: bool,
    /// Write a `.labels` sidecar next to each dataset.
    pub labels: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            suite_seed: 0,
            dataset_seed: Randomized::DEFAULT_SEED,
            shrink: 1,
            boundary: BoundaryPolicy::Resample,
            verify: false,
            labels: false,
        }
    }
}

impl SuiteConfig {
    /// Parses command-line arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidArgument` for an unknown flag, a missing or
    /// malformed value, a zero shrink factor, or a second positional argument.
    pub fn from_args<I>(args: I) -> std::result::Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut output_dir = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => config.suite_seed = number(&arg, args.next())?,
                "--dataset-seed" => config.dataset_seed = number(&arg, args.next())?,
                "--shrink" => {
                    config.shrink = number(&arg, args.next())?;
                    if config.shrink == 0 {
                        return Err(invalid(format!("{arg} 0"), "shrink factor must be at least 1"));
                    }
                }
                "--accept-boundary" => config.boundary = BoundaryPolicy::Accept,
                "--verify" => config.verify = true,
                "--labels" => config.labels = true,
                flag if flag.starts_with("--") => {
                    return Err(invalid(flag.to_owned(), "unknown option"));
                }
                other if output_dir.is_some() => {
                    return Err(invalid(other.to_owned(), "only one output directory may be given"));
                }
                other => output_dir = Some(PathBuf::from(other)),
            }
        }

        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }
        Ok(config)
    }

    fn scaled(&self, size: usize) -> usize {
        (size / self.shrink).max(1)
    }

    /// Lists the standard suite: two tilings, two clusters, and nine randomized
    /// datasets sweeping first the triangle count, then the point count.
    ///
    /// The 5000 x 5000 dataset is shared by both sweeps and listed once. File
    /// names are unique; when shrinking collapses two sizes onto the same name,
    /// only the first entry is kept.
    #[must_use]
    pub fn standard_suite(&self) -> Vec<SuiteEntry> {
        let mut rng = StdRng::seed_from_u64(self.suite_seed);
        let tiles = self.scaled(10_000);
        let mut entries = vec![
            SuiteEntry {
                file_name: "horizontal.txt".into(),
                scenario: Scenario::Tiled(TiledAxis::horizontal(tiles)),
            },
            SuiteEntry {
                file_name: "vertical.txt".into(),
                scenario: Scenario::Tiled(TiledAxis::vertical(tiles)),
            },
            SuiteEntry {
                file_name: "few_triangles_many_points.txt".into(),
                scenario: Scenario::FewTriangles(FewTrianglesManyPoints::new(
                    3,
                    self.scaled(5000),
                    self.scaled(4000),
                )),
            },
            SuiteEntry {
                file_name: "many_triangles_few_points.txt".into(),
                scenario: Scenario::ManyTriangles(ManyTrianglesFewPoints::new(
                    self.scaled(5000),
                    self.scaled(50),
                    self.scaled(20),
                )),
            },
        ];

        let base = self.scaled(5000);
        let sweeps = (0..5)
            .map(|i| (self.scaled(5000 + 3000 * i), base))
            .chain((1..5).map(|i| (base, self.scaled(5000 + 3000 * i))));
        let mut names: HashSet<String> = entries.iter().map(|e| e.file_name.clone()).collect();
        for (triangles, points) in sweeps {
            let inside = rng.random_range(1..=base);
            let file_name = format!("random_dataset_{triangles}tr_{points}p.txt");
            if !names.insert(file_name.clone()) {
                debug!(file = %file_name, "skipping duplicate suite entry");
                continue;
            }
            entries.push(SuiteEntry {
                file_name,
                scenario: Scenario::Randomized(
                    Randomized::new(triangles, points, inside)
                        .with_seed(self.dataset_seed)
                        .with_boundary_policy(self.boundary),
                ),
            });
        }
        entries
    }

    /// Generates and writes every dataset of the standard suite.
    ///
    /// Returns the paths written, in suite order.
    ///
    /// # Errors
    ///
    /// Stops at the first generator, verification, or I/O failure.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;
        let mut written = Vec::new();
        for entry in self.standard_suite() {
            let path = self.output_dir.join(&entry.file_name);
            write_entry(&entry, &path, self.verify, self.labels)?;
            written.push(path);
        }
        info!(
            datasets = written.len(),
            dir = %self.output_dir.display(),
            "suite complete"
        );
        Ok(written)
    }
}

fn write_entry(entry: &SuiteEntry, path: &Path, verify: bool, labels: bool) -> Result<()> {
    let out = entry.scenario.execute()?;
    if verify {
        out.verify()?;
        debug!(file = %entry.file_name, "ground truth verified");
    }
    save(path, out.dataset())?;
    if labels {
        save_labels(path.with_extension("labels"), out.labels())?;
    }
    Ok(())
}

fn invalid(argument: String, reason: &'static str) -> ConfigError {
    ConfigError::InvalidArgument { argument, reason }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> std::result::Result<T, ConfigError> {
    let value = value.ok_or_else(|| invalid(flag.to_owned(), "missing value"))?;
    value
        .parse()
        .map_err(|_| invalid(format!("{flag} {value}"), "expected an unsigned integer"))
}
