//! Labeled point-in-triangle fixtures.
//!
//! Generators in [`generators`] build datasets of integer points and
//! triangles whose containment relationship is known by construction. The
//! [`dataset`] module writes and reads the plain-text fixture format, and
//! [`suite`] assembles the standard set of scenarios.

pub mod dataset;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod math;
pub mod suite;

pub use dataset::{Dataset, Label, LabeledDataset};
pub use error::{FixtureError, Result};
