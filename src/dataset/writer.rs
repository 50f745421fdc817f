use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use super::{Dataset, Label};
use crate::error::Result;

/// Writes `dataset` in the `points:` / `triangles:` text format.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_dataset<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "points: {}", dataset.points().len())?;
    for p in dataset.points() {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    writeln!(out, "triangles: {}", dataset.triangles().len())?;
    for t in dataset.triangles() {
        writeln!(out, "{t}")?;
    }
    Ok(())
}

/// Writes one label per line: `inside <triangle>` or `outside`.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_labels<W: Write>(out: &mut W, labels: &[Label]) -> io::Result<()> {
    for label in labels {
        match label {
            Label::Inside(t) => writeln!(out, "inside {t}")?,
            Label::Outside => writeln!(out, "outside")?,
        }
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `dataset` to it.
///
/// The file is flushed and closed before returning. If any write fails the
/// partially written file is removed.
///
/// # Errors
///
/// Returns `FixtureError::Io` if the file cannot be created or written.
pub fn save(path: impl AsRef<Path>, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();
    write_file(path, |out| write_dataset(out, dataset))?;
    info!(
        path = %path.display(),
        points = dataset.points().len(),
        triangles = dataset.triangles().len(),
        "wrote dataset"
    );
    Ok(())
}

/// Creates (or truncates) `path` and writes the label sidecar to it.
///
/// # Errors
///
/// Returns `FixtureError::Io` if the file cannot be created or written.
pub fn save_labels(path: impl AsRef<Path>, labels: &[Label]) -> Result<()> {
    let path = path.as_ref();
    write_file(path, |out| write_labels(out, labels))?;
    info!(path = %path.display(), labels = labels.len(), "wrote labels");
    Ok(())
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let written = body(&mut out).and_then(|()| out.flush());
    drop(out);

    if let Err(err) = written {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial file");
        }
        return Err(err.into());
    }
    Ok(())
}
