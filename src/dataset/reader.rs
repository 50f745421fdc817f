use std::fs;
use std::io::Read;
use std::path::Path;

use super::Dataset;
use crate::error::{FormatError, Result};
use crate::geometry::Triangle;
use crate::math::Point2;

const POINTS: &str = "points";
const TRIANGLES: &str = "triangles";

/// Parses the `points:` / `triangles:` text format.
///
/// Blank lines and surrounding whitespace are ignored. Each header count must
/// equal the number of lines in its section.
///
/// # Errors
///
/// Returns a [`FormatError`] for a missing or malformed header, a malformed
/// coordinate line, or a count mismatch.
pub fn parse(text: &str) -> std::result::Result<Dataset, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let (line, header) = lines.next().unwrap_or((1, ""));
    let declared_points = header_count(line, header, POINTS)?;

    let mut points = Vec::with_capacity(declared_points.min(1 << 20));
    while let Some(&(line, content)) = lines.peek() {
        if content.starts_with(TRIANGLES) {
            break;
        }
        let [x, y] = integers::<2>(line, content)?;
        points.push(Point2::new(x, y));
        lines.next();
    }
    check_count(POINTS, declared_points, points.len())?;

    let Some((line, header)) = lines.next() else {
        let line = text.lines().count() + 1;
        return Err(FormatError::MissingHeader {
            line,
            expected: TRIANGLES,
        });
    };
    let declared_triangles = header_count(line, header, TRIANGLES)?;

    let mut triangles = Vec::with_capacity(declared_triangles.min(1 << 20));
    for (line, content) in lines {
        let [ax, ay, bx, by, cx, cy] = integers::<6>(line, content)?;
        triangles.push(Triangle::new(
            Point2::new(ax, ay),
            Point2::new(bx, by),
            Point2::new(cx, cy),
        ));
    }
    check_count(TRIANGLES, declared_triangles, triangles.len())?;

    Ok(Dataset::new(points, triangles))
}

/// Reads all of `reader` and parses it.
///
/// # Errors
///
/// Returns `FixtureError::Io` on a read failure or `FixtureError::Format` on
/// malformed content.
pub fn read_from<R: Read>(mut reader: R) -> Result<Dataset> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text)?)
}

/// Reads and parses the dataset stored at `path`.
///
/// # Errors
///
/// Returns `FixtureError::Io` if the file cannot be read or
/// `FixtureError::Format` on malformed content.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

fn header_count(
    line: usize,
    content: &str,
    section: &'static str,
) -> std::result::Result<usize, FormatError> {
    let count = content
        .strip_prefix(section)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or(FormatError::MissingHeader {
            line,
            expected: section,
        })?;
    count
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidCount { line, section })
}

fn integers<const N: usize>(line: usize, content: &str) -> std::result::Result<[i64; N], FormatError> {
    let invalid = || FormatError::InvalidLine {
        line,
        expected: N,
        content: content.to_owned(),
    };
    let mut out = [0_i64; N];
    let mut fields = content.split_whitespace();
    for slot in &mut out {
        *slot = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(invalid)?;
    }
    if fields.next().is_some() {
        return Err(invalid());
    }
    Ok(out)
}

fn check_count(
    section: &'static str,
    declared: usize,
    actual: usize,
) -> std::result::Result<(), FormatError> {
    if declared == actual {
        Ok(())
    } else {
        Err(FormatError::CountMismatch {
            section,
            declared,
            actual,
        })
    }
}
