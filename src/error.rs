use thiserror::Error;

/// Top-level error type for fixture generation.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Invalid generator parameters. Raised before any point is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{parameter} must be greater than zero")]
    ZeroCount { parameter: &'static str },

    #[error("inside point count {inside} exceeds total point count {total}")]
    InsideExceedsTotal { inside: usize, total: usize },

    #[error("{parameter} = {value} puts coordinates beyond the i64 range")]
    TooLarge { parameter: &'static str, value: usize },

    #[error("strided triangle index {index} is out of range for {triangles} triangles")]
    StrideOutOfRange { index: usize, triangles: usize },

    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: String,
        reason: &'static str,
    },
}

/// Errors related to the geometry of generated fixtures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("degenerate triangle {index}: zero area")]
    Degenerate { index: usize },

    #[error("no strictly interior point found in triangle {triangle} after {attempts} attempts")]
    NoInteriorPoint { triangle: usize, attempts: usize },

    #[error("point {point} labeled inside triangle {triangle} is not strictly inside it")]
    NotInside { point: usize, triangle: usize },

    #[error("point {point} is contained by unexpected triangle {triangle}")]
    UnexpectedContainment { point: usize, triangle: usize },

    #[error("bounding boxes of triangles {first} and {second} intersect")]
    Overlap { first: usize, second: usize },

    #[error("label count {labels} does not match point count {points}")]
    LabelCount { labels: usize, points: usize },
}

/// Errors raised while reading the text dataset format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: expected `{expected}: <count>` header")]
    MissingHeader { line: usize, expected: &'static str },

    #[error("line {line}: invalid count in `{section}` header")]
    InvalidCount { line: usize, section: &'static str },

    #[error("line {line}: expected {expected} integers, found `{content}`")]
    InvalidLine {
        line: usize,
        expected: usize,
        content: String,
    },

    #[error("`{section}` declares {declared} entries but {actual} follow")]
    CountMismatch {
        section: &'static str,
        declared: usize,
        actual: usize,
    },
}

/// Convenience type alias for results using [`FixtureError`].
pub type Result<T> = std::result::Result<T, FixtureError>;
