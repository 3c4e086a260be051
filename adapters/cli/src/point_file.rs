//! Loading explicit point lists from JSON files.
//!
//! The format is a plain JSON array of `{ "x": .., "y": .. }` objects,
//! deserialised straight into the core [`Point`] type.

use std::{error::Error, fmt, fs, io, path::Path};

use planar_route_core::Point;

/// Parses a JSON point list from an in-memory payload.
pub(crate) fn parse_points(payload: &str) -> Result<Vec<Point>, PointFileError> {
    serde_json::from_str(payload).map_err(PointFileError::Parse)
}

/// Reads and parses a point list from the provided path.
pub(crate) fn load_points(path: &Path) -> Result<Vec<Point>, PointFileError> {
    let payload = fs::read_to_string(path).map_err(PointFileError::Read)?;
    parse_points(&payload)
}

/// Errors raised while loading a point file.
#[derive(Debug)]
pub(crate) enum PointFileError {
    /// The file could not be read.
    Read(io::Error),
    /// The payload was not a valid JSON point list.
    Parse(serde_json::Error),
}

impl fmt::Display for PointFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(error) => write!(f, "failed to read point file: {error}"),
            Self::Parse(error) => {
                write!(f, "point file is not a valid JSON point list: {error}")
            }
        }
    }
}

impl Error for PointFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(error) => Some(error),
            Self::Parse(error) => Some(error),
        }
    }
}
