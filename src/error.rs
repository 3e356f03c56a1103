//! Error types for table generation.
//!
//! Generation either produces a complete artifact or fails with one of these
//! errors before anything is written; there is no partial-success mode.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while building or writing a table.
///
/// The variants fall into three classes:
///
/// - configuration errors ([`TooFewControlPoints`], [`UnorderedControlPoint`],
///   [`InvalidMultiple`], [`OriginMismatch`]) - the generator was set up with
///   inputs that can never produce a valid table, detected before any
///   computation runs;
/// - degenerate input ([`DegenerateBuffer`]) - a buffer that cannot be
///   normalized without dividing by zero;
/// - write failures ([`Io`], [`Wav`]) - the artifact could not be written,
///   carrying the offending path.
///
/// [`TooFewControlPoints`]: Error::TooFewControlPoints
/// [`UnorderedControlPoint`]: Error::UnorderedControlPoint
/// [`InvalidMultiple`]: Error::InvalidMultiple
/// [`OriginMismatch`]: Error::OriginMismatch
/// [`DegenerateBuffer`]: Error::DegenerateBuffer
/// [`Io`]: Error::Io
/// [`Wav`]: Error::Wav
#[derive(Debug)]
pub enum Error {
    /// A response curve needs at least two control points to interpolate.
    TooFewControlPoints { count: usize },
    /// Control point frequencies must be strictly increasing.
    UnorderedControlPoint { index: usize, frequency: f64 },
    /// The index multiple must be a finite, positive number.
    InvalidMultiple { multiple: f64 },
    /// The first table position did not land on `start + 1`, so the inverse
    /// lookup formula the runtime uses would be misaligned.
    OriginMismatch { start: f64, origin: f64 },
    /// An all-zero buffer cannot be peak-normalized.
    DegenerateBuffer,
    /// Writing an output artifact failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Encoding a WAV artifact failed.
    Wav {
        path: PathBuf,
        source: hound::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooFewControlPoints { count } => {
                write!(f, "a curve needs at least 2 control points, got {count}")
            }
            Error::UnorderedControlPoint { index, frequency } => write!(
                f,
                "control point {index} at {frequency} Hz does not lie above the previous point"
            ),
            Error::InvalidMultiple { multiple } => {
                write!(f, "index multiple {multiple} is not a positive finite number")
            }
            Error::OriginMismatch { start, origin } => write!(
                f,
                "first table position {origin} does not equal start + 1 (start = {start})"
            ),
            Error::DegenerateBuffer => write!(f, "cannot normalize an all-zero buffer"),
            Error::Io { path, .. } => write!(f, "failed to write '{}'", path.display()),
            Error::Wav { path, .. } => write!(f, "failed to encode '{}'", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Wav { source, .. } => Some(source),
            _ => None,
        }
    }
}
