//! Error types reported through the status line.
//!
//! Neither error is fatal: the viewer catches them at the point of use and
//! keeps the previously loaded trace and window.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a CSV export into a [`Trace`](crate::data::trace::Trace).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected a time and a voltage column")]
    MissingColumn { line: usize },
    #[error("line {line}: column {column} is not a number: {text:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("no TIME header row found")]
    MissingHeader,
    #[error("no samples after the TIME header row")]
    NoSamples,
    #[error("{time} time values but {voltage} voltage values")]
    LengthMismatch { time: usize, voltage: usize },
}

/// Which edge of the window an input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::End => write!(f, "end"),
        }
    }
}

/// A time window that cannot be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    #[error("no file loaded")]
    NoTrace,
    #[error("{bound} time is not a number: {text:?}")]
    NotANumber { bound: Bound, text: String },
    #[error("no samples between {start} s and {end} s")]
    EmptySelection { start: f64, end: f64 },
    #[error("no samples between 0 s and {end} s")]
    NoNonNegativeSamples { end: f64 },
}
