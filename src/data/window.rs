use crate::error::{Bound, WindowError};

/// The displayed time range, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Parse the two text entries. Whitespace around a number is ignored.
    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        Ok(Self {
            start: parse_bound(start, Bound::Start)?,
            end: parse_bound(end, Bound::End)?,
        })
    }

    /// Both edges clamped into the range spanned by `a` and `b`, ordered so
    /// that `start <= end`. NaN limits leave the edges unclamped.
    pub fn clamped_ordered(self, a: f64, b: f64) -> Self {
        let (start, end) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        if a.is_nan() || b.is_nan() {
            return Self { start, end };
        }
        let (lo, hi) = (a.min(b), a.max(b));
        Self {
            start: start.max(lo).min(hi),
            end: end.max(lo).min(hi),
        }
    }
}

impl From<(f64, f64)> for Window {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

fn parse_bound(text: &str, bound: Bound) -> Result<f64, WindowError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| WindowError::NotANumber {
            bound,
            text: text.to_string(),
        })
}
