//! The loaded waveform and the CSV loader that produces it.
//!
//! Oscilloscope exports start with a block of metadata rows. The samples follow
//! a header row whose first cell is exactly `TIME`:
//!
//! ```text
//! Model,MDO3024
//! Record Length,10000
//! TIME,CH1
//! -1.0e-06,0.02
//! -9.9e-07,0.04
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;

const HEADER_SENTINEL: &str = "TIME";

/// A single time/voltage trace. Always holds at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    time: Vec<f64>,
    voltage: Vec<f64>,
}

impl Trace {
    pub fn new(time: Vec<f64>, voltage: Vec<f64>) -> Result<Self, LoadError> {
        if time.len() != voltage.len() {
            return Err(LoadError::LengthMismatch {
                time: time.len(),
                voltage: voltage.len(),
            });
        }
        if time.is_empty() {
            return Err(LoadError::NoSamples);
        }
        Ok(Self { time, voltage })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// First and last time stamp, in file order.
    pub fn span(&self) -> (f64, f64) {
        // `new` rejects empty traces.
        (self.time[0], self.time[self.time.len() - 1])
    }

    /// Samples whose time lies in `lo..=hi`.
    pub fn samples_between(&self, lo: f64, hi: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.voltage.iter())
            .filter(move |(t, _)| **t >= lo && **t <= hi)
            .map(|(t, v)| (*t, *v))
    }
}

/// Open `path` and parse it with [`parse_trace`].
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Trace, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(BufReader::new(file))
}

/// Parse an oscilloscope CSV export.
///
/// Rows up to and including the first `TIME` row are skipped. Every later
/// non-blank row contributes `(row[0], row[1])`; extra columns are ignored.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Trace, LoadError> {
    let mut time = Vec::new();
    let mut voltage = Vec::new();
    let mut data_started = false;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        if line.is_empty() {
            continue;
        }
        let cells = split_record(&line);
        if cells[0] == HEADER_SENTINEL {
            data_started = true;
            continue;
        }
        if !data_started {
            continue;
        }
        if cells.len() < 2 {
            return Err(LoadError::MissingColumn { line: line_no });
        }
        time.push(parse_cell(&cells[0], line_no, 1)?);
        voltage.push(parse_cell(&cells[1], line_no, 2)?);
    }

    if !data_started {
        return Err(LoadError::MissingHeader);
    }
    Trace::new(time, voltage)
}

fn parse_cell(cell: &str, line: usize, column: usize) -> Result<f64, LoadError> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            line,
            column,
            text: cell.to_string(),
        })
}

/// Split one CSV line into cells. Double-quoted cells may contain commas and
/// `""` for a literal quote. Always returns at least one cell.
pub(crate) fn split_record(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if cell.is_empty() => in_quotes = true,
            ',' if !in_quotes => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);
    cells
}
