//! Boundary validation for triangle lists arriving from outside Rust.
//!
//! Host layers (CLI readers, Python binding) hand over rows of signed
//! integers; anything that is not a triple of representable, non-negative
//! indices is rejected here with the offending row and position.

use std::fmt;

use crate::triangle::{Triangle, Vertex};

/// Why a row was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The row does not hold exactly three indices.
    Arity { len: usize },
    /// An index is below zero.
    Negative { position: usize, value: i64 },
    /// An index does not fit in `Vertex`.
    Overflow { position: usize, value: i64 },
}

/// First rejected row of a triangle list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputError {
    pub row: usize,
    pub kind: InputErrorKind,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InputErrorKind::Arity { len } => write!(
                f,
                "triangle {} has {} indices, expected 3",
                self.row, len
            ),
            InputErrorKind::Negative { position, value } => write!(
                f,
                "triangle {} index {} is negative ({})",
                self.row, position, value
            ),
            InputErrorKind::Overflow { position, value } => write!(
                f,
                "triangle {} index {} is out of range ({})",
                self.row, position, value
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Convert host rows into triangles, rejecting the first malformed row.
pub fn triangles_from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Vec<Triangle>, InputError> {
    rows.iter()
        .enumerate()
        .map(|(row, r)| triangle_from_row(row, r.as_ref()))
        .collect()
}

fn triangle_from_row(row: usize, r: &[i64]) -> Result<Triangle, InputError> {
    if r.len() != 3 {
        return Err(InputError {
            row,
            kind: InputErrorKind::Arity { len: r.len() },
        });
    }
    let mut t: Triangle = [0; 3];
    for (position, &value) in r.iter().enumerate() {
        if value < 0 {
            return Err(InputError {
                row,
                kind: InputErrorKind::Negative { position, value },
            });
        }
        t[position] = Vertex::try_from(value).map_err(|_| InputError {
            row,
            kind: InputErrorKind::Overflow { position, value },
        })?;
    }
    Ok(t)
}
