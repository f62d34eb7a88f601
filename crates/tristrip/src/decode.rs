//! Strip decoding and strip/triangle equivalence checks.

use std::collections::HashMap;
use std::fmt;

use crate::triangle::{canonical, is_degenerate, Triangle, Vertex};

/// Decode strips into triangles with alternating winding.
///
/// Strips shorter than 3 contribute nothing; degenerate steps are skipped.
pub fn triangulate(strips: &[Vec<Vertex>]) -> Vec<Triangle> {
    let mut out = Vec::new();
    for strip in strips {
        for (k, w) in strip.windows(3).enumerate() {
            let t = if k % 2 == 0 {
                [w[0], w[1], w[2]]
            } else {
                [w[0], w[2], w[1]]
            };
            if !is_degenerate(&t) {
                out.push(t);
            }
        }
    }
    out
}

/// Which side of the comparison a triangle is surplus on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// In the input more often than in the strips.
    Missing,
    /// In the strips more often than in the input.
    Unexpected,
}

/// First triangle on which input and strips disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageError {
    pub kind: Mismatch,
    pub triangle: Triangle,
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.triangle;
        match self.kind {
            Mismatch::Missing => write!(f, "triangle ({a}, {b}, {c}) is in the input but not in the strips"),
            Mismatch::Unexpected => {
                write!(f, "triangle ({a}, {b}, {c}) is in the strips but not in the input")
            }
        }
    }
}

impl std::error::Error for CoverageError {}

/// Check that `strips` decode to exactly the non-degenerate `triangles`,
/// as multisets and up to rotation (not reflection).
pub fn check_strips(triangles: &[Triangle], strips: &[Vec<Vertex>]) -> Result<(), CoverageError> {
    let mut balance: HashMap<Triangle, isize> = HashMap::new();
    for t in triangles.iter().filter(|t| !is_degenerate(t)) {
        *balance.entry(canonical(t)).or_default() += 1;
    }
    for t in triangulate(strips) {
        let n = balance.entry(canonical(&t)).or_default();
        *n -= 1;
        if *n < 0 {
            return Err(CoverageError {
                kind: Mismatch::Unexpected,
                triangle: t,
            });
        }
    }
    for t in triangles.iter().filter(|t| !is_degenerate(t)) {
        if balance.get(&canonical(t)).copied().unwrap_or(0) > 0 {
            return Err(CoverageError {
                kind: Mismatch::Missing,
                triangle: *t,
            });
        }
    }
    Ok(())
}
