//! Reproducible triangle sources for benchmarks, the CLI and tests.
//!
//! Every random generator takes an explicit seed; equal seeds give equal
//! output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::triangle::{rotated, Triangle};

/// Regular `cols × rows` quad grid, each quad split along its diagonal into
/// two consistently wound triangles. Vertices are numbered row-major.
pub fn grid(cols: usize, rows: usize) -> Vec<Triangle> {
    let stride = cols + 1;
    let mut out = Vec::with_capacity(2 * cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            let v00 = y * stride + x;
            let v10 = v00 + 1;
            let v01 = v00 + stride;
            let v11 = v01 + 1;
            out.push([v00, v10, v11]);
            out.push([v00, v11, v01]);
        }
    }
    out
}

/// `count` random triangles over vertices `0..vertex_range`. Degenerate,
/// duplicated and non-manifold faces all occur for small ranges.
pub fn soup(count: usize, vertex_range: usize, seed: u64) -> Vec<Triangle> {
    if vertex_range == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(0..vertex_range),
                rng.gen_range(0..vertex_range),
                rng.gen_range(0..vertex_range),
            ]
        })
        .collect()
}

/// Same faces in a random order, each randomly rotated.
pub fn shuffled(triangles: &[Triangle], seed: u64) -> Vec<Triangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out: Vec<Triangle> = triangles
        .iter()
        .map(|t| rotated(t, rng.gen_range(0..3)))
        .collect();
    out.shuffle(&mut rng);
    out
}
