//! Join strips into one strip through degenerate steps.

use crate::triangle::Vertex;

/// Concatenate `strips` into a single strip.
///
/// Each joint repeats the last vertex of the accumulated strip and the first
/// vertex of the next one, so every window spanning the joint has a repeated
/// index. When the accumulated strip has odd length the last vertex is
/// repeated twice, which keeps the next strip starting at an even position.
/// Strips shorter than 3 are dropped.
pub fn stitch_strips(strips: &[Vec<Vertex>]) -> Vec<Vertex> {
    let mut out: Vec<Vertex> = Vec::new();
    for strip in strips.iter().filter(|s| s.len() >= 3) {
        if let Some(&last) = out.last() {
            out.push(last);
            if out.len() % 2 == 0 {
                out.push(last);
            }
            out.push(strip[0]);
        }
        out.extend_from_slice(strip);
    }
    out
}
