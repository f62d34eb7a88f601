//! Triangle mesh with strip-compatible adjacency and consumption state.
//!
//! Purpose
//! - Hold the input triangles in an arena indexed by input position
//!   (`FaceId`) and link every non-degenerate face to at most one neighbor
//!   per edge slot.
//! - Track which faces have been committed to a strip and hand out seeds in
//!   (fewest unconsumed neighbors, lowest input index) order.
//!
//! Adjacency
//! - Two faces are linked across an edge only if they traverse it in
//!   opposite directions, i.e. they can sit next to each other in a strip
//!   with consistent facing. Faces sharing an edge in the same direction
//!   (`(0,1,2)` and `(0,1,3)`) are opposite-facing and never linked.
//! - Non-manifold edges are resolved by pairing the k-th face using `a→b`
//!   with the k-th face using `b→a`, both lists in input order. The lowest
//!   input indices pair first; leftovers stay unlinked on that edge.
//! - Degenerate faces are stored but never linked and never seeded.

mod build;
mod query;
mod types;

pub use types::{Face, FaceId, Link, Mesh};
