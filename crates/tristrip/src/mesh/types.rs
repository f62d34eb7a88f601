//! Arena records for faces and their edge links.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::triangle::Triangle;

/// Position of a triangle in the input list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Neighbor across one edge slot: the other face and the slot on its side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub face: FaceId,
    pub slot: u8,
}

/// One input triangle. Edge slot `k` is the directed edge
/// `(verts[k], verts[k + 1])`; `links[k]` is the neighbor across it.
#[derive(Clone, Debug)]
pub struct Face {
    pub verts: Triangle,
    pub degenerate: bool,
    pub links: [Option<Link>; 3],
}

/// Seed candidates keyed by (unconsumed neighbor count, input index).
/// Entries go stale when a neighbor is consumed; stale entries are skipped
/// on pop because counts only ever decrease.
pub(crate) type SeedHeap = BinaryHeap<Reverse<(u8, usize)>>;

/// Face arena plus consumption flags for one stripification run.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub(crate) faces: Vec<Face>,
    pub(crate) consumed: Vec<bool>,
    /// Non-degenerate faces not yet consumed.
    pub(crate) remaining: usize,
    pub(crate) seeds: SeedHeap,
}
