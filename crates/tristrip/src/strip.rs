//! A single strip under construction: a deque of faces and their vertex
//! sequence, grown from a seed face in both directions.
//!
//! Winding
//! - The seed is stored in the requested rotation and decodes as an even
//!   triangle while it sits at an even position. Every face appended after it
//!   is a linked neighbor across the edge formed by the last two vertices.
//!   Linked faces cross that edge in the opposite direction, so the
//!   alternating decode rule reproduces them exactly.
//! - Prepending shifts every position by one. If an odd number of vertices
//!   was prepended, `vertices()` repairs the parity: odd-length strips are
//!   reversed (which flips every triangle back), even-length strips get
//!   their first vertex doubled (one degenerate step).

use std::collections::VecDeque;

use crate::mesh::{FaceId, Mesh};
use crate::triangle::{rotated, Vertex};

/// Which end of a strip to extend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    Back,
    Front,
}

impl End {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            End::Back => End::Front,
            End::Front => End::Back,
        }
    }
}

/// Per-attempt claim stamps. A face claimed under the current stamp is
/// taken by the strip being grown; bumping the stamp releases all claims
/// at once without touching the array.
#[derive(Clone, Debug)]
pub(crate) struct Claims {
    stamp: Vec<u32>,
    current: u32,
}

impl Claims {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            stamp: vec![0; len],
            current: 0,
        }
    }

    /// Start a new attempt; everything claimed before is released.
    pub(crate) fn begin(&mut self) {
        self.current = self.current.wrapping_add(1);
        if self.current == 0 {
            self.stamp.iter_mut().for_each(|s| *s = 0);
            self.current = 1;
        }
    }

    #[inline]
    pub(crate) fn claim(&mut self, id: FaceId) {
        self.stamp[id.0] = self.current;
    }

    #[inline]
    pub(crate) fn is_claimed(&self, id: FaceId) -> bool {
        self.current != 0 && self.stamp[id.0] == self.current
    }
}

/// Strip being grown around a seed face.
#[derive(Clone, Debug)]
pub struct Strip {
    verts: VecDeque<Vertex>,
    faces: VecDeque<FaceId>,
    /// Vertices added in front of the seed triangle.
    prepended: usize,
}

impl Strip {
    /// Start a strip at `seed`, rotated so that corner `slot` leads.
    pub fn new(mesh: &Mesh, seed: FaceId, slot: usize) -> Self {
        let t = rotated(&mesh.verts(seed), slot % 3);
        Self {
            verts: t.iter().copied().collect(),
            faces: VecDeque::from([seed]),
            prepended: 0,
        }
    }

    /// Faces in strip order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().copied()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Length of the emitted vertex sequence, including a parity fix.
    pub fn emitted_len(&self) -> usize {
        let n = self.verts.len();
        if self.prepended % 2 == 1 && n % 2 == 0 {
            n + 1
        } else {
            n
        }
    }

    /// Extend `end` by up to `limit` faces. A face is taken only if it is
    /// linked across the current end edge and neither consumed in `mesh`
    /// nor already claimed. Returns the number of faces added.
    pub(crate) fn grow(&mut self, mesh: &Mesh, claims: &mut Claims, end: End, limit: usize) -> usize {
        let mut added = 0;
        while added < limit {
            let Some((next, vertex)) = self.step(mesh, claims, end) else {
                break;
            };
            claims.claim(next);
            match end {
                End::Back => {
                    self.verts.push_back(vertex);
                    self.faces.push_back(next);
                }
                End::Front => {
                    self.verts.push_front(vertex);
                    self.faces.push_front(next);
                    self.prepended += 1;
                }
            }
            added += 1;
        }
        added
    }

    /// The face across the edge at `end` and the vertex it contributes.
    fn step(&self, mesh: &Mesh, claims: &Claims, end: End) -> Option<(FaceId, Vertex)> {
        let n = self.verts.len();
        let (face, a, b) = match end {
            End::Back => (*self.faces.back()?, self.verts[n - 2], self.verts[n - 1]),
            End::Front => (*self.faces.front()?, self.verts[0], self.verts[1]),
        };
        let slot = edge_slot(&mesh.verts(face), a, b)?;
        let link = mesh.link(face, slot)?;
        if mesh.is_consumed(link.face) || claims.is_claimed(link.face) {
            return None;
        }
        let vertex = mesh.verts(link.face)[(link.slot as usize + 2) % 3];
        Some((link.face, vertex))
    }

    /// Vertex sequence with the winding parity repaired.
    pub fn vertices(&self) -> Vec<Vertex> {
        let n = self.verts.len();
        if self.prepended % 2 == 0 {
            self.verts.iter().copied().collect()
        } else if n % 2 == 1 {
            self.verts.iter().rev().copied().collect()
        } else {
            let mut out = Vec::with_capacity(n + 1);
            out.push(self.verts[0]);
            out.extend(self.verts.iter().copied());
            out
        }
    }

    /// Commit every face to `mesh` and emit the final vertex sequence.
    pub fn close(self, mesh: &mut Mesh) -> Vec<Vertex> {
        for &f in &self.faces {
            mesh.mark_consumed(f);
        }
        self.vertices()
    }
}

/// Slot of the edge `{a, b}` (either direction) in `t`.
fn edge_slot(t: &[Vertex; 3], a: Vertex, b: Vertex) -> Option<usize> {
    (0..3).find(|&s| {
        let (x, y) = (t[s], t[(s + 1) % 3]);
        (x == a && y == b) || (x == b && y == a)
    })
}
