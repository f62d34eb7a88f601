//! Adjacency lookups, consumption flags and seed selection.

use std::cmp::Reverse;

use crate::triangle::Triangle;

use super::types::{Face, FaceId, Link, Mesh};

impl Mesh {
    /// Number of input triangles (degenerate ones included).
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    #[inline]
    pub fn verts(&self, id: FaceId) -> Triangle {
        self.faces[id.0].verts
    }

    /// Degenerate faces in input order.
    pub fn degenerate_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.degenerate)
            .map(|(i, _)| FaceId(i))
    }

    /// Neighbor across edge `slot` of `id`, ignoring consumption.
    #[inline]
    pub fn neighbor_of(&self, id: FaceId, slot: usize) -> Option<FaceId> {
        self.link(id, slot).map(|l| l.face)
    }

    #[inline]
    pub(crate) fn link(&self, id: FaceId, slot: usize) -> Option<Link> {
        self.faces[id.0].links[slot]
    }

    /// Distinct linked faces not yet consumed. A reversed twin is linked
    /// across all three slots but counts once.
    pub fn unconsumed_neighbor_count(&self, id: FaceId) -> u8 {
        let links = &self.faces[id.0].links;
        let mut count = 0;
        for (k, link) in links.iter().enumerate() {
            let Some(l) = link else {
                continue;
            };
            if self.consumed[l.face.0] || links[..k].iter().flatten().any(|p| p.face == l.face) {
                continue;
            }
            count += 1;
        }
        count
    }

    #[inline]
    pub fn is_consumed(&self, id: FaceId) -> bool {
        self.consumed[id.0]
    }

    /// Non-degenerate faces still waiting for a strip.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Commit `id` to a strip. Returns false (and changes nothing) if it was
    /// already consumed or is degenerate.
    pub fn mark_consumed(&mut self, id: FaceId) -> bool {
        if self.consumed[id.0] || self.faces[id.0].degenerate {
            return false;
        }
        self.consumed[id.0] = true;
        self.remaining -= 1;
        // Neighbors just lost a live neighbor; requeue them at their new count.
        for slot in 0..3 {
            if let Some(l) = self.faces[id.0].links[slot] {
                if !self.consumed[l.face.0] {
                    let count = self.unconsumed_neighbor_count(l.face);
                    self.seeds.push(Reverse((count, l.face.0)));
                }
            }
        }
        true
    }

    /// Unconsumed face with the fewest unconsumed neighbors, lowest input
    /// index on ties. `None` once every non-degenerate face is consumed.
    pub fn next_unconsumed_seed(&mut self) -> Option<FaceId> {
        while let Some(&Reverse((count, i))) = self.seeds.peek() {
            if self.consumed[i] || count != self.unconsumed_neighbor_count(FaceId(i)) {
                self.seeds.pop();
                continue;
            }
            return Some(FaceId(i));
        }
        None
    }
}
