//! Strip cover of the triangle adjacency graph.
//!
//! Purpose
//! - Repeatedly seed a strip at the unconsumed face with the fewest
//!   unconsumed neighbors, choose how to grow it by a bounded lookahead over
//!   the seed's candidate starts, grow the winner to completion and commit
//!   it, until every non-degenerate face sits in exactly one strip.
//! - Optionally merge strips whose ends overlap exactly, then apply the
//!   degenerate-face policy.
//!
//! Determinism
//! - Seeds come from `Mesh::next_unconsumed_seed` (count, input index);
//!   candidate starts are ranked by (captured faces, candidate rank); the
//!   merge pass scans strips in output order. No decision depends on hash
//!   iteration order, so equal inputs give equal outputs.

mod merge;
mod select;

use crate::mesh::{FaceId, Mesh};
use crate::strip::{Claims, Strip};
use crate::triangle::{Triangle, Vertex};

pub use merge::merge_strips;
pub use select::{Candidate, Order};

/// What happens to degenerate input triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Leave them out of the output.
    #[default]
    Discard,
    /// Emit each verbatim as its own length-3 strip after the regular
    /// strips, in input order. They decode to nothing.
    Keep,
}

/// Stripification configuration.
#[derive(Clone, Copy, Debug)]
pub struct StripifyCfg {
    /// Faces simulated per growth direction when scoring seed candidates.
    /// Zero takes the first candidate without simulation.
    pub lookahead: usize,
    /// Concatenate strips whose ends overlap exactly.
    pub merge: bool,
    pub degenerate: DegeneratePolicy,
}

impl Default for StripifyCfg {
    fn default() -> Self {
        Self {
            lookahead: 8,
            merge: true,
            degenerate: DegeneratePolicy::Discard,
        }
    }
}

/// Stripify with the default configuration.
pub fn stripify(triangles: &[Triangle]) -> Vec<Vec<Vertex>> {
    stripify_with(triangles, StripifyCfg::default())
}

/// Stripify with an explicit configuration.
pub fn stripify_with(triangles: &[Triangle], cfg: StripifyCfg) -> Vec<Vec<Vertex>> {
    Stripifier::new(Mesh::new(triangles), cfg).run().0
}

/// One stripification run over an owned mesh. `run` consumes the
/// stripifier; the fully consumed mesh comes back with the strips.
pub struct Stripifier {
    mesh: Mesh,
    cfg: StripifyCfg,
    claims: Claims,
}

impl Stripifier {
    pub fn new(mesh: Mesh, cfg: StripifyCfg) -> Self {
        let claims = Claims::new(mesh.len());
        Self { mesh, cfg, claims }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consume every face and return the strips with the spent mesh.
    pub fn run(mut self) -> (Vec<Vec<Vertex>>, Mesh) {
        let mut strips = Vec::new();
        while let Some(seed) = self.mesh.next_unconsumed_seed() {
            let strip = self.build_from(seed);
            tracing::debug!(
                seed = seed.0,
                faces = strip.face_count(),
                len = strip.emitted_len(),
                "strip committed"
            );
            strips.push(strip.close(&mut self.mesh));
        }
        let grown = strips.len();
        if self.cfg.merge {
            strips = merge_strips(strips);
        }
        if self.cfg.degenerate == DegeneratePolicy::Keep {
            let mesh = &self.mesh;
            strips.extend(mesh.degenerate_faces().map(|f| mesh.verts(f).to_vec()));
        }
        tracing::debug!(
            faces = self.mesh.len(),
            grown,
            strips = strips.len(),
            "stripify done"
        );
        (strips, self.mesh)
    }

    /// Pick the best start at `seed` and grow it to completion.
    fn build_from(&mut self, seed: FaceId) -> Strip {
        let cand = select::best_candidate(&self.mesh, &mut self.claims, seed, self.cfg.lookahead);
        self.claims.begin();
        self.claims.claim(seed);
        let mut strip = Strip::new(&self.mesh, seed, cand.slot);
        let first = cand.order.first();
        strip.grow(&self.mesh, &mut self.claims, first, usize::MAX);
        strip.grow(&self.mesh, &mut self.claims, first.other(), usize::MAX);
        strip
    }
}

#[cfg(test)]
mod tests;
