//! Seed candidates and their bounded-lookahead scoring.
//!
//! A seed can start a strip in three rotations (which edge the strip leaves
//! through first) and grow back-then-front or front-then-back. The two
//! orders differ when the ends of a strip would compete for the same faces.
//! Each candidate is simulated for at most `lookahead` faces per direction;
//! the one capturing the most faces wins, lower rank on ties.

use std::cmp::Ordering;

use crate::mesh::{FaceId, Mesh};
use crate::strip::{Claims, End, Strip};

/// Which end grows first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    BackFirst,
    FrontFirst,
}

impl Order {
    #[inline]
    pub fn first(self) -> End {
        match self {
            Order::BackFirst => End::Back,
            Order::FrontFirst => End::Front,
        }
    }
}

/// A way to start a strip at a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub slot: usize,
    pub order: Order,
}

impl Candidate {
    /// All starts in rank order.
    pub const ALL: [Candidate; 6] = [
        Candidate { slot: 0, order: Order::BackFirst },
        Candidate { slot: 0, order: Order::FrontFirst },
        Candidate { slot: 1, order: Order::BackFirst },
        Candidate { slot: 1, order: Order::FrontFirst },
        Candidate { slot: 2, order: Order::BackFirst },
        Candidate { slot: 2, order: Order::FrontFirst },
    ];
}

/// Simulated outcome of one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Score {
    captured: usize,
    /// Emitted length per captured face is better when smaller; a parity
    /// fix costs one index.
    emitted: usize,
    rank: usize,
}

impl Score {
    /// Total order: more faces, then shorter output, then lower rank.
    fn cmp_better(&self, other: &Score) -> Ordering {
        other
            .captured
            .cmp(&self.captured)
            .then(self.emitted.cmp(&other.emitted))
            .then(self.rank.cmp(&other.rank))
    }
}

/// Best start at `seed` under `lookahead` faces per direction.
pub(crate) fn best_candidate(
    mesh: &Mesh,
    claims: &mut Claims,
    seed: FaceId,
    lookahead: usize,
) -> Candidate {
    if lookahead == 0 {
        return Candidate::ALL[0];
    }
    let mut best: Option<Score> = None;
    for (rank, cand) in Candidate::ALL.iter().enumerate() {
        let score = simulate(mesh, claims, seed, *cand, lookahead, rank);
        tracing::trace!(
            seed = seed.0,
            rank,
            captured = score.captured,
            emitted = score.emitted,
            "candidate"
        );
        if best.map_or(true, |b| score.cmp_better(&b) == Ordering::Less) {
            best = Some(score);
        }
    }
    best.map_or(Candidate::ALL[0], |b| Candidate::ALL[b.rank])
}

fn simulate(
    mesh: &Mesh,
    claims: &mut Claims,
    seed: FaceId,
    cand: Candidate,
    lookahead: usize,
    rank: usize,
) -> Score {
    claims.begin();
    claims.claim(seed);
    let mut strip = Strip::new(mesh, seed, cand.slot);
    let first = cand.order.first();
    strip.grow(mesh, claims, first, lookahead);
    strip.grow(mesh, claims, first.other(), lookahead);
    Score {
        captured: strip.face_count(),
        emitted: strip.emitted_len(),
        rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_seed_takes_first_candidate() {
        let mesh = Mesh::new(&[[0, 1, 2]]);
        let mut claims = Claims::new(mesh.len());
        let c = best_candidate(&mesh, &mut claims, FaceId(0), 8);
        assert_eq!(c, Candidate::ALL[0]);
    }

    #[test]
    fn picks_the_start_that_captures_the_chain() {
        // One grid row; face 0 is at the left end, so only the rotations
        // that leave through its diagonal reach the whole row.
        let tris = crate::gen::grid(3, 1);
        let mesh = Mesh::new(&tris);
        let mut claims = Claims::new(mesh.len());
        let c = best_candidate(&mesh, &mut claims, FaceId(0), 16);
        let mut strip = Strip::new(&mesh, FaceId(0), c.slot);
        claims.begin();
        claims.claim(FaceId(0));
        strip.grow(&mesh, &mut claims, c.order.first(), usize::MAX);
        strip.grow(&mesh, &mut claims, c.order.first().other(), usize::MAX);
        assert_eq!(strip.face_count(), tris.len());
    }

    #[test]
    fn score_order_is_total() {
        let a = Score { captured: 3, emitted: 5, rank: 4 };
        let b = Score { captured: 3, emitted: 6, rank: 0 };
        let c = Score { captured: 2, emitted: 4, rank: 0 };
        assert_eq!(a.cmp_better(&b), Ordering::Less);
        assert_eq!(a.cmp_better(&c), Ordering::Less);
        assert_eq!(b.cmp_better(&c), Ordering::Less);
        assert_eq!(a.cmp_better(&a), Ordering::Equal);
    }
}
