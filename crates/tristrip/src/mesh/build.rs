//! Mesh construction: edge table and deterministic neighbor pairing.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::triangle::{edge, is_degenerate, Triangle, Vertex};

use super::types::{Face, FaceId, Link, Mesh, SeedHeap};

type EdgeKey = (Vertex, Vertex);
type EdgeTable = HashMap<EdgeKey, Vec<(FaceId, u8)>>;

impl Mesh {
    /// Build the face arena and adjacency for `triangles`.
    pub fn new(triangles: &[Triangle]) -> Self {
        let mut faces: Vec<Face> = triangles
            .iter()
            .map(|t| Face {
                verts: *t,
                degenerate: is_degenerate(t),
                links: [None; 3],
            })
            .collect();

        // Directed edge -> faces using it, in input order.
        let mut table: EdgeTable = HashMap::new();
        for (i, face) in faces.iter().enumerate() {
            if face.degenerate {
                continue;
            }
            for slot in 0..3u8 {
                table
                    .entry(edge(&face.verts, slot as usize))
                    .or_default()
                    .push((FaceId(i), slot));
            }
        }

        // Each undirected edge is handled once (from its `a < b` side). The
        // pairing only depends on the per-edge lists, so the table's
        // iteration order does not leak into the result.
        for (&(a, b), forward) in table.iter() {
            if a > b {
                continue;
            }
            let Some(backward) = table.get(&(b, a)) else {
                continue;
            };
            for (&(fa, sa), &(fb, sb)) in forward.iter().zip(backward.iter()) {
                faces[fa.0].links[sa as usize] = Some(Link { face: fb, slot: sb });
                faces[fb.0].links[sb as usize] = Some(Link { face: fa, slot: sa });
            }
        }

        let consumed = vec![false; faces.len()];
        let remaining = faces.iter().filter(|f| !f.degenerate).count();
        let mut mesh = Mesh {
            faces,
            consumed,
            remaining,
            seeds: SeedHeap::new(),
        };
        for i in 0..mesh.faces.len() {
            if !mesh.faces[i].degenerate {
                let count = mesh.unconsumed_neighbor_count(FaceId(i));
                mesh.seeds.push(Reverse((count, i)));
            }
        }
        tracing::trace!(
            faces = mesh.faces.len(),
            live = mesh.remaining,
            edges = table.len(),
            "mesh built"
        );
        mesh
    }
}
