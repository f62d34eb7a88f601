//! Merge pass: concatenate strips whose ends overlap exactly.
//!
//! Strip `a` absorbs strip `b` when the last two indices of `a` are the first
//! two of `b` and `a` has even length. Then `a ++ b[2..]` decodes to the
//! triangles of `a` followed by those of `b`, each at a position of the same
//! parity as before, so no winding changes and no triangle is added.
//! Even-length strips may also be used reversed, since reversing an
//! even-length strip keeps every triangle's winding.

use std::collections::HashMap;

use crate::triangle::Vertex;

type Pair = (Vertex, Vertex);
type Ends = HashMap<Pair, Vec<(usize, bool)>>;

/// Merge strips greedily in output order; the lowest-index partner wins.
///
/// Each strip in turn is extended at its tail by unused strips starting
/// with its last two indices, then at its head by unused even-length strips
/// ending with its first two.
pub fn merge_strips(strips: Vec<Vec<Vertex>>) -> Vec<Vec<Vertex>> {
    // Pair -> (strip index, reversed), in ascending strip order.
    let mut heads: Ends = HashMap::new();
    let mut tails: Ends = HashMap::new();
    for (i, s) in strips.iter().enumerate() {
        let n = s.len();
        if n < 3 {
            continue;
        }
        heads.entry((s[0], s[1])).or_default().push((i, false));
        if n % 2 == 0 {
            heads.entry((s[n - 1], s[n - 2])).or_default().push((i, true));
            tails.entry((s[n - 2], s[n - 1])).or_default().push((i, false));
            tails.entry((s[1], s[0])).or_default().push((i, true));
        }
    }

    let mut used = vec![false; strips.len()];
    let mut out = Vec::with_capacity(strips.len());
    for i in 0..strips.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut acc = strips[i].clone();
        if acc.len() < 3 {
            out.push(acc);
            continue;
        }
        while acc.len() % 2 == 0 {
            let key = (acc[acc.len() - 2], acc[acc.len() - 1]);
            let Some((j, reversed)) = take(&heads, &key, &mut used) else {
                break;
            };
            let next = oriented(&strips[j], reversed);
            acc.extend_from_slice(&next[2..]);
            tracing::trace!(into = i, from = j, reversed, "strip appended");
        }
        loop {
            let key = (acc[0], acc[1]);
            let Some((j, reversed)) = take(&tails, &key, &mut used) else {
                break;
            };
            let mut prev = oriented(&strips[j], reversed);
            prev.extend_from_slice(&acc[2..]);
            acc = prev;
            tracing::trace!(into = i, from = j, reversed, "strip prepended");
        }
        out.push(acc);
    }
    out
}

/// Lowest unused strip registered under `key`, marked used.
fn take(ends: &Ends, key: &Pair, used: &mut [bool]) -> Option<(usize, bool)> {
    let found = ends
        .get(key)
        .and_then(|c| c.iter().find(|(j, _)| !used[*j]).copied())?;
    used[found.0] = true;
    Some(found)
}

fn oriented(s: &[Vertex], reversed: bool) -> Vec<Vertex> {
    if reversed {
        s.iter().rev().copied().collect()
    } else {
        s.to_vec()
    }
}
