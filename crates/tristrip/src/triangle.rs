//! Vertex indices and winding-ordered triangles.
//!
//! A triangle is an ordered triple; rotations are the same face, reflections
//! are the opposite-facing face. No positions are involved anywhere in the
//! crate, only index topology.

/// Opaque vertex index. Indices need not be contiguous or start at zero.
pub type Vertex = usize;

/// Winding-ordered vertex triple.
pub type Triangle = [Vertex; 3];

/// True if any two indices coincide (the face has no facing).
#[inline]
pub fn is_degenerate(t: &Triangle) -> bool {
    t[0] == t[1] || t[1] == t[2] || t[2] == t[0]
}

/// Rotate so that the smallest index leads. Two triangles are the same face
/// iff their canonical forms are equal.
pub fn canonical(t: &Triangle) -> Triangle {
    let lead = if t[0] <= t[1] && t[0] <= t[2] {
        0
    } else if t[1] <= t[2] {
        1
    } else {
        2
    };
    [t[lead], t[(lead + 1) % 3], t[(lead + 2) % 3]]
}

/// Equality up to cyclic rotation; `(a,b,c)` vs `(c,b,a)` is false.
#[inline]
pub fn same_triangle(a: &Triangle, b: &Triangle) -> bool {
    canonical(a) == canonical(b)
}

/// Vertex following `v` in winding order, if `v` is a corner of `t`.
pub fn next_vertex(t: &Triangle, v: Vertex) -> Option<Vertex> {
    t.iter().position(|&x| x == v).map(|i| t[(i + 1) % 3])
}

/// The corner of `t` that is neither `a` nor `b`.
pub fn other_vertex(t: &Triangle, a: Vertex, b: Vertex) -> Option<Vertex> {
    if a == b {
        return None;
    }
    let mut rest = t.iter().copied().filter(|&x| x != a && x != b);
    let third = rest.next()?;
    // `a` and `b` must both be corners for the third one to be unique.
    if rest.next().is_some() {
        return None;
    }
    Some(third)
}

/// Directed edge `slot` of `t`: `(t[slot], t[slot + 1])`.
#[inline]
pub(crate) fn edge(t: &Triangle, slot: usize) -> (Vertex, Vertex) {
    (t[slot], t[(slot + 1) % 3])
}

/// Rotation of `t` that starts at `slot`.
#[inline]
pub(crate) fn rotated(t: &Triangle, slot: usize) -> Triangle {
    [t[slot], t[(slot + 1) % 3], t[(slot + 2) % 3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_the_same_face() {
        let t = [4, 9, 2];
        assert!(same_triangle(&t, &[9, 2, 4]));
        assert!(same_triangle(&t, &[2, 4, 9]));
        assert!(!same_triangle(&t, &[2, 9, 4]));
        assert_eq!(canonical(&t), [2, 4, 9]);
    }

    #[test]
    fn degenerate_detection() {
        assert!(is_degenerate(&[1, 1, 2]));
        assert!(is_degenerate(&[1, 2, 1]));
        assert!(is_degenerate(&[3, 3, 3]));
        assert!(!is_degenerate(&[0, 1, 2]));
        // canonical form is still well-defined
        assert_eq!(canonical(&[5, 2, 2]), [2, 2, 5]);
    }

    #[test]
    fn vertex_walks() {
        let t = [0, 1, 2];
        assert_eq!(next_vertex(&t, 2), Some(0));
        assert_eq!(next_vertex(&t, 7), None);
        assert_eq!(other_vertex(&t, 2, 0), Some(1));
        assert_eq!(other_vertex(&t, 0, 0), None);
        assert_eq!(other_vertex(&t, 0, 5), None);
        assert_eq!(edge(&t, 2), (2, 0));
        assert_eq!(rotated(&t, 1), [1, 2, 0]);
    }
}
