use super::*;
use crate::decode::{check_strips, triangulate};
use crate::gen::{grid, shuffled, soup};
use crate::triangle::same_triangle;
use proptest::prelude::*;

fn assert_covers(tris: &[Triangle], strips: &[Vec<Vertex>]) {
    if let Err(e) = check_strips(tris, strips) {
        panic!("{e}\ntriangles = {tris:?}\nstrips = {strips:?}");
    }
}

#[test]
fn empty_input_gives_no_strips() {
    assert!(stripify(&[]).is_empty());
}

#[test]
fn opposite_windings_are_distinct_faces() {
    let tris = [[0, 1, 2], [2, 1, 0]];
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    let decoded = triangulate(&strips);
    assert_eq!(decoded.len(), 2);
    assert!(decoded.iter().any(|t| same_triangle(t, &[0, 1, 2])));
    assert!(decoded.iter().any(|t| same_triangle(t, &[2, 1, 0])));
}

#[test]
fn ambiguous_shared_edge_keeps_all_three() {
    let tris = [[0, 1, 2], [2, 1, 0], [1, 2, 3]];
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    assert_eq!(triangulate(&strips).len(), 3);
}

#[test]
fn same_direction_shared_edge_keeps_both() {
    let tris = [[0, 1, 2], [0, 1, 3]];
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    assert_eq!(strips.len(), 2);
}

#[test]
fn isolated_triangles_become_single_strips() {
    let tris: Vec<Triangle> = (0..8).map(|i| [3 * i, 3 * i + 1, 3 * i + 2]).collect();
    let strips = stripify(&tris);
    assert_eq!(strips.len(), tris.len());
    assert!(strips.iter().all(|s| s.len() == 3));
    assert_covers(&tris, &strips);
    // all seeds tie at zero neighbors, so input order is kept
    assert_eq!(strips[0], vec![0, 1, 2]);
    assert_eq!(strips[7], vec![21, 22, 23]);
}

#[test]
fn duplicate_triangles_both_appear() {
    let tris = [[0, 1, 2], [0, 1, 2]];
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    assert_eq!(triangulate(&strips).len(), 2);
}

#[test]
fn regression_inputs() {
    let cases: Vec<Vec<Triangle>> = vec![
        vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]],
        vec![
            [1, 5, 2], [5, 2, 6], [5, 9, 6], [9, 6, 10], [9, 13, 10], [13, 10, 14],
            [0, 4, 1], [4, 1, 5], [4, 8, 5], [8, 5, 9], [8, 12, 9], [12, 9, 13],
            [2, 6, 3], [6, 3, 7], [6, 10, 7], [10, 7, 11], [10, 14, 11], [14, 11, 15],
        ],
        vec![
            [1, 2, 3], [4, 5, 6], [6, 5, 7], [8, 5, 9], [4, 10, 9], [8, 3, 11],
            [8, 10, 3], [12, 13, 6], [14, 2, 15], [16, 13, 15], [16, 2, 3], [3, 2, 1],
        ],
    ];
    for tris in cases {
        let strips = stripify(&tris);
        assert_covers(&tris, &strips);
    }
}

#[test]
fn degenerate_policy() {
    let tris = [[0, 0, 1], [2, 3, 3], [4, 5, 6]];
    let discard = stripify(&tris);
    assert_eq!(discard, vec![vec![4, 5, 6]]);

    let cfg = StripifyCfg {
        degenerate: DegeneratePolicy::Keep,
        ..StripifyCfg::default()
    };
    let keep = stripify_with(&tris, cfg);
    assert_eq!(keep, vec![vec![4, 5, 6], vec![0, 0, 1], vec![2, 3, 3]]);
    assert_covers(&tris, &keep);

    let all_degenerate = [[1, 1, 1], [2, 2, 3]];
    assert!(stripify(&all_degenerate).is_empty());
    assert_eq!(stripify_with(&all_degenerate, cfg).len(), 2);
}

#[test]
fn grid_needs_few_strips() {
    let tris = grid(8, 8);
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    assert!(
        strips.len() * 4 <= tris.len(),
        "{} strips for {} triangles",
        strips.len(),
        tris.len()
    );
    let indices: usize = strips.iter().map(Vec::len).sum();
    assert!(indices < 3 * tris.len());
}

#[test]
fn single_row_is_one_strip() {
    let tris = grid(6, 1);
    let strips = stripify(&tris);
    assert_covers(&tris, &strips);
    assert_eq!(strips.len(), 1);
}

#[test]
fn output_is_deterministic() {
    let tris = soup(400, 40, 3);
    assert_eq!(stripify(&tris), stripify(&tris));
}

#[test]
fn first_seed_has_fewest_neighbors() {
    let tris = shuffled(&grid(5, 5), 11);
    let mut mesh = Mesh::new(&tris);
    let min = (0..mesh.len())
        .map(|i| mesh.unconsumed_neighbor_count(FaceId(i)))
        .min()
        .unwrap();
    let seed = mesh.next_unconsumed_seed().unwrap();
    assert_eq!(mesh.unconsumed_neighbor_count(seed), min);

    let cfg = StripifyCfg {
        merge: false,
        ..StripifyCfg::default()
    };
    let stripifier = Stripifier::new(mesh, cfg);
    assert_eq!(stripifier.mesh().remaining(), tris.len());
    let (strips, mesh) = stripifier.run();
    assert_covers(&tris, &strips);
    let first = triangulate(&strips[..1]);
    assert!(first.iter().any(|t| same_triangle(t, &tris[seed.0])));
    assert_eq!(mesh.remaining(), 0);
    assert!((0..mesh.len()).all(|i| mesh.is_consumed(FaceId(i))));
}

#[test]
fn reversed_twins_are_stripped_first() {
    let tris = [
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4],
        [10, 11, 12],
        [12, 11, 10],
    ];
    let cfg = StripifyCfg {
        merge: false,
        ..StripifyCfg::default()
    };
    let strips = stripify_with(&tris, cfg);
    assert_covers(&tris, &strips);
    let first = triangulate(&strips[..1]);
    assert_eq!(first.len(), 2);
    assert!(first.iter().any(|t| same_triangle(t, &[10, 11, 12])));
    assert!(first.iter().any(|t| same_triangle(t, &[12, 11, 10])));
}

#[test]
fn keep_policy_returns_degenerates_once() {
    let tris = [[0, 1, 2], [3, 3, 4]];
    let cfg = StripifyCfg {
        degenerate: DegeneratePolicy::Keep,
        ..StripifyCfg::default()
    };
    let (strips, mesh) = Stripifier::new(Mesh::new(&tris), cfg).run();
    assert_eq!(strips, vec![vec![0, 1, 2], vec![3, 3, 4]]);
    assert_eq!(mesh.degenerate_faces().count(), 1);
}

#[test]
fn lookahead_zero_and_no_merge_still_cover() {
    let tris = soup(300, 25, 5);
    for lookahead in [0, 1, 8] {
        for merge in [false, true] {
            let cfg = StripifyCfg {
                lookahead,
                merge,
                ..StripifyCfg::default()
            };
            assert_covers(&tris, &stripify_with(&tris, cfg));
        }
    }
}

#[test]
fn stitched_output_covers_input() {
    let tris = shuffled(&grid(6, 4), 2);
    let stitched = crate::stitch::stitch_strips(&stripify(&tris));
    assert_covers(&tris, &[stitched]);
}

fn triangles(max_vertex: usize, max_len: usize) -> impl Strategy<Value = Vec<Triangle>> {
    prop::collection::vec(
        (0..max_vertex, 0..max_vertex, 0..max_vertex).prop_map(|(a, b, c)| [a, b, c]),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn prop_soup_coverage(tris in triangles(12, 80)) {
        let strips = stripify(&tris);
        prop_assert!(check_strips(&tris, &strips).is_ok());
        prop_assert!(strips.iter().all(|s| s.len() >= 3));
    }

    #[test]
    fn prop_restripify_still_covers(tris in triangles(10, 60)) {
        let decoded = triangulate(&stripify(&tris));
        let again = stripify(&decoded);
        prop_assert!(check_strips(&decoded, &again).is_ok());
        prop_assert!(check_strips(&tris, &again).is_ok());
    }

    #[test]
    fn prop_shuffled_grid_coverage(cols in 1usize..8, rows in 1usize..8, seed in any::<u64>()) {
        let tris = shuffled(&grid(cols, rows), seed);
        let strips = stripify(&tris);
        prop_assert!(check_strips(&tris, &strips).is_ok());
        prop_assert!(strips.len() <= tris.len());
    }

    #[test]
    fn prop_stitch_preserves_faces(tris in triangles(10, 50)) {
        let stitched = crate::stitch::stitch_strips(&stripify(&tris));
        prop_assert!(check_strips(&tris, &[stitched]).is_ok());
    }
}
