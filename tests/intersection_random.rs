use list_algos::{intersection_node, ListArena, ListBuilder, NodeId};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn converging(
    arena: &mut ListArena<u32>,
    prefix_a: usize,
    prefix_b: usize,
    shared_len: usize,
) -> (Option<NodeId>, Option<NodeId>, Option<NodeId>) {
    // Every node carries the same value so only identity can find the meeting point.
    let shared = arena.push_list(std::iter::repeat(1).take(shared_len));
    let a = ListBuilder::new(&mut *arena)
        .with_values(std::iter::repeat(1).take(prefix_a))
        .with_tail(shared)
        .build();
    let b = ListBuilder::new(&mut *arena)
        .with_values(std::iter::repeat(1).take(prefix_b))
        .with_tail(shared)
        .build();
    (a, b, shared)
}

#[test]
fn defining_scenario() {
    let mut arena = ListArena::new();
    let eight = arena.push_list([8, 4, 5]);
    let a = ListBuilder::new(&mut arena).with_values([4, 1]).with_tail(eight).build();
    let b = ListBuilder::new(&mut arena).with_values([5, 0, 1]).with_tail(eight).build();
    let meet = intersection_node(&arena, a, b).expect("lists share a tail");
    assert!(arena.same_node(meet, eight.unwrap()));
    assert_eq!(*arena.value(meet), 8);
}

#[test]
fn seeded_random_shapes() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut arena = ListArena::new();
        let prefix_a = rng.gen_range(0..12);
        let prefix_b = rng.gen_range(0..12);
        let shared_len = rng.gen_range(0..6);
        let (a, b, shared) = converging(&mut arena, prefix_a, prefix_b, shared_len);
        assert_eq!(intersection_node(&arena, a, b), shared);
        assert_eq!(intersection_node(&arena, b, a), shared);
    }
}

proptest! {
    #[test]
    fn finds_shared_node_for_any_prefixes(pa in 0usize..20, pb in 0usize..20, shared_len in 1usize..10) {
        let mut arena = ListArena::new();
        let (a, b, shared) = converging(&mut arena, pa, pb, shared_len);
        prop_assert_eq!(intersection_node(&arena, a, b), shared);
    }

    #[test]
    fn disjoint_lists_never_meet(
        a in prop::collection::vec(0u32..3, 1usize..15),
        b in prop::collection::vec(0u32..3, 1usize..15)
    ) {
        let mut arena = ListArena::new();
        let x = arena.push_list(a);
        let y = arena.push_list(b);
        prop_assert_eq!(intersection_node(&arena, x, y), None);
    }
}
