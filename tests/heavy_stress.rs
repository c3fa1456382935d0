#![cfg(feature = "heavy")]
use list_algos::{
    add_two_numbers, alternate_high_low, intersection_node, is_alternating, is_palindrome,
    ListArena, ListBuilder,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const LEN: usize = 2_000_000;

#[test]
fn heavy_palindrome_and_zigzag() {
    let mut rng = StdRng::seed_from_u64(123);
    let half: Vec<u16> = (0..LEN / 2).map(|_| rng.gen()).collect();
    let mut arena = ListArena::with_capacity(LEN);
    let head = arena.push_list(half.iter().chain(half.iter().rev()).copied());
    assert!(is_palindrome(&mut arena, head));

    let values: Vec<i64> = (0..LEN).map(|_| rng.gen_range(-1_000..1_000)).collect();
    let mut arena = ListArena::with_capacity(LEN);
    let head = arena.push_list(values);
    let head = alternate_high_low(&mut arena, head);
    assert!(is_alternating(&arena.to_vec(head)));
}

#[test]
fn heavy_addition_and_intersection() {
    let mut arena = ListArena::with_capacity(3 * LEN);
    let a = arena.push_list(std::iter::repeat(9u8).take(LEN));
    let b = arena.push_list([1u8]);
    let sum = add_two_numbers(&mut arena, a, b);
    assert_eq!(arena.list_len(sum), LEN + 1);
    assert_eq!(arena.last(sum).map(|id| *arena.value(id)), Some(1));

    let mut arena = ListArena::with_capacity(LEN);
    let shared = arena.push_list(0..LEN as u64 / 2);
    let x = ListBuilder::new(&mut arena).with_values(0..7).with_tail(shared).build();
    let y = ListBuilder::new(&mut arena)
        .with_values(0..LEN as u64 / 4)
        .with_tail(shared)
        .build();
    assert_eq!(intersection_node(&arena, x, y), shared);
}
