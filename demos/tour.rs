//! Example: every list algorithm on small hand-built lists.
//!
//! Run with:
//! `cargo run --example tour`

use list_algos::{
    alternate_high_low, intersection_node, is_palindrome, is_palindrome_preserving, ListArena,
    ListBuilder,
};

fn main() {
    let mut arena = ListArena::new();

    let racecar = arena.push_list("racecar".chars());
    println!(
        "racecar palindrome (preserving): {}",
        is_palindrome_preserving(&mut arena, racecar)
    );
    println!("racecar still intact: {}", arena.to_vec(racecar).iter().collect::<String>());
    println!("racecar palindrome (destructive): {}", is_palindrome(&mut arena, racecar));
    println!("front part afterwards: {}", arena.to_vec(racecar).iter().collect::<String>());

    let mut numbers = ListArena::new();
    let head = numbers.push_list([1, 2, 3, 4, 5, 6, 7]);
    let head = alternate_high_low(&mut numbers, head);
    println!("zig-zag: {:?}", numbers.to_vec(head));

    // 4 -> 1 \
    //         8 -> 4 -> 5
    // 5 -> 0 -> 1 /
    let shared = numbers.push_list([8, 4, 5]);
    let a = ListBuilder::new(&mut numbers)
        .with_values([4, 1])
        .with_tail(shared)
        .build();
    let b = ListBuilder::new(&mut numbers)
        .with_values([5, 0, 1])
        .with_tail(shared)
        .build();
    match intersection_node(&numbers, a, b) {
        Some(node) => println!("lists meet at node {node} holding {}", numbers.value(node)),
        None => println!("lists never meet"),
    }
}
