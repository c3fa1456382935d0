//! Example: adding arbitrarily long numbers stored as reversed digit lists.
//!
//! Run with:
//! `cargo run --example add_numbers -- 99999999999999999999 1`

use std::env;

use list_algos::{try_add_two_numbers, ListArena, NodeId};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (x, y) = match args.as_slice() {
        [x, y] => (x.as_str(), y.as_str()),
        _ => ("342", "465"),
    };

    let mut arena = ListArena::new();
    let a = push_decimal(&mut arena, x);
    let b = push_decimal(&mut arena, y);

    match try_add_two_numbers(&mut arena, a, b) {
        Ok(sum) => {
            let digits: String = arena
                .to_vec(sum)
                .iter()
                .rev()
                .map(|d| char::from(b'0' + d))
                .collect();
            println!("{x} + {y} = {digits}");
        }
        Err(err) => eprintln!("cannot add: {err}"),
    }
}

/// Store a decimal string least significant digit first. Non-digit
/// characters become out-of-range values so the checked addition rejects them.
fn push_decimal(arena: &mut ListArena<u8>, text: &str) -> Option<NodeId> {
    arena.push_list(text.bytes().rev().map(|b| b.wrapping_sub(b'0')))
}
