//! Constant-space algorithms over singly-linked lists.
//!
//! This crate provides four independent pointer-manipulation algorithms
//! that share one node abstraction:
//!
//! - palindrome detection via slow/fast midpoint and in-place tail reversal,
//! - addition of two numbers stored as reversed digit lists,
//! - alternating low/high rearrangement by relinking adjacent nodes,
//! - detection of the first node two lists share.
//!
//! ## Node model
//! Nodes live in a [`ListArena`] and are addressed by [`NodeId`] handles.
//! The arena is the single owner of every node; a list is a head handle plus
//! the `next` chain behind it. Relinking moves handles between slots, which
//! keeps reversal and swaps O(1) in extra space and lets lists share tails.
//! [`NodeId`] equality (or [`ListArena::same_node`]) is node identity and is
//! distinct from value equality.
//!
//! ## Side effects
//! [`is_palindrome`] and [`alternate_high_low`] rewrite links of the list
//! they are given. [`add_two_numbers`] allocates new nodes and leaves its
//! operands alone; [`intersection_node`] only reads.
//!
//! ## Quick start
//! ```
//! use list_algos::{add_two_numbers, intersection_node, ListArena, ListBuilder};
//!
//! let mut arena = ListArena::new();
//! let a = arena.push_list([2u8, 4, 3]);
//! let b = arena.push_list([5u8, 6, 4]);
//! let sum = add_two_numbers(&mut arena, a, b);
//! assert_eq!(arena.to_vec(sum), vec![7, 0, 8]);
//!
//! let shared = arena.push_list([8, 4, 5]);
//! let x = ListBuilder::new(&mut arena).with_values([4, 1]).with_tail(shared).build();
//! let y = ListBuilder::new(&mut arena).with_values([5, 0, 1]).with_tail(shared).build();
//! assert_eq!(intersection_node(&arena, x, y), shared);
//! ```
//!
//! Input lists must be acyclic and finite. None of the algorithms check for
//! cycles; a cyclic list makes them loop forever.

pub mod algorithms;
pub mod arena;
pub mod builder;
pub mod error;
pub mod traits;

pub use crate::algorithms::add_numbers::{
    add_two_numbers, push_number, read_number, try_add_two_numbers,
};
pub use crate::algorithms::intersection::intersection_node;
pub use crate::algorithms::palindrome::{is_palindrome, is_palindrome_preserving};
pub use crate::algorithms::zigzag::{alternate_high_low, is_alternating};
pub use crate::arena::{ListArena, ListNode, NodeId};
pub use crate::builder::ListBuilder;
pub use crate::error::ListError;
pub use crate::traits::Digit;
