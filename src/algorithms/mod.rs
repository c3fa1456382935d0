//! The list algorithms.
//!
//! Each module is an independent entry point over a shared [`ListArena`](crate::arena::ListArena):
//! - [`palindrome`]   : slow/fast midpoint plus destructive tail reversal.
//! - [`add_numbers`]  : digit-by-digit addition with carry into a new list.
//! - [`zigzag`]       : alternating low/high order by relinking adjacent pairs.
//! - [`intersection`] : first shared node via length offset and lockstep walk.

pub mod add_numbers;
pub mod intersection;
pub mod palindrome;
pub mod zigzag;
