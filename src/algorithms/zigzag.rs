//! Alternating low/high rearrangement by relinking.
//!
//! Positions are counted from 1 at the head. After the pass every
//! even-position node is at least as large as both neighbours and every
//! odd-position node at most as large as both neighbours.
//!
//! A two-node window slides left to right once. When the window breaks the
//! ordering wanted for its parity the two nodes trade places by relinking;
//! payloads never move. A swap can only shrink an odd-position value or
//! grow an even-position one, so the relation with the node on the left is
//! kept and no window is ever revisited.

use crate::arena::{ListArena, NodeId};

/// Rearrange the list in place and return its (possibly new) head.
///
/// **Mutates the list**: nodes are relinked, values stay put. Empty and
/// single-node lists come back unchanged.
pub fn alternate_high_low<T: Ord>(
    arena: &mut ListArena<T>,
    head: Option<NodeId>,
) -> Option<NodeId> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("alternate_high_low");
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut new_head = head;
    let mut prev: Option<NodeId> = None;
    let mut cur = head;
    // Parity of the left node of the window; the head sits at position 1.
    let mut even = false;

    while let Some(left) = cur {
        let right = arena.next(left);
        match right {
            Some(right) if out_of_order(arena.value(left), arena.value(right), even) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(left = left.index(), right = right.index(), even, "swap");
                let after = arena.replace_next(right, Some(left));
                arena.link(left, after);
                match prev {
                    Some(p) => arena.link(p, Some(right)),
                    None => new_head = Some(right),
                }
                // `left` moved one slot right and becomes the next window's left node.
                prev = Some(right);
            }
            _ => {
                prev = Some(left);
                cur = right;
            }
        }
        even = !even;
    }

    new_head
}

#[inline]
fn out_of_order<T: Ord>(left: &T, right: &T, even: bool) -> bool {
    if even {
        left < right
    } else {
        left > right
    }
}

/// Whether `values` already alternate low/high starting with a low at position 1.
pub fn is_alternating<T: Ord>(values: &[T]) -> bool {
    values
        .windows(2)
        .enumerate()
        .all(|(i, w)| if i % 2 == 0 { w[0] <= w[1] } else { w[0] >= w[1] })
}
