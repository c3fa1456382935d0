//! First shared node of two converging lists.
//!
//! Both lists share the same number of nodes after the meeting point, so
//! any length difference lies in the prefixes. Skipping that difference on
//! the longer list leaves both cursors the same distance from the end;
//! walking them in lockstep either lands them on one node or runs both off
//! the end together.

use crate::arena::{ListArena, NodeId};

/// The first node reachable from both `a` and `b`, compared by identity.
///
/// Returns `None` when the lists are disjoint or either head is absent.
/// Payloads are never compared; two nodes holding equal values are not an
/// intersection. The lists are only read.
pub fn intersection_node<T>(
    arena: &ListArena<T>,
    a: Option<NodeId>,
    b: Option<NodeId>,
) -> Option<NodeId> {
    let (a, b) = (a?, b?);
    let len_a = arena.list_len(Some(a));
    let len_b = arena.list_len(Some(b));
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("intersection_node", len_a, len_b);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    // Ties pick `b` as the longer list; the offset is zero then anyway.
    let (mut longer, mut shorter) = if len_a > len_b {
        (Some(a), Some(b))
    } else {
        (Some(b), Some(a))
    };
    for _ in 0..len_a.abs_diff(len_b) {
        longer = longer.and_then(|n| arena.next(n));
    }

    while let (Some(l), Some(s)) = (longer, shorter) {
        if arena.same_node(l, s) {
            #[cfg(feature = "tracing")]
            tracing::trace!(node = s.index(), "lists meet");
            return Some(s);
        }
        longer = arena.next(l);
        shorter = arena.next(s);
    }
    None
}
