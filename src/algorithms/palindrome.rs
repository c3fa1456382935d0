//! Palindrome detection in O(1) extra space.
//!
//! A slow pointer (one step) and a fast pointer (two steps) locate the
//! middle node. The chain from the middle onwards is reversed in place and
//! then walked backwards against the front of the list.
//!
//! The reversal is destructive: after [`is_palindrome`] the front part of
//! the list still ends at the middle node, but that node's `next` is now
//! `None`, and the back half starts at the former last node running
//! towards the middle. [`is_palindrome_preserving`] reverses the tail a
//! second time to put the list back.

use crate::arena::{ListArena, NodeId};

/// Whether the values reachable from `head` read the same in both directions.
///
/// An absent head is reported as `false`. Values are compared with `==`.
///
/// **Mutates the list**: see the module docs for the structure left behind.
pub fn is_palindrome<T: PartialEq>(arena: &mut ListArena<T>, head: Option<NodeId>) -> bool {
    let Some(head) = head else {
        return false;
    };
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("is_palindrome", head = head.index());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let middle = middle(arena, head);
    let tail = arena.reverse(Some(middle));
    compare_halves(arena, head, tail)
}

/// Same as [`is_palindrome`], but restores the original links before returning.
pub fn is_palindrome_preserving<T: PartialEq>(
    arena: &mut ListArena<T>,
    head: Option<NodeId>,
) -> bool {
    let Some(head) = head else {
        return false;
    };
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("is_palindrome_preserving", head = head.index());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let middle = middle(arena, head);
    let tail = arena.reverse(Some(middle));
    let verdict = compare_halves(arena, head, tail);
    // The node before `middle` was never touched, so re-reversing the tail
    // reconnects the two halves.
    arena.reverse(tail);
    verdict
}

/// Slow/fast walk; for even lengths this lands on the first node of the
/// back half.
fn middle<T>(arena: &ListArena<T>, head: NodeId) -> NodeId {
    let mut slow = head;
    let mut fast = Some(head);
    // `slow` only steps when both pointers can.
    while let (Some(second), Some(step)) = (fast.and_then(|f| arena.next(f)), arena.next(slow)) {
        slow = step;
        fast = arena.next(second);
    }
    slow
}

fn compare_halves<T: PartialEq>(
    arena: &ListArena<T>,
    head: NodeId,
    tail: Option<NodeId>,
) -> bool {
    let mut front = head;
    let mut back = tail;
    while let Some(b) = back {
        if arena.same_node(front, b) {
            break;
        }
        if arena.value(front) != arena.value(b) {
            #[cfg(feature = "tracing")]
            tracing::trace!(front = front.index(), back = b.index(), "mismatch");
            return false;
        }
        match arena.next(front) {
            Some(f) => front = f,
            None => break,
        }
        back = arena.next(b);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_palindrome, is_palindrome_preserving, middle};
    use crate::arena::ListArena;

    fn check(values: &[i32]) -> bool {
        let mut arena = ListArena::new();
        let head = arena.push_list(values.iter().copied());
        is_palindrome(&mut arena, head)
    }

    #[test]
    fn odd_and_even_lengths() {
        assert!(check(&[1, 2, 3, 2, 1]));
        assert!(check(&[1, 2, 2, 1]));
        assert!(check(&[7, 7]));
        assert!(!check(&[1, 2, 3]));
        assert!(!check(&[1, 2]));
        assert!(!check(&[1, 2, 3, 1]));
    }

    #[test]
    fn single_node_is_palindrome() {
        assert!(check(&[5]));
    }

    #[test]
    fn absent_head_is_not_palindrome() {
        let mut arena: ListArena<i32> = ListArena::new();
        assert!(!is_palindrome(&mut arena, None));
        assert!(!is_palindrome_preserving(&mut arena, None));
    }

    #[test]
    fn compares_by_value_not_identity() {
        assert!(check(&[100_000, -5_000_000, 100_000]));
        let mut arena = ListArena::new();
        let head = arena.push_list(vec![String::from("abc"), String::from("abc")]);
        assert!(is_palindrome(&mut arena, head));
    }

    #[test]
    fn middle_follows_slow_fast_walk() {
        let mut arena = ListArena::new();
        let odd = arena.push_list([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(*arena.value(middle(&arena, odd)), 3);
        let even = arena.push_list([1, 2, 3, 4]).unwrap();
        assert_eq!(*arena.value(middle(&arena, even)), 3);
    }

    #[test]
    fn middle_of_short_lists_stays_in_bounds() {
        let mut arena = ListArena::new();
        for len in 1..=9usize {
            let head = arena.push_list(0..len).unwrap();
            let ids: Vec<_> = arena.nodes(Some(head)).collect();
            assert_eq!(middle(&arena, head), ids[len / 2], "len {len}");
        }
    }

    #[test]
    fn back_half_stays_reversed() {
        let mut arena = ListArena::new();
        let head = arena.push_list([1, 2, 3, 2, 1]);
        let ids: Vec<_> = arena.nodes(head).collect();
        assert!(is_palindrome(&mut arena, head));

        assert_eq!(arena.to_vec(head), vec![1, 2, 3]);
        assert_eq!(arena.to_vec(Some(ids[4])), vec![1, 2, 3]);
        assert_eq!(arena.next(ids[2]), None);
        assert_eq!(arena.next(ids[1]), Some(ids[2]));
    }

    #[test]
    fn preserving_variant_restores_links() {
        for values in [vec![1, 2, 3, 2, 1], vec![1, 2, 3, 4], vec![9], vec![4, 4]] {
            let mut arena = ListArena::new();
            let head = arena.push_list(values.clone());
            let before: Vec<_> = arena.nodes(head).collect();
            let expected = values.iter().eq(values.iter().rev());
            assert_eq!(is_palindrome_preserving(&mut arena, head), expected);
            assert_eq!(arena.nodes(head).collect::<Vec<_>>(), before);
            assert_eq!(arena.to_vec(head), values);
        }
    }
}
