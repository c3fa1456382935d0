//! Grade-school addition of numbers stored as digit lists.
//!
//! A number is a list of single decimal digits, least significant first, so
//! `[2, 4, 3]` is 342. The shorter operand behaves as if padded with
//! leading zeros. The sum is written into fresh nodes of the same arena;
//! the operands are never relinked or modified.

use crate::arena::{ListArena, NodeId};
use crate::error::ListError;
use crate::traits::Digit;

/// Add two digit lists and return the head of a new digit list.
///
/// Digits are not validated: anything outside `0..=9` silently corrupts the
/// carry. Use [`try_add_two_numbers`] for untrusted input. Two absent
/// operands produce an absent result.
pub fn add_two_numbers<D: Digit>(
    arena: &mut ListArena<D>,
    a: Option<NodeId>,
    b: Option<NodeId>,
) -> Option<NodeId> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("add_two_numbers");
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut head = None;
    let mut tail: Option<NodeId> = None;
    let mut carry = 0u32;
    let (mut x, mut y) = (a, b);

    while x.is_some() || y.is_some() {
        let i = take_digit(arena, &mut x);
        let j = take_digit(arena, &mut y);
        let sum = i.wrapping_add(j).wrapping_add(carry);
        carry = sum / 10;
        append(arena, &mut head, &mut tail, D::from_digit(sum % 10));
    }

    if carry > 0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(carry, "final carry");
        append(arena, &mut head, &mut tail, D::from_digit(carry));
    }

    head
}

/// Checked [`add_two_numbers`]: every operand digit must be in `0..=9`.
///
/// Nothing is allocated when validation fails.
pub fn try_add_two_numbers<D: Digit>(
    arena: &mut ListArena<D>,
    a: Option<NodeId>,
    b: Option<NodeId>,
) -> Result<Option<NodeId>, ListError> {
    validate_digits(arena, a)?;
    validate_digits(arena, b)?;
    Ok(add_two_numbers(arena, a, b))
}

/// Encode `n` as a digit list, least significant digit first. Zero is `[0]`.
pub fn push_number<D: Digit>(arena: &mut ListArena<D>, mut n: u64) -> Option<NodeId> {
    let mut head = None;
    let mut tail = None;
    loop {
        append(arena, &mut head, &mut tail, D::from_digit((n % 10) as u32));
        n /= 10;
        if n == 0 {
            return head;
        }
    }
}

/// Decode a digit list. An absent list decodes to zero.
pub fn read_number<D: Digit>(
    arena: &ListArena<D>,
    head: Option<NodeId>,
) -> Result<u128, ListError> {
    validate_digits(arena, head)?;
    let mut value = 0u128;
    let mut scale = Some(1u128);
    for (position, digit) in arena.values(head).enumerate() {
        let d = u128::from(digit.to_digit());
        if d == 0 {
            scale = scale.and_then(|s| s.checked_mul(10));
            continue;
        }
        value = scale
            .and_then(|s| s.checked_mul(d))
            .and_then(|term| value.checked_add(term))
            .ok_or(ListError::NumberOverflow {
                digits: position + 1,
            })?;
        scale = scale.and_then(|s| s.checked_mul(10));
    }
    Ok(value)
}

fn validate_digits<D: Digit>(
    arena: &ListArena<D>,
    head: Option<NodeId>,
) -> Result<(), ListError> {
    for (position, node) in arena.nodes(head).enumerate() {
        if !arena.value(node).is_decimal() {
            return Err(ListError::DigitOutOfRange { node, position });
        }
    }
    Ok(())
}

/// Read the digit under `cursor` (zero when exhausted) and step past it.
fn take_digit<D: Digit>(arena: &ListArena<D>, cursor: &mut Option<NodeId>) -> u32 {
    match *cursor {
        Some(id) => {
            *cursor = arena.next(id);
            arena.value(id).to_digit()
        }
        None => 0,
    }
}

fn append<D>(
    arena: &mut ListArena<D>,
    head: &mut Option<NodeId>,
    tail: &mut Option<NodeId>,
    digit: D,
) {
    let id = arena.push(digit);
    match *tail {
        Some(t) => arena.link(t, Some(id)),
        None => *head = Some(id),
    }
    *tail = Some(id);
}
