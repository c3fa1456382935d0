//! Errors returned by the checked list APIs.
//!
//! The unchecked entry points never fail; degenerate input is reported
//! through return values (`false`, `None`). Only operations that validate
//! handles or digits return [`ListError`].

use thiserror::Error;

use crate::arena::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle was not minted by this arena.
    #[error("node {0} does not belong to this arena")]
    UnknownNode(NodeId),

    /// A node in a digit list holds something other than 0..=9.
    #[error("node {node} at position {position} is not a decimal digit")]
    DigitOutOfRange { node: NodeId, position: usize },

    /// The decoded number does not fit in a `u128`.
    #[error("number with {digits} digits overflows u128")]
    NumberOverflow { digits: usize },
}
