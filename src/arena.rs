//! Node storage shared by all list algorithms.
//!
//! Every node lives in a [`ListArena`] and is addressed by a [`NodeId`].
//! A list is nothing more than a head handle plus the chain of `next`
//! links reachable from it, so several lists may share a tail and the
//! arena stays the single owner of every node.
//!
//! Links are rewritten only through the arena ([`ListArena::link`],
//! [`ListArena::replace_next`]). Relinking moves a handle out of one slot
//! and into another; it never clones a node.

use std::fmt;
use std::ops::Index;

use crate::error::ListError;

/// Identity of a node inside the arena that created it.
///
/// Equality of two `NodeId`s is node identity, not value equality. Handles
/// from different arenas must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index inside the owning arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One link of a singly-linked sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode<T> {
    pub value: T,
    next: Option<NodeId>,
}

impl<T> ListNode<T> {
    /// Successor of this node, `None` at the end of the list.
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Owner of every node; lists are chains of handles into it.
#[derive(Debug, Clone)]
pub struct ListArena<T> {
    nodes: Vec<ListNode<T>>,
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Total number of nodes ever allocated in this arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node.
    pub fn push(&mut self, value: T) -> NodeId {
        self.push_front(value, None)
    }

    /// Allocate a node whose successor is `next`.
    pub fn push_front(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ListNode { value, next });
        id
    }

    /// Chain `values` in order and return the head.
    ///
    /// The first element becomes the head; an empty collection yields `None`.
    pub fn push_list<I>(&mut self, values: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail: Option<NodeId> = None;
        for value in values {
            let id = self.push(value);
            match tail {
                Some(t) => self.nodes[t.0].next = Some(id),
                None => head = Some(id),
            }
            tail = Some(id);
        }
        head
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&ListNode<T>> {
        self.nodes.get(id.0)
    }

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    #[inline]
    pub fn value(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0].value
    }

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Point `from` at `to`, dropping its previous link.
    ///
    /// # Panics
    /// Panics if `from` was not minted by this arena.
    #[inline]
    pub fn link(&mut self, from: NodeId, to: Option<NodeId>) {
        self.nodes[from.0].next = to;
    }

    /// Checked [`link`](Self::link): both handles must belong to this arena.
    pub fn try_link(&mut self, from: NodeId, to: Option<NodeId>) -> Result<(), ListError> {
        if !self.contains(from) {
            return Err(ListError::UnknownNode(from));
        }
        if let Some(to) = to.filter(|t| !self.contains(*t)) {
            return Err(ListError::UnknownNode(to));
        }
        self.link(from, to);
        Ok(())
    }

    /// Move `next` into `id` and hand back the link it replaced.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this arena.
    #[inline]
    pub fn replace_next(&mut self, id: NodeId, next: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.nodes[id.0].next, next)
    }

    /// Reverse the chain starting at `head` in place; returns the new head.
    ///
    /// The old head ends up with `next == None`. Any node outside the chain
    /// that pointed into it keeps pointing at the same node.
    pub fn reverse(&mut self, head: Option<NodeId>) -> Option<NodeId> {
        let mut reversed = None;
        let mut cur = head;
        while let Some(id) = cur {
            cur = self.replace_next(id, reversed);
            reversed = Some(id);
        }
        reversed
    }

    /// Number of nodes reachable from `head`.
    pub fn list_len(&self, head: Option<NodeId>) -> usize {
        self.nodes(head).count()
    }

    /// Last node reachable from `head`.
    pub fn last(&self, head: Option<NodeId>) -> Option<NodeId> {
        self.nodes(head).last()
    }

    /// Identity comparison. Two distinct nodes holding equal values are
    /// never the same node.
    #[inline]
    pub fn same_node(&self, a: NodeId, b: NodeId) -> bool {
        a == b
    }

    /// Handles of the nodes reachable from `head`, in order.
    pub fn nodes(&self, head: Option<NodeId>) -> Nodes<'_, T> {
        Nodes {
            arena: self,
            cur: head,
        }
    }

    /// Values of the nodes reachable from `head`, in order.
    pub fn values(&self, head: Option<NodeId>) -> Values<'_, T> {
        Values {
            nodes: self.nodes(head),
        }
    }

    pub fn to_vec(&self, head: Option<NodeId>) -> Vec<T>
    where
        T: Clone,
    {
        self.values(head).cloned().collect()
    }
}

impl<T> Index<NodeId> for ListArena<T> {
    type Output = ListNode<T>;

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator over node handles along `next` links.
pub struct Nodes<'a, T> {
    arena: &'a ListArena<T>,
    cur: Option<NodeId>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.arena.next(id);
        Some(id)
    }
}

/// Iterator over node values along `next` links.
pub struct Values<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.nodes.arena;
        self.nodes.next().map(|id| arena.value(id))
    }
}
