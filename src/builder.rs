use crate::arena::{ListArena, NodeId};

/// Fluent construction of one list inside an arena.
///
/// ```
/// use list_algos::{ListArena, ListBuilder};
///
/// let mut arena = ListArena::new();
/// let shared = arena.push_list([8, 4, 5]);
/// let a = ListBuilder::new(&mut arena).with_values([4, 1]).with_tail(shared).build();
/// assert_eq!(arena.to_vec(a), vec![4, 1, 8, 4, 5]);
/// ```
pub struct ListBuilder<'a, T> {
    arena: &'a mut ListArena<T>,
    values: Vec<T>,
    tail: Option<NodeId>,
}

impl<'a, T> ListBuilder<'a, T> {
    pub fn new(arena: &'a mut ListArena<T>) -> Self {
        Self {
            arena,
            values: Vec::new(),
            tail: None,
        }
    }
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.values.reserve(capacity);
        self
    }
    pub fn with_values<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.values.extend(values);
        self
    }
    /// Continue the list into an existing chain instead of ending it.
    pub fn with_tail(mut self, tail: Option<NodeId>) -> Self {
        self.tail = tail;
        self
    }
    pub fn build(self) -> Option<NodeId> {
        let Self {
            arena,
            values,
            tail,
        } = self;
        match arena.push_list(values) {
            Some(head) => {
                if let Some(last) = arena.last(Some(head)) {
                    arena.link(last, tail);
                }
                Some(head)
            }
            None => tail,
        }
    }
}
