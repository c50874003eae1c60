//! A singly linked list of weighted neighbors with head and tail links.
//!
//! Links live in a slot vector and refer to their successor by slot index,
//! so the list needs no unsafe code and no reference counting.  Slots freed
//! by [`NeighborList::remove`] are recycled by later insertions.
//!
//! Two ways of walking the list are offered.  [`NeighborList::iter`]
//! borrows the list, so structural mutation during traversal is ruled out
//! statically.  [`NeighborList::cursor`] returns a detached, fail-fast
//! [`Cursor`] that reports [`GraphError::ConcurrentModification`] when the
//! list was structurally modified after the cursor was created.  Weight
//! updates through [`NeighborList::set_weight`] are not structural and do
//! not invalidate cursors.

use std::fmt::{self, Debug, Formatter};

use crate::{
    NodeId, Weight,
    error::{GraphError, Result},
};

/// A `(node, weight)` pair stored in a [`NeighborList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(node: NodeId, weight: Weight) -> Self {
        Self { node, weight }
    }
}

#[derive(Clone)]
struct Link {
    neighbor: Neighbor,
    next: Option<usize>,
}

/// A singly linked list of [`Neighbor`] entries.  Insertion at either end is
/// O(1); lookup and removal are O(len).  Entries are not deduplicated.
#[derive(Clone, Default)]
pub struct NeighborList {
    slots: Vec<Link>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    count: usize,
    modified: bool,
}

impl NeighborList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding a single entry.
    pub fn with_neighbor(node: NodeId, weight: Weight) -> Self {
        let mut list = Self::new();
        list.add_back(node, weight);
        list.modified = false;
        list
    }

    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn alloc(&mut self, neighbor: Neighbor, next: Option<usize>) -> usize {
        let link = Link { neighbor, next };
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = link;
                index
            }
            None => {
                self.slots.push(link);
                self.slots.len() - 1
            }
        }
    }

    /// Stores `(node, weight)` at the front of the list.
    pub fn add_front(&mut self, node: NodeId, weight: Weight) {
        let index = self.alloc(Neighbor::new(node, weight), self.head);
        if self.tail.is_none() {
            debug_assert!(self.head.is_none());
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.count += 1;
        self.modified = true;
    }

    /// Stores `(node, weight)` at the back of the list.
    pub fn add_back(&mut self, node: NodeId, weight: Weight) {
        let index = self.alloc(Neighbor::new(node, weight), None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => {
                debug_assert!(self.head.is_none());
                self.head = Some(index);
            }
        }
        self.tail = Some(index);
        self.count += 1;
        self.modified = true;
    }

    /// Slot indices in list order.
    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&index| self.slots[index].next)
    }

    fn find(&self, node: NodeId) -> Option<usize> {
        self.indices()
            .find(|&index| self.slots[index].neighbor.node == node)
    }

    /// Returns true if some entry refers to `node`.
    pub fn contains(&self, node: NodeId) -> bool {
        self.find(node).is_some()
    }

    /// Returns the weight of the first entry for `node`, or 0 if there is
    /// none.
    pub fn weight_of(&self, node: NodeId) -> Weight {
        self.find(node)
            .map_or(0, |index| self.slots[index].neighbor.weight)
    }

    /// Updates the weight of the first entry for `node`, returning false if
    /// there is none.  Does not invalidate cursors.
    pub fn set_weight(&mut self, node: NodeId, weight: Weight) -> bool {
        match self.find(node) {
            Some(index) => {
                self.slots[index].neighbor.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Removes the first entry for `node`, returning its weight.  Does
    /// nothing if there is no such entry.
    pub fn remove(&mut self, node: NodeId) -> Option<Weight> {
        let mut previous: Option<usize> = None;
        let mut current = self.head;
        while let Some(index) = current {
            let link = &self.slots[index];
            if link.neighbor.node == node {
                let (next, weight) = (link.next, link.neighbor.weight);
                match previous {
                    Some(previous) => self.slots[previous].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(index) {
                    debug_assert!(next.is_none());
                    self.tail = previous;
                }
                self.free.push(index);
                self.count -= 1;
                self.modified = true;
                return Some(weight);
            }
            previous = current;
            current = link.next;
        }
        None
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
        self.modified = true;
    }

    /// Returns a borrowing iterator over the entries in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.count,
        }
    }

    /// Returns a fail-fast cursor positioned at the head of the list.
    /// Structural changes made before this call are forgotten.
    pub fn cursor(&mut self) -> Cursor {
        self.modified = false;
        Cursor {
            current: self.head,
        }
    }
}

impl Debug for NeighborList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|n| (n.node, n.weight)))
            .finish()
    }
}

impl PartialEq for NeighborList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for NeighborList {}

impl FromIterator<Neighbor> for NeighborList {
    fn from_iter<T: IntoIterator<Item = Neighbor>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Neighbor> for NeighborList {
    fn extend<T: IntoIterator<Item = Neighbor>>(&mut self, iter: T) {
        for neighbor in iter {
            self.add_back(neighbor.node, neighbor.weight);
        }
    }
}

impl<'a> IntoIterator for &'a NeighborList {
    type Item = Neighbor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`NeighborList::iter`].
pub struct Iter<'a> {
    list: &'a NeighborList,
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        let link = &self.list.slots[self.current?];
        self.current = link.next;
        self.remaining -= 1;
        Some(link.neighbor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A detached position in a [`NeighborList`], returned by
/// [`NeighborList::cursor`].  The cursor does not borrow the list, so the
/// list may be mutated between steps; structural mutation makes every
/// following step fail.
#[derive(Debug, Clone)]
pub struct Cursor {
    current: Option<usize>,
}

impl Cursor {
    /// Advances the cursor.  Returns `None` once the end of the list is
    /// reached, and [`GraphError::ConcurrentModification`] if `list` was
    /// structurally modified since the cursor was created.  `list` must be
    /// the list that created the cursor.
    pub fn next(&mut self, list: &NeighborList) -> Option<Result<Neighbor>> {
        let index = self.current?;
        if list.modified {
            return Some(Err(GraphError::ConcurrentModification));
        }
        let Some(link) = list.slots.get(index) else {
            return Some(Err(GraphError::ConcurrentModification));
        };
        self.current = link.next;
        Some(Ok(link.neighbor))
    }
}
