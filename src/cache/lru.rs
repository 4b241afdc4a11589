//! Recency List Module
//!
//! Arena-backed doubly-linked list used to track access order for LRU eviction.

// == Node Handles ==
/// Stable handle to a node in the arena. Valid until the node is popped.
pub type NodeIndex = usize;

/// Null link.
const NIL: NodeIndex = usize::MAX;

#[derive(Debug)]
struct Node<T> {
    item: T,
    /// Neighbour closer to the front (more recently used)
    prev: NodeIndex,
    /// Neighbour closer to the back (less recently used)
    next: NodeIndex,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Nodes live in a `Vec` and link to each other by index, so a handle kept
/// elsewhere (the cache's key map) can relink its node without a search:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Slots freed by `pop_back` are recycled by the next `push_front`.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeIndex>,
    head: NodeIndex,
    tail: NodeIndex,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as the most recently used and returns its handle.
    pub fn push_front(&mut self, item: T) -> NodeIndex {
        let node = Node {
            item,
            prev: NIL,
            next: NIL,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the node at `idx` as the most recently used.
    ///
    /// Does nothing if `idx` is not a live handle.
    pub fn move_to_front(&mut self, idx: NodeIndex) {
        if idx == self.head || self.node(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }

        let idx = self.tail;
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        self.slots[idx].take().map(|node| node.item)
    }

    // == Accessors ==
    /// Returns the item behind a handle.
    pub fn get(&self, idx: NodeIndex) -> Option<&T> {
        self.node(idx).map(|node| &node.item)
    }

    /// Returns the item behind a handle, mutably. Does not change recency.
    pub fn get_mut(&mut self, idx: NodeIndex) -> Option<&mut T> {
        self.slots
            .get_mut(idx)
            .and_then(Option::as_mut)
            .map(|node| &mut node.item)
    }

    /// Returns the least recently used item without removing it.
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Returns the most recently used item.
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates from least recently used to most recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.tail,
        }
    }

    // == Link Helpers ==
    fn node(&self, idx: NodeIndex) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn link_front(&mut self, idx: NodeIndex) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = NIL;
            node.next = old_head;
        }
        match self.node_mut(old_head) {
            Some(head) => head.prev = idx,
            None => self.tail = idx,
        }
        self.head = idx;
    }

    fn unlink(&mut self, idx: NodeIndex) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match self.node_mut(prev) {
            Some(p) => p.next = next,
            None => self.head = next,
        }
        match self.node_mut(next) {
            Some(n) => n.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = NIL;
            node.next = NIL;
        }
    }
}

// == Iterator ==
/// Back-to-front iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: NodeIndex,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor)?;
        self.cursor = node.prev;
        Some(&node.item)
    }
}
