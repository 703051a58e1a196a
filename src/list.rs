extern crate alloc;

use alloc::fmt;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Slots reserved up front; larger lists grow the arena as they fill.
const INITIAL_SLOTS: usize = 1 << 16;

/// Stable handle to a node stored in a [`List`].
///
/// Ids are indices into the list's arena. A slot is recycled through the free
/// list once its node is removed, so an id must not be used after the node it
/// names has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node in the doubly linked list.
///
/// Links are arena indices rather than pointers. `newer` points toward the
/// head (most recently used), `older` toward the tail (least recently used).
#[derive(Clone)]
struct Node<T> {
    val: T,
    newer: Option<usize>,
    older: Option<usize>,
}

/// A doubly linked list with fixed capacity, stored in a dense arena.
///
/// The head is the most recently added or promoted element and the tail is
/// the oldest one. Adding, promoting and unlinking a known node are all O(1).
/// Freed slots are kept on a free list and reused by later additions, so the
/// arena never grows past `cap` slots.
///
/// # Examples
///
/// ```ignore
/// use lru_heap::list::List;
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
///
/// let node1 = list.add(10).unwrap();
/// let _node2 = list.add(20).unwrap();
///
/// list.move_to_front(node1);
/// assert_eq!(list.remove_last(), Some(20));
/// ```
#[derive(Clone)]
pub struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Arena of node slots. `None` marks a free slot.
    nodes: Vec<Option<Node<T>>>,
    /// Indices of free slots in `nodes`.
    free: Vec<usize>,
    /// Most recently used node.
    head: Option<usize>,
    /// Least recently used node.
    tail: Option<usize>,
}

impl<T> List<T> {
    /// Creates a new List that holds at most `cap` items.
    pub fn new(cap: NonZeroUsize) -> List<T> {
        List {
            cap,
            len: 0,
            nodes: Vec::with_capacity(cap.get().min(INITIAL_SLOTS)),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the maximum number of items the list can hold.
    #[allow(dead_code)]
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// Id of the most recently used node.
    #[allow(dead_code)]
    pub fn front(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    /// Id of the least recently used node.
    pub fn back(&self) -> Option<NodeId> {
        self.tail.map(NodeId)
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns the id of the new node, or `None` if the list is full.
    pub fn add(&mut self, v: T) -> Option<NodeId> {
        if self.is_full() {
            return None;
        }
        let node = Node {
            val: v,
            newer: None,
            older: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.attach(idx);
        self.len += 1;
        Some(NodeId(idx))
    }

    /// Links a detached node in as the new head.
    fn attach(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.newer = None;
            node.older = old_head;
        }
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head) => head.newer = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Unlinks a node from its neighbours without freeing its slot.
    fn detach(&mut self, idx: usize) {
        let (newer, older) = match self.node(idx) {
            Some(node) => (node.newer, node.older),
            None => return,
        };

        match newer.and_then(|n| self.node_mut(n)) {
            Some(newer_node) => newer_node.older = older,
            None => self.head = older,
        }
        match older.and_then(|o| self.node_mut(o)) {
            Some(older_node) => older_node.newer = newer,
            None => self.tail = newer,
        }

        if let Some(node) = self.node_mut(idx) {
            node.newer = None;
            node.older = None;
        }
    }

    /// Moves a node to the front of the list.
    ///
    /// Does nothing if the node is already at the front or the id is stale.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id.0) || self.node(id.0).is_none() {
            return;
        }
        self.detach(id.0);
        self.attach(id.0);
    }

    /// Unlinks the node and returns its value, releasing the slot for reuse.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.node(id.0)?;
        self.detach(id.0);
        let node = self.nodes[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.val)
    }

    /// Removes the first (most recently used) item from the list.
    #[allow(dead_code)]
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(NodeId(head))
    }

    /// Removes the last (least recently used) item from the list.
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(NodeId(tail))
    }

    /// Replaces the value stored in the node, returning the old one.
    #[allow(dead_code)]
    pub fn update(&mut self, id: NodeId, v: T) -> Option<T> {
        let node = self.node_mut(id.0)?;
        Some(core::mem::replace(&mut node.val, v))
    }

    /// Gets an immutable reference to the value stored in the node.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id.0).map(|node| &node.val)
    }

    /// Gets a mutable reference to the value stored in the node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id.0).map(|node| &mut node.val)
    }

    /// Iterates from the most recently used to the least recently used item.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Clears the list, removing all entries.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}

/// Head-to-tail iterator over a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.node(self.next?)?;
        self.next = node.older;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
