//! Binary Heap Implementation
//!
//! An array-backed complete binary tree ordered by a caller-supplied strict
//! ordering predicate. The predicate decides the direction of the heap:
//! `a > b` builds a max-heap, `a < b` a min-heap, and any other strict
//! ordering (on a field, a tuple, ...) works the same way.
//!
//! # Layout
//!
//! ```text
//!   index:    0   1   2   3   4   5   6
//!   nodes:  [ a | b | c | d | e | f | g ]
//!
//!                 a            children of i: 2i+1, 2i+2
//!               /   \          parent of i:   (i-1)/2
//!              b     c
//!             / \   / \
//!            d   e f   g
//! ```
//!
//! # Heap Property
//!
//! For every node `i > 0`, `order(nodes[i], nodes[parent(i)])` is false: no
//! child outranks its parent. Every mutating operation restores the property
//! before returning.
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `from_vec` | O(n) |
//! | `peek` | O(1) |
//! | `insert` | O(log n) |
//! | `remove` | O(log n) |
//! | `remove_at` | O(log n) |
//! | `replace` | O(log n) |
//! | `index_of` | O(n) |

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::slice;
use tracing::trace;

/// Function-pointer form of an ordering predicate.
///
/// This is the default comparator type, so `Heap<T>` can name a heap built
/// from a non-capturing closure or a plain function.
pub type OrderFn<T> = fn(&T, &T) -> bool;

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// A binary heap ordered by a caller-supplied predicate.
///
/// `order(a, b)` returns `true` when `a` must sit closer to the root than `b`.
/// The predicate is fixed at construction.
///
/// Cloning a heap produces an independent copy.
///
/// # Examples
///
/// ```
/// use lru_heap::Heap;
///
/// let mut heap = Heap::from_vec(vec![5, 10, 0, 3], |a: &i32, b: &i32| a < b);
/// assert_eq!(heap.peek(), Some(&0));
///
/// heap.insert(-1);
/// assert_eq!(heap.remove(), Some(-1));
/// assert_eq!(heap.remove(), Some(0));
/// assert_eq!(heap.len(), 3);
/// ```
#[derive(Clone)]
pub struct Heap<T, F = OrderFn<T>> {
    nodes: Vec<T>,
    order: F,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty max-heap using `>`.
    pub fn max() -> Self {
        Heap::new(greater::<T> as OrderFn<T>)
    }

    /// Creates an empty min-heap using `<`.
    pub fn min() -> Self {
        Heap::new(less::<T> as OrderFn<T>)
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `order`.
    pub fn new(order: F) -> Self {
        Heap {
            nodes: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: F) -> Self {
        Heap {
            nodes: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from an unordered vector in O(n).
    ///
    /// Sifts down every internal node, from the last one (`n/2 - 1`) back to
    /// the root.
    pub fn from_vec(nodes: Vec<T>, order: F) -> Self {
        let mut heap = Heap { nodes, order };
        let len = heap.nodes.len();
        for i in (0..len / 2).rev() {
            heap.sift_down(i);
        }
        trace!(len, "built heap from vector");
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root: the element that ranks first under the predicate.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Adds an element. O(log n).
    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Adds every element of `values`, one insertion at a time.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Removes and returns the root. O(log n).
    pub fn remove(&mut self) -> Option<T> {
        if self.nodes.len() <= 1 {
            return self.nodes.pop();
        }
        // The last node takes the root slot and sinks to its place.
        let root = self.nodes.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Removes and returns the element at `index`. O(log n).
    ///
    /// Returns `None` and leaves the heap untouched when `index` is out of
    /// bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }

        let last = len - 1;
        if index != last {
            self.nodes.swap(index, last);
            // At most one of these moves the element: it either sinks below
            // the removed node's children or rises above its old parent.
            self.sift_down_until(index, last);
            self.sift_up(index);
        }
        self.nodes.pop()
    }

    /// Replaces the element at `index` with `value` and returns the old one.
    ///
    /// Equivalent to [`remove_at`](Self::remove_at) followed by
    /// [`insert`](Self::insert), so `value` may end up at a different index.
    /// Returns `None` when `index` is out of bounds; the heap is left
    /// untouched and `value` is dropped.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        let old = self.remove_at(index)?;
        self.insert(value);
        Some(old)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// The backing array in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    /// Iterates over the elements in heap (array) order, not sorted order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.nodes.iter()
    }

    /// Consumes the heap and returns the backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    #[inline]
    fn parent_index(index: usize) -> usize {
        (index - 1) / 2
    }

    #[inline]
    fn left_child_index(index: usize) -> usize {
        2 * index + 1
    }

    /// Moves the element at `index` toward the root while it outranks its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent_index(index);
            if !(self.order)(&self.nodes[index], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        self.sift_down_until(index, self.nodes.len());
    }

    /// Moves the element at `index` toward the leaves, looking only at slots
    /// below `end`.
    ///
    /// The right child is compared against the current winner, which may
    /// already be the left child, so it only wins if it outranks both.
    fn sift_down_until(&mut self, mut index: usize, end: usize) {
        loop {
            let left = Self::left_child_index(index);
            let right = left + 1;

            let mut first = index;
            if left < end && (self.order)(&self.nodes[left], &self.nodes[first]) {
                first = left;
            }
            if right < end && (self.order)(&self.nodes[right], &self.nodes[first]) {
                first = right;
            }
            if first == index {
                return;
            }

            self.nodes.swap(index, first);
            index = first;
        }
    }
}

impl<T: PartialEq, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Returns the index of the first element equal to `value`. O(n).
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node == value)
    }

    /// Removes the first element equal to `value`. O(n).
    pub fn remove_node(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.remove_at(index)
    }
}

impl<T, F> Extend<T> for Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, F> IntoIterator for &'a Heap<T, F> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.nodes.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("nodes", &self.nodes).finish()
    }
}

#[cfg(test)]
pub(crate) fn satisfies_heap_property<T, F>(heap: &Heap<T, F>) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    (1..heap.nodes.len()).all(|i| {
        let parent = (i - 1) / 2;
        !(heap.order)(&heap.nodes[i], &heap.nodes[parent])
    })
}
