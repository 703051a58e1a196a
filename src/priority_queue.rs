//! Priority Queue Implementation
//!
//! A queue where the most important element is always at the front. It owns a
//! single [`Heap`] and exposes it through queue vocabulary: `enqueue`,
//! `dequeue`, `peek`, and `change_priority`.
//!
//! The queue has no direction of its own. Supply `>` for a max-priority queue
//! (largest first) or `<` for a min-priority queue (smallest first), or use
//! [`PriorityQueue::max`] / [`PriorityQueue::min`] for types with a natural
//! ordering.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` / `dequeue` / `change_priority` | O(log n) |
//! | `peek` | O(1) |
//! | `index_of` / `remove` / `contains` | O(n) |

extern crate alloc;

use crate::heap::{Heap, OrderFn};
use alloc::vec::Vec;
use core::fmt;
use core::slice;

/// A priority queue backed by a binary heap.
///
/// # Examples
///
/// ```
/// use lru_heap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a > b);
/// queue.enqueue(2);
/// queue.enqueue(10);
/// queue.enqueue(1);
///
/// assert_eq!(queue.peek(), Some(&10));
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, F = OrderFn<T>> {
    heap: Heap<T, F>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-priority queue.
    pub fn max() -> Self {
        PriorityQueue { heap: Heap::max() }
    }

    /// Creates an empty min-priority queue.
    pub fn min() -> Self {
        PriorityQueue { heap: Heap::min() }
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `order`.
    pub fn new(order: F) -> Self {
        PriorityQueue {
            heap: Heap::new(order),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: F) -> Self {
        PriorityQueue {
            heap: Heap::with_capacity(capacity, order),
        }
    }

    /// Builds a queue from `items` in O(n).
    pub fn from_vec(items: Vec<T>, order: F) -> Self {
        PriorityQueue {
            heap: Heap::from_vec(items, order),
        }
    }

    /// Builds a queue from a copy of `items` in O(n).
    pub fn from_slice(items: &[T], order: F) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec(), order)
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element that would be dequeued next.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn enqueue(&mut self, value: T) {
        self.heap.insert(value);
    }

    /// Removes and returns the most important element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// In a max-priority queue the new value would normally rank higher than
    /// the old one; in a min-priority queue, lower. Either direction keeps the
    /// queue valid. The element may move, so indices obtained earlier from
    /// [`index_of`](Self::index_of) are stale afterwards. Out-of-range indices
    /// return `None` and leave the queue untouched.
    pub fn change_priority(&mut self, index: usize, value: T) -> Option<T> {
        self.heap.replace(index, value)
    }

    /// Iterates over the queued elements in heap order, not dequeue order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Drains the queue into a vector in dequeue order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.dequeue() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T: PartialEq, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Position of the first element equal to `value` in the backing heap.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.heap.index_of(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.heap.remove_node(value)
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<'a, T, F> IntoIterator for &'a PriorityQueue<T, F> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        (&self.heap).into_iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
