//! Correctness Tests for the Cache and the Priority Queue
//!
//! These tests validate the ordering policies through the public API using
//! small, predictable inputs. Cache tests state which key gets evicted after
//! each put. Queue tests state the exact dequeue order.
//!
//! ## Test Strategy
//! - Small sizes (2-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Explicit checks of the evicted key or the dequeued element

use lru_heap::config::LruCacheConfig;
use lru_heap::metrics::CacheMetrics;
use lru_heap::{ConfigError, Heap, LruCache, PriorityQueue};
use std::num::NonZeroUsize;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

/// Drains a queue into a vector in dequeue order
fn drain<T, F: Fn(&T, &T) -> bool>(queue: &mut PriorityQueue<T, F>) -> Vec<T> {
    let mut out = Vec::with_capacity(queue.len());
    while let Some(value) = queue.dequeue() {
        out.push(value);
    }
    out
}

// ============================================================================
// LRU CORRECTNESS
// ============================================================================
// LRU evicts the Least Recently Used item.
// Correctness criteria:
// 1. Most recently accessed items stay in cache
// 2. Oldest accessed items are evicted first
// 3. Access (get) and update (put) both refresh recency

#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = make_lru(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    // LRU order: 1 (LRU) -> 2 -> 3 (MRU)

    assert!(cache.get(&1).is_some(), "Key 1 should be present");
    assert!(cache.get(&2).is_some(), "Key 2 should be present");
    assert!(cache.get(&3).is_some(), "Key 3 should be present");
    // After gets: LRU order is still 1 -> 2 -> 3

    assert_eq!(cache.put(4, 40), Some((1, 10)), "Key 1 should be evicted");
    assert!(cache.get(&1).is_none());
    assert!(cache.get(&2).is_some(), "Key 2 should remain");
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should be present");
    // LRU order: 2 -> 3 -> 4

    assert_eq!(cache.put(5, 50), Some((2, 20)), "Key 2 should be evicted");
    assert!(cache.get(&3).is_some());
    assert!(cache.get(&4).is_some());
    assert!(cache.get(&5).is_some());
}

#[test]
fn test_lru_overflow_evicts_first_inserted() {
    let capacity = 5;
    let mut cache = make_lru(capacity);

    // k1..k(N+1)
    for i in 1..=capacity + 1 {
        cache.put(i, i * 10);
    }

    assert!(cache.get(&1).is_none(), "Key 1 should be evicted");
    for i in 2..=capacity + 1 {
        assert_eq!(cache.get(&i), Some(&(i * 10)), "Key {} should remain", i);
    }
    assert_eq!(cache.len(), capacity);
}

#[test]
fn test_lru_eviction_order_is_predictable() {
    let mut cache = make_lru(5);

    for i in 0..5 {
        cache.put(i, i * 10);
    }

    for (new_key, evicted) in [(5, 0), (6, 1), (7, 2)] {
        assert_eq!(cache.peek_lru(), Some((&evicted, &(evicted * 10))));
        assert_eq!(cache.put(new_key, new_key * 10), Some((evicted, evicted * 10)));
    }

    let remaining: Vec<i32> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(remaining, vec![7, 6, 5, 4, 3]);
}

#[test]
fn test_lru_get_updates_recency() {
    let mut cache = make_lru(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    // Access key 1 to make it recently used
    assert_eq!(cache.get(&1), Some(&10));
    // LRU order: 2 (LRU) -> 3 -> 1 (MRU)

    cache.put(4, 40);

    assert!(
        cache.get(&1).is_some(),
        "Key 1 should survive due to recent access"
    );
    assert!(
        cache.get(&2).is_none(),
        "Key 2 should be evicted (was LRU after key 1 was accessed)"
    );
    assert!(cache.get(&3).is_some());
    assert!(cache.get(&4).is_some());
}

#[test]
fn test_lru_put_existing_key_updates_in_place() {
    let mut cache = make_lru(2);

    cache.put("k", 1);
    assert_eq!(cache.put("k", 2), None);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"k"), Some(&2));
}

#[test]
fn test_lru_update_refreshes_recency() {
    let mut cache = make_lru(2);

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("a", 3);
    cache.put("c", 4);

    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(&3));
    assert_eq!(cache.get(&"c"), Some(&4));
}

#[test]
fn test_lru_owned_keys_lookup_by_borrowed() {
    let mut cache: LruCache<String, Vec<u8>> = make_lru(2);

    cache.put("alpha".to_string(), vec![1]);
    cache.put("beta".to_string(), vec![2, 2]);

    assert_eq!(cache.get("alpha").map(Vec::len), Some(1));
    assert!(cache.contains("beta"));
    if let Some(v) = cache.get_mut("beta") {
        v.push(3);
    }
    assert_eq!(cache.peek("beta"), Some(&vec![2, 2, 3]));
}

#[test]
fn test_lru_zero_capacity_rejected() {
    assert_eq!(
        LruCache::<u8, u8>::try_new(0).unwrap_err(),
        ConfigError::ZeroCapacity
    );
    assert_eq!(
        LruCacheConfig::new(0).unwrap_err(),
        ConfigError::ZeroCapacity
    );
    assert!(LruCache::<u8, u8>::try_new(1).is_ok());
}

#[test]
fn test_lru_metrics_reflect_activity() {
    let mut cache = make_lru(2);

    cache.put(1, 1);
    cache.put(2, 2);
    cache.put(1, 10);
    cache.put(3, 3);
    cache.get(&1);
    cache.get(&2);

    let metrics = cache.metrics();
    assert_eq!(cache.algorithm_name(), "LRU");
    assert_eq!(metrics.get("requests"), Some(&2.0));
    assert_eq!(metrics.get("cache_hits"), Some(&1.0));
    assert_eq!(metrics.get("cache_misses"), Some(&1.0));
    assert_eq!(metrics.get("insertions"), Some(&3.0));
    assert_eq!(metrics.get("updates"), Some(&1.0));
    assert_eq!(metrics.get("evictions"), Some(&1.0));
}

#[test]
fn test_lru_clone_has_value_semantics() {
    let mut cache = make_lru(2);
    cache.put(1, "one");

    let mut copy = cache.clone();
    copy.put(2, "two");
    copy.put(3, "three");

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.peek(&1), Some(&"one"));
    assert!(!copy.contains(&1));
}

// ============================================================================
// HEAP / PRIORITY QUEUE CORRECTNESS
// ============================================================================
// The root is always the element that ranks first under the predicate.
// Correctness criteria:
// 1. Dequeue order follows the predicate
// 2. Bulk construction and one-by-one enqueueing agree
// 3. Out-of-range index operations are no-ops

#[test]
fn test_queue_from_slice_dequeues_sorted() {
    let mut queue = PriorityQueue::from_slice(&[5, 10, 0, 3], |a: &i32, b: &i32| a < b);
    assert_eq!(drain(&mut queue), vec![0, 3, 5, 10]);
}

#[test]
fn test_queue_max_and_min_direction() {
    let values = [4, 1, 9, 7, 1, 3];

    let mut max = PriorityQueue::from_slice(&values, |a: &i32, b: &i32| a > b);
    let mut min = PriorityQueue::from_slice(&values, |a: &i32, b: &i32| a < b);

    assert_eq!(drain(&mut max), vec![9, 7, 4, 3, 1, 1]);
    assert_eq!(drain(&mut min), vec![1, 1, 3, 4, 7, 9]);
}

#[test]
fn test_queue_construction_paths_agree() {
    let values = vec![12, -4, 7, 7, 0, 33, -18, 5];

    let built = PriorityQueue::from_vec(values.clone(), |a: &i32, b: &i32| a < b);
    let mut enqueued = PriorityQueue::new(|a: &i32, b: &i32| a < b);
    for v in values.iter().rev() {
        enqueued.enqueue(*v);
    }

    assert_eq!(built.into_sorted_vec(), enqueued.into_sorted_vec());
}

#[test]
fn test_queue_change_priority_promotes_element() {
    let mut queue = PriorityQueue::from_vec(vec![5, 10, 0, 3], |a: &i32, b: &i32| a < b);

    let index = queue.index_of(&10).unwrap();
    assert_eq!(queue.change_priority(index, -5), Some(10));
    assert_eq!(queue.peek(), Some(&-5));
    assert_eq!(queue.index_of(&10), None);
    assert_eq!(drain(&mut queue), vec![-5, 0, 3, 5]);
}

#[test]
fn test_out_of_range_index_is_noop() {
    let mut heap = Heap::from_vec(vec![8, 3, 5, 1], |a: &i32, b: &i32| a < b);
    let before = heap.as_slice().to_vec();

    assert_eq!(heap.remove_at(4), None);
    assert_eq!(heap.replace(10, 0), None);
    assert_eq!(heap.as_slice(), before.as_slice());

    let mut queue = PriorityQueue::from_vec(before.clone(), |a: &i32, b: &i32| a < b);
    assert_eq!(queue.change_priority(4, 0), None);
    assert_eq!(queue.len(), 4);
    assert_eq!(drain(&mut queue), vec![1, 3, 5, 8]);
}

#[test]
fn test_heap_remove_at_every_index() {
    let values = [15, 3, 9, 27, 1, 6, 20, 11, 4];

    for index in 0..values.len() {
        let mut heap = Heap::from_vec(values.to_vec(), |a: &i32, b: &i32| a > b);
        let removed = heap.remove_at(index).unwrap();

        let mut expected: Vec<i32> = values.iter().copied().filter(|v| *v != removed).collect();
        expected.sort_by(|a, b| b.cmp(a));

        let mut drained = Vec::new();
        while let Some(v) = heap.remove() {
            drained.push(v);
        }
        assert_eq!(drained, expected, "after removing index {}", index);
    }
}

#[test]
fn test_queue_with_struct_priorities() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        id: u32,
        priority: u8,
    }

    let mut queue = PriorityQueue::new(|a: &Job, b: &Job| a.priority > b.priority);
    queue.enqueue(Job { id: 1, priority: 2 });
    queue.enqueue(Job { id: 2, priority: 9 });
    queue.enqueue(Job { id: 3, priority: 5 });

    assert!(queue.contains(&Job { id: 3, priority: 5 }));
    assert_eq!(
        queue.remove(&Job { id: 3, priority: 5 }).map(|j| j.id),
        Some(3)
    );
    let ids: Vec<u32> = queue.into_sorted_vec().into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
