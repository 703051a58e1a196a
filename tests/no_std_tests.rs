#![no_std]
extern crate alloc;
extern crate lru_heap;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use lru_heap::config::LruCacheConfig;
use lru_heap::{Heap, LruCache, PriorityQueue};

// Helper to create caches with the init pattern
fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // This should evict key1
    cache.put(key3.clone(), 3);

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_lru_display_in_no_std() {
    let mut cache = make_lru(3);
    cache.put(1, "one");
    cache.put(2, "two");

    assert_eq!(
        cache.to_string(),
        "LRU Cache(2)\nKey: 2 Value: two\nKey: 1 Value: one\n"
    );
    assert_eq!(format!("{:?}", cache), "LruCache { capacity: 3, len: 2 }");
}

#[test]
fn test_heap_in_no_std() {
    let mut heap = Heap::new(|a: &String, b: &String| a.len() > b.len());

    for word in ["a", "abcd", "ab", "abc"] {
        heap.insert(String::from(word));
    }

    assert_eq!(heap.peek().map(String::as_str), Some("abcd"));
    let idx = heap.index_of(&String::from("a")).unwrap();
    assert_eq!(heap.replace(idx, String::from("abcdef")), Some(String::from("a")));

    let mut lengths = Vec::new();
    while let Some(word) = heap.remove() {
        lengths.push(word.len());
    }
    assert_eq!(lengths, vec![6, 4, 3, 2]);
}

#[test]
fn test_priority_queue_in_no_std() {
    let keys: Vec<String> = (0..5).map(|i| format!("key{i}")).collect();

    let mut queue = PriorityQueue::from_slice(&keys, |a: &String, b: &String| a > b);
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.dequeue(), Some(String::from("key4")));

    queue.enqueue(String::from("key9"));
    assert_eq!(queue.peek().map(String::as_str), Some("key9"));
    assert!(queue.contains(&String::from("key0")));
}

#[test]
fn test_complex_types_in_no_std() {
    let mut cache = make_lru(2);

    let key1 = Vec::<u8>::from([1, 2, 3]);
    let value1 = Vec::<i32>::from([10, 20, 30]);

    let key2 = Vec::<u8>::from([4, 5, 6]);
    let value2 = Vec::<i32>::from([40, 50, 60]);

    cache.put(key1.clone(), value1.clone());
    cache.put(key2.clone(), value2.clone());

    assert_eq!(*cache.get(&key1).unwrap(), value1);
    assert_eq!(*cache.get(&key2).unwrap(), value2);
}
