//! Usage Demonstration
//!
//! Runs a small stock-ticker workload through an LRU cache and a task
//! workload through a priority queue, printing the state after each step.
//!
//! Run with `cargo run --example usage`.

use lru_heap::metrics::CacheMetrics;
use lru_heap::{LruCache, PriorityQueue};

fn main() {
    ticker_cache();
    println!();
    task_queue();
}

fn ticker_cache() {
    println!("LRU cache of stock quotes");
    println!("=========================\n");

    let mut lru = match LruCache::try_new(7) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("failed to create cache: {err}");
            return;
        }
    };

    let quotes = [
        ("AAPL", 114.63),
        ("GOOG", 533.75),
        ("YHOO", 50.67),
        ("TWTR", 38.91),
        ("BABA", 109.89),
        ("YELP", 55.17),
        ("BABA", 109.80),
        ("TSLA", 231.43),
        ("AAPL", 113.41),
        ("GOOG", 533.60),
        ("AAPL", 113.01),
    ];
    for (symbol, price) in quotes {
        if let Some((evicted, old)) = lru.put(symbol, price) {
            println!("evicted {evicted} ({old})");
        }
    }

    match lru.get(&"AAPL") {
        Some(price) => println!("Key: AAPL Value: {price}"),
        None => println!("Item not found."),
    }
    println!();

    print!("{lru}");

    lru.put("MSFT", 47.59);
    println!("\nafter adding MSFT the least recently used quote is gone:");
    print!("{lru}");

    println!("\nmetrics ({}):", lru.algorithm_name());
    for (name, value) in lru.metrics() {
        println!("  {name:<14} {value:.2}");
    }
}

fn task_queue() {
    println!("Priority queue of tasks");
    println!("=======================\n");

    let tasks = vec![("Task1", 10), ("Task2", 1), ("Task3", 11), ("Task4", 5)];

    // Lowest number runs first
    let mut queue = PriorityQueue::from_vec(tasks, |a, b| a.1 < b.1);
    println!("queued {} tasks, next up: {:?}", queue.len(), queue.peek());

    if let Some(index) = queue.index_of(&("Task3", 11)) {
        queue.change_priority(index, ("Task3", 0));
        println!("Task3 bumped to priority 0");
    }

    while let Some((name, priority)) = queue.dequeue() {
        println!("  running {name} (priority {priority})");
    }
}
