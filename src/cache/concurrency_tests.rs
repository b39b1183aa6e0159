//! Concurrency Tests for Cache Module
//!
//! Hammers a shared store from many threads and checks that every observation
//! is consistent with some serial order of the operations.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::cache::{CacheStore, Entry, Status};

const WORKERS: usize = 100;
const ROUNDS: usize = 200;
const KEY: &str = "foo.txt";

/// Builds an entry whose content is `len` copies of the writer id, so a torn
/// write would show up as mixed bytes.
fn writer_entry(id: u8, len: usize) -> Entry {
    let mut entry = Entry::new(KEY, format!("worker/{id}"), vec![id; len]);
    entry.modified_time = i64::from(id);
    entry
}

/// Asserts an observed entry was written whole by exactly one worker.
fn assert_untorn(entry: &Entry) {
    assert_eq!(entry.status, Status::Ok);
    assert!(entry.size_matches(), "size {} vs {} bytes", entry.size, entry.content.len());

    let id = entry.modified_time;
    assert_eq!(entry.content_type, format!("worker/{id}"));
    assert!(entry.content.iter().all(|b| i64::from(*b) == id));
}

#[test]
fn test_concurrent_get_put_delete_same_key() {
    let store = Arc::new(CacheStore::new());
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let id = worker as u8;
                barrier.wait();
                for round in 0..ROUNDS {
                    if let Ok(entry) = store.get(KEY) {
                        assert_untorn(&entry);
                    }
                    let stored = store.put(writer_entry(id, 1 + (worker + round) % 256));
                    assert_untorn(&stored);
                    if let Ok(entry) = store.get(KEY) {
                        assert_untorn(&entry);
                    }
                    store.delete(KEY);
                    if let Ok(entry) = store.get(KEY) {
                        assert_untorn(&entry);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    // Every worker ends with a delete, but another worker's put may land after it.
    match store.get(KEY) {
        Ok(entry) => assert_untorn(&entry),
        Err(_) => assert!(store.is_empty()),
    }
    assert!(store.len() <= 1);
}

#[test]
fn test_concurrent_puts_last_writer_wins() {
    let store = Arc::new(CacheStore::new());
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.put(writer_entry(worker as u8, 4096));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let entry = store.get(KEY).expect("some put must survive");
    assert_untorn(&entry);
    assert!((0..WORKERS as i64).contains(&entry.modified_time));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_puts_distinct_keys_not_lost() {
    let store = Arc::new(CacheStore::new());

    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let store = &store;
            scope.spawn(move || {
                for round in 0..ROUNDS {
                    let key = format!("{worker}/{round}");
                    store.put(Entry::new(key.clone(), "text/plain", key));
                }
            });
        }
    });

    assert_eq!(store.len(), WORKERS * ROUNDS);
    let sample = store.get("42/7").unwrap();
    assert_eq!(sample.content, b"42/7");
}
