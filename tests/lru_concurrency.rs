// ==============================================
// LRU CONCURRENCY TESTS (integration)
// ==============================================
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use ringcache::policy::lru::LruCache;

mod shared_access {
    use super::*;

    #[test]
    fn test_concurrent_put_get_never_exceeds_capacity() {
        let capacity = 64;
        let cache: LruCache<String, String> = LruCache::new(capacity);
        let num_threads = 8;
        let operations_per_thread = 1_000;
        let barrier = Arc::new(Barrier::new(num_threads));
        let over_capacity = Arc::new(AtomicBool::new(false));

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                let over_capacity = over_capacity.clone();

                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..operations_per_thread {
                        let key = format!("thread_{}_{}", thread_id, i);
                        cache.put(key.clone(), format!("value_{}", i));

                        if let Some(value) = cache.get(key.as_str()) {
                            assert_eq!(*value, format!("value_{}", i));
                        }
                        if cache.size() > capacity {
                            over_capacity.store(true, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!over_capacity.load(Ordering::SeqCst));
        assert_eq!(cache.size(), capacity);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_readers_and_writers_on_shared_keys() {
        let cache: LruCache<u32, u32> = LruCache::new(32);
        for i in 0..32 {
            cache.put(i, i);
        }

        let num_threads = 6;
        let barrier = Arc::new(Barrier::new(num_threads));
        let hits = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                let hits = hits.clone();

                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..2_000u32 {
                        let key = i % 48;
                        match (thread_id + i as usize) % 3 {
                            0 => cache.put(key, key),
                            1 => {
                                if let Some(v) = cache.get(&key) {
                                    // Values are always written equal to their key.
                                    assert_eq!(*v, key);
                                    hits.fetch_add(1, Ordering::Relaxed);
                                }
                            },
                            _ => {
                                let _ = cache.peek(&key);
                                let _ = cache.contains(&key);
                            },
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(hits.load(Ordering::Relaxed) > 0);
        assert!(cache.size() <= 32);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_mixed_remove_and_clear() {
        let cache: LruCache<u64, u64> = LruCache::new(16);
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4u64)
            .map(|thread_id| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..1_000u64 {
                        let key = (thread_id * 7 + i) % 40;
                        match i % 10 {
                            0 => {
                                cache.remove(&key);
                            },
                            1 if thread_id == 0 && i % 200 == 1 => cache.clear(),
                            2 => {
                                cache.pop_lru();
                            },
                            _ => cache.put(key, i),
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.size() <= 16);
        cache.check_invariants().unwrap();
    }
}

mod iteration {
    use super::*;

    #[test]
    fn test_iteration_concurrent_with_writes_terminates() {
        let capacity = 50;
        let cache: LruCache<u64, u64> = LruCache::new(capacity);
        let stop = Arc::new(AtomicBool::new(false));
        let barrier = Arc::new(Barrier::new(3));

        let writers: Vec<_> = (0..2u64)
            .map(|thread_id| {
                let cache = cache.clone();
                let stop = stop.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    let mut i = 0u64;
                    while !stop.load(Ordering::Relaxed) {
                        cache.put(thread_id * 1_000_000 + i, i);
                        cache.get(&(thread_id * 1_000_000 + i / 2));
                        i += 1;
                    }
                })
            })
            .collect();

        barrier.wait();
        for _ in 0..200 {
            let seen = cache.iter().count();
            assert!(seen <= capacity);
        }
        stop.store(true, Ordering::Relaxed);

        for handle in writers {
            handle.join().unwrap();
        }
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_iterator_sees_a_consistent_snapshot() {
        let cache: LruCache<u32, u32> = LruCache::new(8);
        for i in 0..8 {
            cache.put(i, i);
        }

        let writer_cache = cache.clone();
        let iter = cache.iter();
        let writer = thread::spawn(move || {
            // Blocks until the iterator below releases the read lock.
            writer_cache.put(100, 100);
        });

        let keys: Vec<u32> = iter.map(|(k, _)| k).collect();
        assert_eq!(keys, vec![7, 6, 5, 4, 3, 2, 1, 0]);

        writer.join().unwrap();
        assert_eq!(cache.keys()[0], 100);
        assert!(!cache.contains(&0));
    }
}
