//! Concurrent conditional writes

use crate::common::*;
use occlock::prelude::*;
use rand::Rng;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_same_version_single_winner() {
    init_tracing();
    const CALLERS: usize = 16;

    for (name, server, client) in setups() {
        client.put("k", "seed", Version::ZERO).unwrap();
        let barrier = Arc::new(Barrier::new(CALLERS));

        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let client = Arc::clone(&client);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    client.put("k", &format!("v{i}"), Version::FIRST)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.is_conflict()))
            .count();

        assert_eq!(winners, 1, "{name}");
        assert_eq!(conflicts, CALLERS - 1, "{name}");
        assert_eq!(client.get("k").unwrap().1, Version::new(2), "{name}");
        assert_eq!(server.stats().version_conflicts, (CALLERS - 1) as u64, "{name}");
    }
}

#[test]
fn test_concurrent_create_single_winner() {
    init_tracing();
    const CALLERS: usize = 8;

    for (name, _server, client) in setups() {
        let barrier = Arc::new(Barrier::new(CALLERS));
        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let client = Arc::clone(&client);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    client.put("new", &i.to_string(), Version::ZERO).is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1, "{name}");
        assert_eq!(client.get("new").unwrap().1, Version::FIRST, "{name}");
    }
}

/// Read-increment-write loops retried on conflict never lose an update
#[test]
fn test_retry_loop_counter() {
    init_tracing();
    const THREADS: usize = 4;
    const INCREMENTS: u64 = 50;

    for (name, _server, client) in setups() {
        client.put("counter", "0", Version::ZERO).unwrap();
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let client = Arc::clone(&client);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    barrier.wait();
                    for _ in 0..INCREMENTS {
                        loop {
                            let (value, version) = client.get("counter").unwrap();
                            let n: u64 = value.parse().unwrap();
                            if rng.gen_bool(0.3) {
                                thread::yield_now();
                            }
                            match client.put("counter", &(n + 1).to_string(), version) {
                                Ok(()) => break,
                                Err(e) if e.is_conflict() => continue,
                                Err(e) => panic!("unexpected error: {e}"),
                            }
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let total = THREADS as u64 * INCREMENTS;
        assert_eq!(
            client.get("counter").unwrap(),
            (total.to_string(), Version::new(total + 1)),
            "{name}"
        );
    }
}

#[test]
fn test_disjoint_keys_do_not_conflict() {
    init_tracing();
    const THREADS: usize = 8;

    for (name, server, client) in setups() {
        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let client = Arc::clone(&client);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let key = format!("key-{t}");
                    barrier.wait();
                    for i in 0..25u64 {
                        client.put(&key, &i.to_string(), Version::new(i)).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(server.stats().version_conflicts, 0, "{name}");
        assert_eq!(server.store().len(), THREADS, "{name}");
    }
}
