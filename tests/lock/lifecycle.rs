//! Acquire and release across instances

use crate::common::*;
use occlock::prelude::*;
use occlock::Error;
use std::sync::Arc;

#[test]
fn test_reacquire_by_other_instance_after_release() {
    init_tracing();
    for (name, _server, client) in setups() {
        let a = Lock::new(Arc::clone(&client), "l");
        let b = Lock::new(Arc::clone(&client), "l");

        for _ in 0..5 {
            a.acquire().unwrap();
            assert_eq!(b.holder().unwrap().as_deref(), Some(a.identity()), "{name}");
            assert_eq!(a.release(), ReleaseOutcome::Released);

            b.acquire().unwrap();
            assert!(!a.is_held_by_me(), "{name}");
            assert_eq!(b.release(), ReleaseOutcome::Released);
        }
        assert_eq!(a.holder().unwrap(), None, "{name}");
    }
}

#[test]
fn test_lock_key_visible_to_plain_clients() {
    init_tracing();
    for (name, _server, client) in setups() {
        let lock = Lock::with_identity(Arc::clone(&client), "l", "worker-7").unwrap();
        assert_eq!(client.get("l").unwrap(), (String::new(), Version::FIRST), "{name}");

        lock.acquire().unwrap();
        assert_eq!(client.get("l").unwrap(), ("worker-7".to_string(), Version::new(2)));

        lock.release();
        assert_eq!(client.get("l").unwrap(), (String::new(), Version::new(3)));
    }
}

#[test]
fn test_release_by_non_holder_changes_nothing() {
    init_tracing();
    for (name, server, client) in setups() {
        let holder = Lock::new(Arc::clone(&client), "l");
        let other = Lock::new(Arc::clone(&client), "l");
        holder.acquire().unwrap();

        let before = client.get("l").unwrap();
        let puts = server.stats().puts;
        assert_eq!(other.release(), ReleaseOutcome::NotHeld, "{name}");
        assert_eq!(client.get("l").unwrap(), before, "{name}");
        assert_eq!(server.stats().puts, puts, "{name}");
    }
}

#[test]
fn test_lost_release_when_key_overwritten() {
    init_tracing();
    for (name, _server, client) in setups() {
        let lock = Lock::new(Arc::clone(&client), "l");
        lock.acquire().unwrap();

        // Someone forcibly clears and the lock is taken by another instance.
        let (_, version) = client.get("l").unwrap();
        client.put("l", "", version).unwrap();
        let thief = Lock::new(Arc::clone(&client), "l");
        thief.acquire().unwrap();

        assert_eq!(lock.release(), ReleaseOutcome::NotHeld, "{name}");
        assert!(thief.is_held_by_me(), "{name}");
    }
}

#[test]
fn test_bounded_policy_through_facade_error() {
    init_tracing();
    let config = Config::builder()
        .retry(RetryPolicy::immediate().with_max_attempts(4))
        .build()
        .unwrap();
    let server = Arc::new(config.server());

    let holder = config.new_lock(LocalClient::new(Arc::clone(&server)), "l");
    let waiter = config.new_lock(LocalClient::new(server), "l");
    holder.acquire().unwrap();

    let err = Error::from(waiter.acquire().unwrap_err());
    assert!(matches!(err, Error::LockUnavailable { attempts: 4 }));
    assert!(err.is_retryable());
}

#[test]
fn test_guard_drop_on_panic_releases() {
    init_tracing();
    let server = Arc::new(KvServer::default());
    let client = LocalClient::new(Arc::clone(&server));

    let result = std::thread::spawn({
        let client = client.clone();
        move || {
            let lock = Lock::new(client, "l");
            let _guard = lock.lock().unwrap();
            panic!("worker failed while holding the lock");
        }
    })
    .join();
    assert!(result.is_err());

    let lock = Lock::new(client, "l").with_policy(RetryPolicy::immediate().with_max_attempts(1));
    lock.acquire().unwrap();
}
