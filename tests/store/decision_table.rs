//! Put decision table and read behaviour

use crate::common::*;
use occlock::prelude::*;
use occlock::Error;

// ============================================================================
// Absent keys
// ============================================================================

#[test]
fn test_get_absent_key_is_idempotent() {
    init_tracing();
    for (name, _server, client) in setups() {
        for _ in 0..3 {
            let err = Error::from(client.get("missing").unwrap_err());
            assert!(err.is_no_key(), "{name}: {err}");
        }
    }
}

#[test]
fn test_create_with_version_zero() {
    init_tracing();
    for (name, _server, client) in setups() {
        client.put("k", "v", Version::ZERO).unwrap();
        assert_eq!(client.get("k").unwrap(), ("v".to_string(), Version::FIRST), "{name}");
    }
}

#[test]
fn test_put_absent_with_nonzero_version() {
    init_tracing();
    for (name, server, client) in setups() {
        let err = Error::from(client.put("k", "v", Version::new(5)).unwrap_err());
        assert!(err.is_no_key(), "{name}: {err}");
        assert!(!server.store().contains("k"), "{name}");
    }
}

// ============================================================================
// Present keys
// ============================================================================

#[test]
fn test_stale_version_leaves_entry_unchanged() {
    init_tracing();
    for (name, _server, client) in setups() {
        client.put("k", "a", Version::ZERO).unwrap();
        client.put("k", "b", Version::FIRST).unwrap();

        for stale in [Version::ZERO, Version::FIRST, Version::new(3), Version::new(u64::MAX)] {
            let err = Error::from(client.put("k", "c", stale).unwrap_err());
            assert!(err.is_conflict(), "{name}: {stale}");
        }
        assert_eq!(client.get("k").unwrap(), ("b".to_string(), Version::new(2)), "{name}");
    }
}

#[test]
fn test_matching_version_increments_by_one() {
    init_tracing();
    for (name, _server, client) in setups() {
        client.put("k", "0", Version::ZERO).unwrap();
        for n in 1..=20u64 {
            client.put("k", &n.to_string(), Version::new(n)).unwrap();
            assert_eq!(client.get("k").unwrap(), (n.to_string(), Version::new(n + 1)), "{name}");
        }
    }
}

#[test]
fn test_empty_value_is_a_real_entry() {
    init_tracing();
    for (name, _server, client) in setups() {
        client.put("k", "", Version::ZERO).unwrap();
        assert_eq!(client.get("k").unwrap(), (String::new(), Version::FIRST), "{name}");
        let err = Error::from(client.put("k", "x", Version::ZERO).unwrap_err());
        assert!(err.is_conflict(), "{name}");
    }
}

#[test]
fn test_keys_are_independent() {
    init_tracing();
    for (name, _server, client) in setups() {
        client.put("a", "1", Version::ZERO).unwrap();
        client.put("a", "2", Version::FIRST).unwrap();
        client.put("b", "1", Version::ZERO).unwrap();
        assert_eq!(client.get("a").unwrap().1, Version::new(2), "{name}");
        assert_eq!(client.get("b").unwrap().1, Version::FIRST, "{name}");
    }
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_documented_sequence() {
    init_tracing();
    for (name, server, client) in setups() {
        assert!(Error::from(client.get("x").unwrap_err()).is_no_key(), "{name}");
        client.put("x", "a", Version::ZERO).unwrap();
        assert_eq!(client.get("x").unwrap(), ("a".to_string(), Version::FIRST));
        assert!(Error::from(client.put("x", "b", Version::ZERO).unwrap_err()).is_conflict());
        client.put("x", "b", Version::FIRST).unwrap();
        assert_eq!(client.get("x").unwrap(), ("b".to_string(), Version::new(2)));
        assert!(Error::from(client.put("y", "q", Version::new(3)).unwrap_err()).is_no_key());

        let stats = server.stats();
        assert_eq!(stats.gets, 3, "{name}");
        assert_eq!(stats.puts, 4, "{name}");
        assert_eq!(stats.puts_applied, 2, "{name}");
        assert_eq!(stats.no_key, 2, "{name}");
        assert_eq!(stats.version_conflicts, 1, "{name}");
    }
}

#[test]
fn test_config_selects_backend() {
    init_tracing();
    for backend in [Backend::Global, Backend::Sharded] {
        let config = Config::builder().backend(backend).build().unwrap();
        let server = std::sync::Arc::new(config.server());
        let client = LocalClient::new(server);
        client.put("k", "v", Version::ZERO).unwrap();
        assert_eq!(client.get("k").unwrap().0, "v");
    }
}
