//! Request counters for a server

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters, updated with relaxed atomics
#[derive(Debug, Default)]
pub(crate) struct Counters {
    gets: AtomicU64,
    puts: AtomicU64,
    puts_applied: AtomicU64,
    no_key: AtomicU64,
    version_conflicts: AtomicU64,
}

impl Counters {
    pub(crate) fn record_get(&self, found: bool) {
        self.gets.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.no_key.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_put(&self, status: occlock_wire::Status) {
        use occlock_wire::Status;

        self.puts.fetch_add(1, Ordering::Relaxed);
        let counter = match status {
            Status::Ok => &self.puts_applied,
            Status::ErrNoKey => &self.no_key,
            Status::ErrVersion => &self.version_conflicts,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ServerStats {
        ServerStats {
            gets: self.gets.load(Ordering::Relaxed),
            puts: self.puts.load(Ordering::Relaxed),
            puts_applied: self.puts_applied.load(Ordering::Relaxed),
            no_key: self.no_key.load(Ordering::Relaxed),
            version_conflicts: self.version_conflicts.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of a server's counters
///
/// Counters are read independently, so a snapshot taken while requests are
/// in flight may be slightly inconsistent across fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerStats {
    /// Get requests handled
    pub gets: u64,
    /// Put requests handled
    pub puts: u64,
    /// Puts that installed a new version
    pub puts_applied: u64,
    /// Gets and puts answered with `ErrNoKey`
    pub no_key: u64,
    /// Puts answered with `ErrVersion`
    pub version_conflicts: u64,
}
