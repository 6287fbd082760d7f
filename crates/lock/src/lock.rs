//! Distributed lock over a versioned store
//!
//! ## Design
//!
//! The lock keeps no state in the store beyond the value stored under its
//! name. The store does not know the key is a lock.
//!
//! - Unlocked: the value is `""` (or the key is absent)
//! - Locked: the value is the holder's identity token
//!
//! Acquisition is a read followed by a conditional write of our identity at
//! the version just read. Of any number of clients presenting the same
//! version, the store lets exactly one write through; everyone else sees a
//! version mismatch, waits, and reads again.
//!
//! Release reads the value, and only if it is our identity writes `""` back
//! at the version read. A mismatch on that write is not retried.
//!
//! ## Fairness
//!
//! None. Waiters poll; whoever wins the next conditional write gets the lock.
//! Under heavy contention a waiter can starve.
//!
//! ## Sharing an instance
//!
//! Any non-empty value means held, our own identity included. A `Lock` may be
//! shared between threads (it is `Sync`); they then exclude each other the
//! same way separate instances do. Because they share one identity, the
//! ownership check in `release` cannot tell them apart, so only the thread
//! that acquired should release.

use crate::error::{LockError, Result};
use crate::retry::RetryPolicy;
use occlock_client::KvClient;
use occlock_core::{Error, Version};
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Value stored under the lock name while nobody holds it
pub const UNLOCKED: &str = "";

/// What a call to [`Lock::release`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The lock was held by this instance and is now unlocked
    Released,
    /// The lock was not held by this instance; nothing was written
    NotHeld,
    /// The clearing write was rejected or could not be confirmed
    Lost,
}

/// Result of one read-then-claim round
enum Attempt {
    Acquired,
    Busy,
}

/// Mutual exclusion across clients sharing a store and a lock name
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use occlock_client::LocalClient;
/// use occlock_engine::KvServer;
/// use occlock_lock::{Lock, ReleaseOutcome};
///
/// let server = Arc::new(KvServer::default());
/// let lock = Lock::new(LocalClient::new(server), "jobs");
///
/// lock.acquire().unwrap();
/// // critical section
/// assert_eq!(lock.release(), ReleaseOutcome::Released);
/// ```
pub struct Lock<C: KvClient> {
    client: C,
    name: String,
    identity: String,
    policy: RetryPolicy,
}

impl<C: KvClient> Lock<C> {
    /// Create a lock with a fresh random identity and the default policy
    ///
    /// Makes sure the key exists by creating it as unlocked if absent.
    pub fn new(client: C, name: impl Into<String>) -> Self {
        let lock = Self {
            client,
            name: name.into(),
            identity: Uuid::new_v4().to_string(),
            policy: RetryPolicy::default(),
        };
        lock.ensure_key();
        lock
    }

    /// Create a lock with an explicit identity token
    ///
    /// Tokens must be unique per holder; two instances sharing a token still
    /// exclude each other, but either one can release the other's hold.
    pub fn with_identity(
        client: C,
        name: impl Into<String>,
        identity: impl Into<String>,
    ) -> Result<Self> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(LockError::EmptyIdentity);
        }
        let lock = Self {
            client,
            name: name.into(),
            identity,
            policy: RetryPolicy::default(),
        };
        lock.ensure_key();
        Ok(lock)
    }

    /// Replace the retry policy
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Key this lock uses in the store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token stored while this instance holds the lock
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Retry policy used by [`Lock::acquire`]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Client used to reach the store
    pub fn client(&self) -> &C {
        &self.client
    }

    fn ensure_key(&self) {
        // Losing this race to another client is fine; either way the key exists.
        match self.client.put(&self.name, UNLOCKED, Version::ZERO) {
            Ok(()) => trace!(lock = %self.name, "Created lock key"),
            Err(e) => trace!(lock = %self.name, error = %e, "Lock key not created"),
        }
    }

    fn attempt(&self) -> Attempt {
        let observed = match self.client.get(&self.name) {
            Ok((value, version)) if value == UNLOCKED => version,
            Ok(_) => return Attempt::Busy,
            Err(Error::NoKey) => Version::ZERO,
            Err(e) => {
                warn!(lock = %self.name, error = %e, "Failed to read lock state");
                return Attempt::Busy;
            }
        };

        match self.client.put(&self.name, &self.identity, observed) {
            Ok(()) => Attempt::Acquired,
            Err(Error::Version) | Err(Error::NoKey) => {
                trace!(lock = %self.name, observed = %observed, "Lost claim race");
                Attempt::Busy
            }
            Err(e) => {
                warn!(lock = %self.name, error = %e, "Failed to claim lock");
                Attempt::Busy
            }
        }
    }

    /// Make a single attempt to take the lock, without waiting
    pub fn try_acquire(&self) -> bool {
        matches!(self.attempt(), Attempt::Acquired)
    }

    /// Take the lock, waiting as long as the retry policy allows
    ///
    /// With an unbounded policy this blocks until the lock is held and never
    /// returns an error.
    pub fn acquire(&self) -> Result<()> {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            if let Attempt::Acquired = self.attempt() {
                debug!(lock = %self.name, holder = %self.identity, attempts, "Lock acquired");
                return Ok(());
            }
            if !self.policy.allows(attempts.saturating_add(1)) {
                debug!(lock = %self.name, attempts, "Giving up on lock");
                return Err(LockError::AttemptsExhausted { attempts });
            }
            self.policy.pause();
        }
    }

    /// Give up the lock if this instance holds it
    ///
    /// Never retries and never fails: a missing key or a lock held by
    /// someone else is [`ReleaseOutcome::NotHeld`], a rejected clearing
    /// write is [`ReleaseOutcome::Lost`].
    pub fn release(&self) -> ReleaseOutcome {
        let (value, version) = match self.client.get(&self.name) {
            Ok(state) => state,
            Err(Error::NoKey) => return ReleaseOutcome::NotHeld,
            Err(e) => {
                warn!(lock = %self.name, error = %e, "Failed to read lock state on release");
                return ReleaseOutcome::Lost;
            }
        };

        if value != self.identity {
            trace!(lock = %self.name, "Release by non-holder ignored");
            return ReleaseOutcome::NotHeld;
        }

        match self.client.put(&self.name, UNLOCKED, version) {
            Ok(()) => {
                debug!(lock = %self.name, holder = %self.identity, "Lock released");
                ReleaseOutcome::Released
            }
            Err(e) => {
                debug!(lock = %self.name, error = %e, "Release write rejected");
                ReleaseOutcome::Lost
            }
        }
    }

    /// Take the lock and return a guard that releases it when dropped
    pub fn lock(&self) -> Result<LockGuard<'_, C>> {
        self.acquire()?;
        Ok(LockGuard {
            lock: self,
            released: false,
        })
    }

    /// Current holder's identity, or `None` when unlocked
    pub fn holder(&self) -> Result<Option<String>> {
        match self.client.get(&self.name) {
            Ok((value, _)) if value == UNLOCKED => Ok(None),
            Ok((value, _)) => Ok(Some(value)),
            Err(Error::NoKey) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether the store currently records this instance as the holder
    pub fn is_held_by_me(&self) -> bool {
        matches!(self.holder(), Ok(Some(holder)) if holder == self.identity)
    }
}

impl<C: KvClient> std::fmt::Debug for Lock<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lock")
            .field("name", &self.name)
            .field("identity", &self.identity)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Holds a [`Lock`] until dropped or unlocked
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a, C: KvClient> {
    lock: &'a Lock<C>,
    released: bool,
}

impl<C: KvClient> LockGuard<'_, C> {
    /// Release now and report what happened
    pub fn unlock(mut self) -> ReleaseOutcome {
        self.released = true;
        self.lock.release()
    }
}

impl<C: KvClient> Drop for LockGuard<'_, C> {
    fn drop(&mut self) {
        if !self.released {
            self.lock.release();
        }
    }
}
