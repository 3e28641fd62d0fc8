//! Bounded audit trail of authorization decisions.
//!
//! An authorization layer that cannot answer "who was refused, and when"
//! is incomplete. [`DecisionLog`] keeps a fixed-size in-process record of
//! matrix decisions with FIFO eviction, so a burst of probing cannot grow
//! memory without bound.
//!
//! # Design Principles
//!
//! - **Bounded memory**: fixed capacity regardless of request volume;
//!   actor labels are truncated to a per-entry byte cap
//! - **FIFO eviction**: oldest entries dropped first, recent activity kept
//! - **RwLock-based**: concurrent readers, exclusive writers
//! - **Decisions, not secrets**: entries hold enum values, a verdict, and a
//!   bounded caller-supplied label — never failure detail or session data
//!
//! # Example
//!
//! ```rust
//! use reconguard::{DecisionLog, ExceptionType, Role};
//!
//! // 1000 entries, actor labels capped at 128 bytes
//! let log = DecisionLog::new(1000, 128);
//!
//! // Consult the matrix and record the outcome in one step
//! let allowed = log.check_and_record(
//!     Role::Finance,
//!     ExceptionType::Duplicate,
//!     "user:f.ivarsson",
//! );
//! assert!(!allowed);
//!
//! for entry in log.get_recent(10) {
//!     println!("{} {} {} allowed={}", entry.timestamp, entry.role, entry.exception, entry.allowed);
//! }
//! ```

use crate::matrix;
use crate::taxonomy::{ExceptionType, Role};
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single recorded authorization decision.
///
/// Uses `Arc<str>` for the actor label so cloning an entry out of the log
/// is an atomic refcount bump, not an allocation.
#[derive(Clone, Debug)]
pub struct DecisionEntry {
    /// Unix timestamp of the decision.
    pub timestamp: u64,
    /// Role the caller presented.
    pub role: Role,
    /// Exception category the action targeted.
    pub exception: ExceptionType,
    /// The matrix verdict.
    pub allowed: bool,
    /// Caller-supplied actor label (user id, session tag), truncated.
    pub actor: Arc<str>,
}

/// Fixed-size ring with exact allocation (no growth).
struct Ring {
    entries: Box<[Option<DecisionEntry>]>,
    tail: usize,
    head: usize,
    len: usize,
}

impl Ring {
    fn new(capacity: usize) -> Self {
        Self {
            entries: std::iter::repeat_with(|| None)
                .take(capacity)
                .collect::<Box<[Option<DecisionEntry>]>>(),
            tail: 0,
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, entry: DecisionEntry) -> Option<DecisionEntry> {
        let evicted = self.entries[self.tail].replace(entry);
        self.tail = (self.tail + 1) % self.entries.len();

        if self.len < self.entries.len() {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % self.entries.len();
        }

        evicted
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &DecisionEntry> {
        let head = self.head;
        let len = self.len;
        let cap = self.entries.len();

        (0..len).filter_map(move |i| {
            let idx = (head + i) % cap;
            self.entries[idx].as_ref()
        })
    }

    fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

/// Ring-buffer audit log of matrix decisions with bounded memory usage.
///
/// Clones share state: handing a clone to each request handler gives every
/// handler a view of one shared log. Reads scale across threads via
/// `RwLock`; a poisoned lock is absorbed rather than propagated, so the
/// audit path can never panic a request out of existence.
pub struct DecisionLog {
    ring: Arc<RwLock<Ring>>,
    max_entries: usize,
    max_actor_bytes: usize,
    eviction_count: Arc<AtomicU64>,
    denial_count: Arc<AtomicU64>,
}

impl DecisionLog {
    /// Create a new decision log.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - entries kept before FIFO eviction (min 1)
    /// * `max_actor_bytes` - byte cap per actor label
    pub fn new(max_entries: usize, max_actor_bytes: usize) -> Self {
        let bounded = max_entries.max(1);
        Self {
            ring: Arc::new(RwLock::new(Ring::new(bounded))),
            max_entries: bounded,
            max_actor_bytes,
            eviction_count: Arc::new(AtomicU64::new(0)),
            denial_count: Arc::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    fn read_ring(&self) -> RwLockReadGuard<'_, Ring> {
        match self.ring.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[inline]
    fn write_ring(&self) -> RwLockWriteGuard<'_, Ring> {
        match self.ring.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record a decision made elsewhere (e.g. by a server-side check that
    /// already consulted the matrix).
    pub fn record(&self, role: Role, exception: ExceptionType, allowed: bool, actor: &str) {
        if !allowed {
            self.denial_count.fetch_add(1, Ordering::Relaxed);
        }

        let entry = DecisionEntry {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            role,
            exception,
            allowed,
            actor: Arc::from(truncate_to_bytes(actor, self.max_actor_bytes).as_ref()),
        };

        let mut ring = self.write_ring();
        if ring.push(entry).is_some() {
            self.eviction_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Consult the permission matrix, record the outcome, return the verdict.
    ///
    /// The verdict is exactly `matrix::is_authorized(role, exception)`;
    /// recording never alters it.
    #[must_use]
    pub fn check_and_record(&self, role: Role, exception: ExceptionType, actor: &str) -> bool {
        let allowed = matrix::is_authorized(role, exception);
        self.record(role, exception, allowed, actor);
        allowed
    }

    /// The N most recent decisions, newest first.
    pub fn get_recent(&self, count: usize) -> Vec<DecisionEntry> {
        let ring = self.read_ring();
        ring.iter().rev().take(count).cloned().collect()
    }

    /// All retained decisions, newest first.
    pub fn get_all(&self) -> Vec<DecisionEntry> {
        let ring = self.read_ring();
        ring.iter().rev().cloned().collect()
    }

    /// Retained decisions matching a predicate (e.g. denials for one actor).
    pub fn get_filtered<F>(&self, predicate: F) -> Vec<DecisionEntry>
    where
        F: Fn(&DecisionEntry) -> bool,
    {
        let ring = self.read_ring();
        ring.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Current number of retained entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.read_ring().len()
    }

    /// Whether the log holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry capacity before eviction begins.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Whether the log is at capacity.
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_entries
    }

    /// Total evictions since creation.
    ///
    /// A high eviction rate on a reasonably sized log indicates sustained
    /// probing volume.
    #[inline]
    pub fn eviction_count(&self) -> u64 {
        self.eviction_count.load(Ordering::Relaxed)
    }

    /// Total denials recorded since creation, including evicted ones.
    #[inline]
    pub fn denial_count(&self) -> u64 {
        self.denial_count.load(Ordering::Relaxed)
    }

    /// Clear all retained entries (counters are preserved).
    pub fn clear(&self) {
        self.write_ring().clear();
    }
}

impl Clone for DecisionLog {
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
            max_entries: self.max_entries,
            max_actor_bytes: self.max_actor_bytes,
            eviction_count: Arc::clone(&self.eviction_count),
            denial_count: Arc::clone(&self.denial_count),
        }
    }
}

/// Truncate a string to a maximum byte length, respecting UTF-8 boundaries.
///
/// Returns `Cow` to avoid allocation when no truncation is needed (the
/// common case for actor labels).
fn truncate_to_bytes(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if max_bytes == 0 {
        return Cow::Borrowed("");
    }
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }

    let indicator = "...[TRUNC]";
    if max_bytes <= indicator.len() {
        return Cow::Borrowed(&indicator[..max_bytes]);
    }
    let max_content = max_bytes - indicator.len();

    let mut idx = max_content;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(indicator);
    }

    let mut out = String::with_capacity(idx + indicator.len());
    out.push_str(&s[..idx]);
    out.push_str(indicator);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_evicts_oldest() {
        let log = DecisionLog::new(3, 128);

        for i in 0..5 {
            let actor = format!("user:{}", i);
            log.record(Role::Analyst, ExceptionType::Duplicate, true, &actor);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.eviction_count(), 2);

        let entries = log.get_all();
        assert_eq!(entries[0].actor.as_ref(), "user:4");
        assert_eq!(entries[2].actor.as_ref(), "user:2");
    }

    #[test]
    fn check_and_record_matches_the_matrix() {
        let log = DecisionLog::new(16, 128);

        assert!(log.check_and_record(Role::Operations, ExceptionType::Duplicate, "user:a"));
        assert!(!log.check_and_record(Role::Finance, ExceptionType::Duplicate, "user:b"));

        let entries = log.get_all();
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].allowed);
        assert!(entries[1].allowed);
        assert_eq!(log.denial_count(), 1);
    }

    #[test]
    fn denial_count_survives_eviction() {
        let log = DecisionLog::new(2, 128);

        for _ in 0..10 {
            let _ = log.check_and_record(Role::ItAdmin, ExceptionType::ValueMismatch, "user:x");
        }

        assert_eq!(log.len(), 2);
        assert_eq!(log.denial_count(), 10);
    }

    #[test]
    fn filtering_by_verdict() {
        let log = DecisionLog::new(64, 128);

        for role in Role::ALL {
            let _ = log.check_and_record(role, ExceptionType::PotentialMatch, "user:sweep");
        }

        let denials = log.get_filtered(|e| !e.allowed);
        // POTENTIAL_MATCH admits ADMIN, ANALYST, OPERATIONS
        assert_eq!(denials.len(), 3);
        for entry in denials {
            assert!(matches!(
                entry.role,
                Role::ItAdmin | Role::Finance | Role::Compliance
            ));
        }
    }

    #[test]
    fn actor_labels_are_truncated() {
        let log = DecisionLog::new(8, 32);

        let huge = "x".repeat(1000);
        log.record(Role::Admin, ExceptionType::FormatError, true, &huge);

        let entry = &log.get_recent(1)[0];
        assert!(entry.actor.len() <= 32);
        assert!(entry.actor.contains("TRUNC"));
    }

    #[test]
    fn truncation_respects_utf8() {
        let s = "å".repeat(100);
        let truncated = truncate_to_bytes(&s, 50);

        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.len() <= 50);
    }

    #[test]
    fn truncation_borrows_when_short() {
        let truncated = truncate_to_bytes("user:short", 128);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.as_ref(), "user:short");
    }

    #[test]
    fn clones_share_state() {
        let log_a = DecisionLog::new(16, 128);
        let log_b = log_a.clone();

        log_a.record(Role::Admin, ExceptionType::Duplicate, true, "user:a");

        assert_eq!(log_a.len(), 1);
        assert_eq!(log_b.len(), 1);
    }

    #[test]
    fn clear_keeps_counters() {
        let log = DecisionLog::new(4, 128);
        let _ = log.check_and_record(Role::Finance, ExceptionType::Duplicate, "user:f");

        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.denial_count(), 1);
    }

    #[test]
    fn concurrent_recording_stays_bounded() {
        use std::thread;

        let log = DecisionLog::new(128, 64);
        let mut handles = Vec::new();

        for t in 0..8 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let actor = format!("user:t{}-{}", t, i);
                    let _ =
                        log.check_and_record(Role::Operations, ExceptionType::Duplicate, &actor);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert_eq!(log.len(), 128);
        assert!(log.eviction_count() > 0);
    }

    #[test]
    fn concurrent_reads_do_not_block_each_other() {
        use std::thread;

        let log = DecisionLog::new(100, 64);
        for i in 0..50 {
            let actor = format!("user:{}", i);
            log.record(Role::Analyst, ExceptionType::ValueMismatch, true, &actor);
        }

        let mut handles = Vec::new();
        for _ in 0..8 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    let entries = log.get_recent(10);
                    assert!(!entries.is_empty());
                }
            }));
        }

        for handle in handles {
            handle.join().expect("thread panicked");
        }
    }

    #[test]
    fn entry_clone_shares_actor_allocation() {
        let log = DecisionLog::new(8, 128);
        log.record(Role::Admin, ExceptionType::Duplicate, true, "user:shared");

        let a = log.get_recent(1)[0].clone();
        let b = log.get_recent(1)[0].clone();

        assert!(Arc::ptr_eq(&a.actor, &b.actor));
    }
}
