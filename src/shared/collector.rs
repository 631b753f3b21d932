//! Error Collector
//!
//! The per-request container that attached errors accumulate in.
//!
//! # Sharing
//!
//! `ErrorCollector` is a handle: cloning it does not copy the entries, it
//! hands out another reference to the same storage. The middleware keeps one
//! handle and places a clone in the request extensions, so every attach during
//! the request lands in the instance the middleware drains afterwards.
//!
//! # Thread Safety
//!
//! Appends take a mutex, so a handler that fans out work across tasks within
//! one request may attach from all of them. A poisoned lock is recovered
//! rather than propagated; the entry list is only ever pushed to or taken, so
//! it cannot be left half-written.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::shared::entry::{BoxError, ErrorEntry};

/// Ordered, request-scoped list of attached errors.
#[derive(Clone, Debug, Default)]
pub struct ErrorCollector {
    entries: Arc<Mutex<Vec<ErrorEntry>>>,
}

impl ErrorCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error, recording the caller's location.
    #[track_caller]
    pub fn attach(&self, error: impl Into<BoxError>) {
        self.push(ErrorEntry::new(error));
    }

    /// Append an already built entry.
    pub fn push(&self, entry: ErrorEntry) {
        self.lock().push(entry);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current entries in attachment order.
    pub fn snapshot(&self) -> Vec<ErrorEntry> {
        self.lock().clone()
    }

    /// Take every entry out, leaving the collector empty.
    pub fn drain(&self) -> Vec<ErrorEntry> {
        std::mem::take(&mut *self.lock())
    }

    /// Whether `other` is a handle to the same storage as `self`.
    pub fn same_as(&self, other: &ErrorCollector) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ErrorEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
