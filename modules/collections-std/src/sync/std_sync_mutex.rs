//! Wrapper around `std::sync::Mutex` implementing the core `SyncMutexLike` trait.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lockbox_collections_core_rs::sync::sync_mutex_like::SyncMutexLike;

#[cfg(test)]
mod tests;

/// Thin wrapper over [`std::sync::Mutex`] for synchronous std environments.
///
/// A lock poisoned by a panicking holder is recovered rather than propagated: the guard of the
/// poisoned mutex is handed out and a warning is logged.
///
/// Recovery only stays sound because every collection finishes its comparisons before it
/// rearranges storage, so a comparator that panics mid-operation leaves the buffer unchanged.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(recover)
  }

  /// Returns a reference to the underlying `std::sync::Mutex`.
  #[must_use]
  pub const fn as_inner(&self) -> &Mutex<T> {
    &self.0
  }

  /// Locks the mutex and returns the guard.
  pub fn lock(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(recover)
  }
}

fn recover<G>(err: PoisonError<G>) -> G {
  tracing::warn!("recovering from a poisoned collection lock");
  err.into_inner()
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}
