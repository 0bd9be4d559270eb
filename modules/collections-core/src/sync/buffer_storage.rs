use crate::sync::{sync_mutex_like::SyncMutexLike, ArcShared};


/// Scoped access to a lock-protected buffer.
///
/// The closure runs while the lock is held and the guard is dropped as soon as it returns, so no
/// reference to the buffer can outlive the critical section.
pub trait BufferStorage<B> {
  /// Executes a closure with read-only access.
  fn with_read<R>(&self, f: impl FnOnce(&B) -> R) -> R;

  /// Executes a closure with writable access.
  fn with_write<R>(&self, f: impl FnOnce(&mut B) -> R) -> R;
}

impl<B, M> BufferStorage<B> for ArcShared<M>
where
  M: SyncMutexLike<B>,
{
  fn with_read<R>(&self, f: impl FnOnce(&B) -> R) -> R {
    let guard = self.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }
}
