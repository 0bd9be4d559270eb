use alloc::vec::Vec;
use core::{fmt, hash::Hash, marker::PhantomData};

use crate::{
  collections::set::HashSetBuffer,
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
};


/// Thread-safe set guarding a [`HashSetBuffer`] with a single lock.
///
/// Operations over two sets lock both operands in ascending address order of their shared lock,
/// so `a.union(&b)` and `b.union(&a)` may run concurrently without deadlocking. Two handles to the
/// same set take the lock once.
pub struct SyncSet<T, M = SpinSyncMutex<HashSetBuffer<T>>>
where
  T: Eq + Hash,
  M: SyncMutexLike<HashSetBuffer<T>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<T>,
}

impl<T, M> SyncSet<T, M>
where
  T: Eq + Hash,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  /// Creates an empty set.
  #[must_use]
  pub fn new() -> Self {
    Self::from_buffer(HashSetBuffer::new())
  }

  /// Wraps an existing buffer.
  #[must_use]
  pub fn from_buffer(buffer: HashSetBuffer<T>) -> Self {
    Self { inner: ArcShared::new(M::new(buffer)), _pd: PhantomData }
  }

  /// Adds `value`, returning `true` when it was not present yet.
  pub fn add(&self, value: T) -> bool {
    self.write(|buffer| buffer.add(value))
  }

  /// Removes `value`, returning `true` when it was present.
  pub fn remove(&self, value: &T) -> bool {
    self.write(|buffer| buffer.remove(value))
  }

  /// Returns `true` when `value` is a member.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    self.read(|buffer| buffer.contains(value))
  }

  /// Returns `true` when every member of `self` is a member of `other`.
  #[must_use]
  pub fn is_subset(&self, other: &Self) -> bool {
    self.with_pair(other, HashSetBuffer::is_subset)
  }

  /// Returns `true` when every member of `other` is a member of `self`.
  #[must_use]
  pub fn is_superset(&self, other: &Self) -> bool {
    self.with_pair(other, HashSetBuffer::is_superset)
  }

  /// Returns `true` when both sets hold exactly the same members.
  #[must_use]
  pub fn equals(&self, other: &Self) -> bool {
    self.with_pair(other, HashSetBuffer::equals)
  }

  /// Removes every member.
  pub fn clear(&self) {
    self.write(|buffer| {
      tracing::debug!(len = buffer.len(), "clearing set");
      buffer.clear();
    });
  }

  /// Number of members.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(HashSetBuffer::len)
  }

  /// Returns `true` when the set has no members.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(HashSetBuffer::is_empty)
  }

  /// Returns `true` when both handles refer to the same set.
  #[must_use]
  pub fn same_instance(&self, other: &Self) -> bool {
    self.inner.ptr_eq(&other.inner)
  }

  fn with_pair<R>(&self, other: &Self, f: impl FnOnce(&HashSetBuffer<T>, &HashSetBuffer<T>) -> R) -> R {
    if self.same_instance(other) {
      let guard = self.inner.lock();
      return f(&guard, &guard);
    }
    if self.inner.addr() < other.inner.addr() {
      let first = self.inner.lock();
      let second = other.inner.lock();
      f(&first, &second)
    } else {
      let first = other.inner.lock();
      let second = self.inner.lock();
      f(&second, &first)
    }
  }

  fn read<R>(&self, f: impl FnOnce(&HashSetBuffer<T>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut HashSetBuffer<T>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<T, M> SyncSet<T, M>
where
  T: Eq + Hash + Clone,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  /// Creates a set from clones of `items`; duplicates collapse into one member.
  #[must_use]
  pub fn from_slice(items: &[T]) -> Self {
    Self::from_buffer(HashSetBuffer::from_slice(items))
  }

  /// New set holding the members of either set.
  #[must_use]
  pub fn union(&self, other: &Self) -> Self {
    Self::from_buffer(self.with_pair(other, HashSetBuffer::union))
  }

  /// New set holding the members present in both sets.
  #[must_use]
  pub fn intersection(&self, other: &Self) -> Self {
    Self::from_buffer(self.with_pair(other, HashSetBuffer::intersection))
  }

  /// New set holding the members of `self` absent from `other`.
  #[must_use]
  pub fn difference(&self, other: &Self) -> Self {
    Self::from_buffer(self.with_pair(other, HashSetBuffer::difference))
  }

  /// Snapshot of the members in unspecified order.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.read(HashSetBuffer::to_vec)
  }

  /// Creates an independent set holding the same members.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|buffer| {
      tracing::debug!(len = buffer.len(), "copying set");
      buffer.clone()
    });
    Self::from_buffer(snapshot)
  }
}

impl<T, M> Default for SyncSet<T, M>
where
  T: Eq + Hash,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, M> Clone for SyncSet<T, M>
where
  T: Eq + Hash,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, M> fmt::Display for SyncSet<T, M>
where
  T: Eq + Hash + fmt::Display,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| fmt::Display::fmt(buffer, f))
  }
}

impl<T, M> fmt::Debug for SyncSet<T, M>
where
  T: Eq + Hash + fmt::Debug,
  M: SyncMutexLike<HashSetBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| fmt::Debug::fmt(buffer, f))
  }
}
