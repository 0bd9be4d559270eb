use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{
  collections::stack::StackBuffer,
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
  CollectionError, Comparator,
};

#[cfg(test)]
mod tests;

/// Thread-safe stack guarding a [`StackBuffer`] with a single lock.
///
/// Cloning returns another handle to the same stack; use [`SyncStack::copy`] for an independent
/// one.
pub struct SyncStack<T, M = SpinSyncMutex<StackBuffer<T>>>
where
  M: SyncMutexLike<StackBuffer<T>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<T>,
}

impl<T, M> SyncStack<T, M>
where
  M: SyncMutexLike<StackBuffer<T>>,
{
  /// Creates an empty stack.
  #[must_use]
  pub fn new(comparator: Comparator<T>) -> Self {
    Self::from_buffer(StackBuffer::new(comparator))
  }

  /// Creates an empty stack with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Self {
    Self::from_buffer(StackBuffer::with_capacity(capacity, comparator))
  }

  /// Wraps an existing buffer.
  #[must_use]
  pub fn from_buffer(buffer: StackBuffer<T>) -> Self {
    Self { inner: ArcShared::new(M::new(buffer)), _pd: PhantomData }
  }

  /// Pushes a value on top of the stack.
  pub fn push(&self, value: T) {
    self.write(|buffer| buffer.push(value));
  }

  /// Removes and returns the top value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements.
  pub fn pop(&self) -> Result<T, CollectionError> {
    self.write(StackBuffer::pop)
  }

  /// Position of the first element equal to `item`, counted from the bottom.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.read(|buffer| buffer.find(item))
  }

  /// Removes every element.
  pub fn clear(&self) {
    self.write(|buffer| {
      tracing::debug!(len = buffer.len(), "clearing stack");
      buffer.clear();
    });
  }

  /// Number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(StackBuffer::len)
  }

  /// Returns `true` when the stack holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(StackBuffer::is_empty)
  }

  /// Returns `true` when both handles refer to the same stack.
  #[must_use]
  pub fn same_instance(&self, other: &Self) -> bool {
    self.inner.ptr_eq(&other.inner)
  }

  fn read<R>(&self, f: impl FnOnce(&StackBuffer<T>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut StackBuffer<T>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<T, M> SyncStack<T, M>
where
  T: Clone,
  M: SyncMutexLike<StackBuffer<T>>,
{
  /// Creates a stack holding clones of `items`; the last slice element ends up on top.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    Self::from_buffer(StackBuffer::from_slice(items, comparator))
  }

  /// Returns a clone of the top value without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<T, CollectionError> {
    self.read(|buffer| buffer.peek().cloned())
  }

  /// Snapshot of the elements from bottom to top.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.read(StackBuffer::to_vec)
  }

  /// Creates an independent stack holding the same elements.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|buffer| {
      tracing::debug!(len = buffer.len(), "copying stack");
      buffer.clone()
    });
    Self::from_buffer(snapshot)
  }
}

impl<T, M> Clone for SyncStack<T, M>
where
  M: SyncMutexLike<StackBuffer<T>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, M> fmt::Display for SyncStack<T, M>
where
  T: fmt::Display,
  M: SyncMutexLike<StackBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| fmt::Display::fmt(buffer, f))
  }
}

impl<T, M> fmt::Debug for SyncStack<T, M>
where
  T: fmt::Debug,
  M: SyncMutexLike<StackBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| f.debug_struct("SyncStack").field("items", &buffer.as_slice()).finish())
  }
}
