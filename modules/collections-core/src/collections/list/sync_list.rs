use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{
  collections::list::LinkedListBuffer,
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
  CollectionError, Comparator,
};

#[cfg(test)]
mod tests;

/// Thread-safe doubly-linked list guarding a [`LinkedListBuffer`] with a single lock.
pub struct SyncList<T, M = SpinSyncMutex<LinkedListBuffer<T>>>
where
  M: SyncMutexLike<LinkedListBuffer<T>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<T>,
}

impl<T, M> SyncList<T, M>
where
  M: SyncMutexLike<LinkedListBuffer<T>>,
{
  /// Creates an empty list.
  #[must_use]
  pub fn new(comparator: Comparator<T>) -> Self {
    Self::from_buffer(LinkedListBuffer::new(comparator))
  }

  /// Wraps an existing buffer.
  #[must_use]
  pub fn from_buffer(buffer: LinkedListBuffer<T>) -> Self {
    Self { inner: ArcShared::new(M::new(buffer)), _pd: PhantomData }
  }

  /// Inserts a value at the front.
  pub fn insert_front(&self, value: T) {
    self.write(|buffer| buffer.insert_front(value));
  }

  /// Inserts a value at the back.
  pub fn insert_back(&self, value: T) {
    self.write(|buffer| buffer.insert_back(value));
  }

  /// Inserts a value so that it ends up at `position`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `position` is greater than the length.
  pub fn insert_position(&self, value: T, position: usize) -> Result<(), CollectionError> {
    self.write(|buffer| buffer.insert_position(value, position))
  }

  /// Removes and returns the front value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the list holds no elements.
  pub fn remove_front(&self) -> Result<T, CollectionError> {
    self.write(LinkedListBuffer::remove_front)
  }

  /// Removes and returns the back value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the list holds no elements.
  pub fn remove_back(&self) -> Result<T, CollectionError> {
    self.write(LinkedListBuffer::remove_back)
  }

  /// Removes and returns the value at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `index` is not below the length.
  pub fn remove_position(&self, index: usize) -> Result<T, CollectionError> {
    self.write(|buffer| buffer.remove_position(index))
  }

  /// Index of the first element equal to `item`.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.read(|buffer| buffer.find(item))
  }

  /// Reverses the list in place.
  pub fn reverse(&self) {
    self.write(LinkedListBuffer::reverse);
  }

  /// Removes every element.
  pub fn clear(&self) {
    self.write(|buffer| {
      tracing::debug!(len = buffer.len(), "clearing list");
      buffer.clear();
    });
  }

  /// Number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(LinkedListBuffer::len)
  }

  /// Returns `true` when the list holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(LinkedListBuffer::is_empty)
  }

  fn read<R>(&self, f: impl FnOnce(&LinkedListBuffer<T>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut LinkedListBuffer<T>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<T, M> SyncList<T, M>
where
  T: Clone,
  M: SyncMutexLike<LinkedListBuffer<T>>,
{
  /// Creates a list holding clones of `items` in the same order.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    Self::from_buffer(LinkedListBuffer::from_slice(items, comparator))
  }

  /// Returns a clone of the value at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `index` is not below the length.
  pub fn get(&self, index: usize) -> Result<T, CollectionError> {
    self.read(|buffer| buffer.get(index).cloned())
  }

  /// Snapshot of the elements from front to back.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.read(LinkedListBuffer::to_vec)
  }

  /// Creates an independent list holding the same elements.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|buffer| {
      tracing::debug!(len = buffer.len(), "copying list");
      buffer.clone()
    });
    Self::from_buffer(snapshot)
  }
}

impl<T, M> Clone for SyncList<T, M>
where
  M: SyncMutexLike<LinkedListBuffer<T>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, M> fmt::Display for SyncList<T, M>
where
  T: fmt::Display,
  M: SyncMutexLike<LinkedListBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| fmt::Display::fmt(buffer, f))
  }
}

impl<T, M> fmt::Debug for SyncList<T, M>
where
  T: fmt::Debug,
  M: SyncMutexLike<LinkedListBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| f.debug_list().entries(buffer.iter()).finish())
  }
}
