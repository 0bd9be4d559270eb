use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{
  collections::queue::RingBuffer,
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
  CollectionError, Comparator,
};


/// Thread-safe FIFO queue guarding a [`RingBuffer`] with a single lock.
pub struct SyncQueue<T, M = SpinSyncMutex<RingBuffer<T>>>
where
  M: SyncMutexLike<RingBuffer<T>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<T>,
}

impl<T, M> SyncQueue<T, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
{
  /// Creates an empty queue with the default slot count.
  #[must_use]
  pub fn new(comparator: Comparator<T>) -> Self {
    Self::from_buffer(RingBuffer::new(comparator))
  }

  /// Creates an empty queue with `capacity` slots.
  #[must_use]
  pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Self {
    Self::from_buffer(RingBuffer::with_capacity(capacity, comparator))
  }

  /// Wraps an existing buffer.
  #[must_use]
  pub fn from_buffer(buffer: RingBuffer<T>) -> Self {
    Self { inner: ArcShared::new(M::new(buffer)), _pd: PhantomData }
  }

  /// Appends a value at the rear.
  pub fn enqueue(&self, value: T) {
    self.write(|buffer| buffer.enqueue(value));
  }

  /// Removes and returns the front value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements.
  pub fn dequeue(&self) -> Result<T, CollectionError> {
    self.write(RingBuffer::dequeue)
  }

  /// Position of the first element equal to `item`, counted from the front.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.read(|buffer| buffer.find(item))
  }

  /// Removes every element.
  pub fn clear(&self) {
    self.write(|buffer| {
      tracing::debug!(len = buffer.len(), "clearing queue");
      buffer.clear();
    });
  }

  /// Number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(RingBuffer::len)
  }

  /// Returns `true` when the queue holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(RingBuffer::is_empty)
  }

  /// Current slot count.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.read(RingBuffer::capacity)
  }

  fn read<R>(&self, f: impl FnOnce(&RingBuffer<T>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut RingBuffer<T>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<T, M> SyncQueue<T, M>
where
  T: Clone,
  M: SyncMutexLike<RingBuffer<T>>,
{
  /// Creates a queue holding clones of `items`; the first slice element is the front.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    Self::from_buffer(RingBuffer::from_slice(items, comparator))
  }

  /// Returns a clone of the front value without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<T, CollectionError> {
    self.read(|buffer| buffer.peek().cloned())
  }

  /// Snapshot of the elements from front to rear.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.read(RingBuffer::to_vec)
  }

  /// Creates an independent queue holding the same elements.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|buffer| {
      tracing::debug!(len = buffer.len(), "copying queue");
      buffer.clone()
    });
    Self::from_buffer(snapshot)
  }
}

impl<T, M> Clone for SyncQueue<T, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, M> fmt::Display for SyncQueue<T, M>
where
  T: fmt::Display,
  M: SyncMutexLike<RingBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| fmt::Display::fmt(buffer, f))
  }
}

impl<T, M> fmt::Debug for SyncQueue<T, M>
where
  T: fmt::Debug,
  M: SyncMutexLike<RingBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|buffer| {
      f.debug_struct("SyncQueue")
        .field("items", &buffer.iter().collect::<Vec<_>>())
        .field("capacity", &buffer.capacity())
        .finish()
    })
  }
}
