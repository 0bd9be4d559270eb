use core::{fmt, marker::PhantomData};

use crate::{
  collections::priority::{HeapOrder, PriorityHeap},
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
  CollectionError, Comparator,
};

#[cfg(test)]
mod tests;

/// Thread-safe priority queue guarding a [`PriorityHeap`] with a single lock.
pub struct SyncPriorityQueue<P, V, M = SpinSyncMutex<PriorityHeap<P, V>>>
where
  M: SyncMutexLike<PriorityHeap<P, V>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<(P, V)>,
}

impl<P, V, M> SyncPriorityQueue<P, V, M>
where
  M: SyncMutexLike<PriorityHeap<P, V>>,
{
  /// Creates an empty queue with the given orientation.
  #[must_use]
  pub fn new(comparator: Comparator<P>, order: HeapOrder) -> Self {
    Self::from_heap(PriorityHeap::new(comparator, order))
  }

  /// Creates an empty queue that yields the smallest priority first.
  #[must_use]
  pub fn new_min(comparator: Comparator<P>) -> Self {
    Self::new(comparator, HeapOrder::Min)
  }

  /// Creates an empty queue that yields the largest priority first.
  #[must_use]
  pub fn new_max(comparator: Comparator<P>) -> Self {
    Self::new(comparator, HeapOrder::Max)
  }

  /// Wraps an existing heap.
  #[must_use]
  pub fn from_heap(heap: PriorityHeap<P, V>) -> Self {
    Self { inner: ArcShared::new(M::new(heap)), _pd: PhantomData }
  }

  /// Adds a value with the given priority.
  pub fn enqueue(&self, priority: P, value: V) {
    self.write(|heap| heap.enqueue(priority, value));
  }

  /// Removes and returns the entry at the root.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no entries.
  pub fn extract_top(&self) -> Result<(P, V), CollectionError> {
    self.write(PriorityHeap::extract_top)
  }

  /// Orientation chosen at construction.
  #[must_use]
  pub fn order(&self) -> HeapOrder {
    self.read(PriorityHeap::order)
  }

  /// Removes every entry.
  pub fn clear(&self) {
    self.write(|heap| {
      tracing::debug!(len = heap.len(), "clearing priority queue");
      heap.clear();
    });
  }

  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(PriorityHeap::len)
  }

  /// Returns `true` when the queue holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(PriorityHeap::is_empty)
  }

  fn read<R>(&self, f: impl FnOnce(&PriorityHeap<P, V>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut PriorityHeap<P, V>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<P, V, M> SyncPriorityQueue<P, V, M>
where
  P: Clone,
  V: Clone,
  M: SyncMutexLike<PriorityHeap<P, V>>,
{
  /// Returns clones of the root priority and value without removing them.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no entries.
  pub fn peek(&self) -> Result<(P, V), CollectionError> {
    self.read(|heap| heap.peek().map(|entry| entry.clone().into_parts()))
  }

  /// Creates an independent queue holding the same entries.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|heap| {
      tracing::debug!(len = heap.len(), "copying priority queue");
      heap.clone()
    });
    Self::from_heap(snapshot)
  }
}

impl<P, V, M> Clone for SyncPriorityQueue<P, V, M>
where
  M: SyncMutexLike<PriorityHeap<P, V>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<P, V, M> fmt::Debug for SyncPriorityQueue<P, V, M>
where
  P: fmt::Debug,
  V: fmt::Debug,
  M: SyncMutexLike<PriorityHeap<P, V>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|heap| {
      f.debug_struct("SyncPriorityQueue").field("order", &heap.order()).field("entries", &heap.len()).finish()
    })
  }
}
