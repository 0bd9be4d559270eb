use alloc::vec::Vec;
use core::{cmp, fmt, iter};

use crate::{collections::fmt_sequence, CollectionError, Comparator};

#[cfg(test)]
mod tests;

/// Number of slots a queue starts with unless a capacity is requested.
pub const DEFAULT_QUEUE_CAPACITY: usize = 4;

/// FIFO circular buffer that doubles its slot count when full.
///
/// `head` indexes the front element; the occupied slots are `head..head + len` modulo the slot
/// count.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
  slots:      Vec<Option<T>>,
  head:       usize,
  len:        usize,
  comparator: Comparator<T>,
}

impl<T> RingBuffer<T> {
  /// Creates an empty queue with [`DEFAULT_QUEUE_CAPACITY`] slots.
  #[must_use]
  pub fn new(comparator: Comparator<T>) -> Self {
    Self::with_capacity(DEFAULT_QUEUE_CAPACITY, comparator)
  }

  /// Creates an empty queue with `capacity` slots (at least one).
  #[must_use]
  pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Self {
    let capacity = cmp::max(1, capacity);
    Self { slots: iter::repeat_with(|| None).take(capacity).collect(), head: 0, len: 0, comparator }
  }

  /// Appends a value at the rear, growing the slot array when it is full.
  pub fn enqueue(&mut self, value: T) {
    if self.len == self.slots.len() {
      self.grow();
    }
    let tail = self.physical(self.len);
    self.slots[tail] = Some(value);
    self.len += 1;
  }

  /// Removes and returns the front value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<T, CollectionError> {
    if self.len == 0 {
      return Err(CollectionError::Empty);
    }
    let value = self.slots[self.head].take().ok_or(CollectionError::Empty)?;
    self.head = (self.head + 1) % self.slots.len();
    self.len -= 1;
    if self.len == 0 {
      self.head = 0;
    }
    Ok(value)
  }

  /// Returns a reference to the front value without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<&T, CollectionError> {
    if self.len == 0 {
      return Err(CollectionError::Empty);
    }
    self.slots[self.head].as_ref().ok_or(CollectionError::Empty)
  }

  /// Position of the first element equal to `item`, counted from the front.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.iter().position(|candidate| self.comparator.equals(candidate, item))
  }

  /// Iterates from front to rear.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    (0..self.len).filter_map(move |offset| self.slots[self.physical(offset)].as_ref())
  }

  /// Removes every element, keeping the current slot count.
  pub fn clear(&mut self) {
    self.slots.iter_mut().for_each(|slot| *slot = None);
    self.head = 0;
    self.len = 0;
  }

  /// Number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Current slot count.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  const fn physical_in(&self, offset: usize, slots: usize) -> usize {
    (self.head + offset) % slots
  }

  fn physical(&self, offset: usize) -> usize {
    self.physical_in(offset, self.slots.len())
  }

  fn grow(&mut self) {
    let current = self.slots.len();
    let next = cmp::max(1, current.saturating_mul(2));
    let mut slots: Vec<Option<T>> = Vec::with_capacity(next);
    for offset in 0..self.len {
      let index = self.physical_in(offset, current);
      slots.push(self.slots[index].take());
    }
    slots.resize_with(next, || None);
    self.slots = slots;
    self.head = 0;
    tracing::trace!(from = current, to = next, "ring buffer grew");
  }
}

impl<T: Clone> RingBuffer<T> {
  /// Creates a queue holding clones of `items`; the first slice element is the front.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    let mut queue = Self::with_capacity(cmp::max(DEFAULT_QUEUE_CAPACITY, items.len()), comparator);
    for item in items {
      queue.enqueue(item.clone());
    }
    queue
  }

  /// Snapshot of the elements from front to rear.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_sequence(f, self.iter())
  }
}
