use alloc::vec::Vec;
use core::fmt;

use crate::{collections::fmt_sequence, CollectionError, Comparator};

#[cfg(test)]
mod tests;

/// LIFO buffer backed by a `Vec`.
///
/// The last element of the backing vector is the top of the stack.
#[derive(Clone, Debug)]
pub struct StackBuffer<T> {
  items:      Vec<T>,
  comparator: Comparator<T>,
}

impl<T> StackBuffer<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new(comparator: Comparator<T>) -> Self {
    Self { items: Vec::new(), comparator }
  }

  /// Creates an empty stack with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Self {
    Self { items: Vec::with_capacity(capacity), comparator }
  }

  /// Pushes a value on top of the stack.
  pub fn push(&mut self, value: T) {
    self.items.push(value);
  }

  /// Removes and returns the top value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, CollectionError> {
    self.items.pop().ok_or(CollectionError::Empty)
  }

  /// Returns a reference to the top value without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, CollectionError> {
    self.items.last().ok_or(CollectionError::Empty)
  }

  /// Position of the first element equal to `item`, counted from the bottom.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.items.iter().position(|candidate| self.comparator.equals(candidate, item))
  }

  /// Elements from bottom to top.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  /// Removes every element.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` when the stack holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Comparator used by [`StackBuffer::find`].
  #[must_use]
  pub const fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }
}

impl<T: Clone> StackBuffer<T> {
  /// Creates a stack holding clones of `items`; the last slice element ends up on top.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    Self { items: items.to_vec(), comparator }
  }

  /// Snapshot of the elements from bottom to top.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.items.clone()
  }
}

impl<T: fmt::Display> fmt::Display for StackBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_sequence(f, &self.items)
  }
}
