use alloc::vec::Vec;

use crate::{
  collections::priority::{HeapEntry, HeapOrder},
  CollectionError, Comparator,
};


/// Array-backed binary heap ordered by priority.
///
/// The parent of slot `i` lives at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`.
/// Entries with equal priority come out in unspecified order.
#[derive(Clone, Debug)]
pub struct PriorityHeap<P, V> {
  entries:    Vec<HeapEntry<P, V>>,
  order:      HeapOrder,
  comparator: Comparator<P>,
}

impl<P, V> PriorityHeap<P, V> {
  /// Creates an empty heap with the given orientation.
  #[must_use]
  pub const fn new(comparator: Comparator<P>, order: HeapOrder) -> Self {
    Self { entries: Vec::new(), order, comparator }
  }

  /// Creates an empty min-heap.
  #[must_use]
  pub const fn new_min(comparator: Comparator<P>) -> Self {
    Self::new(comparator, HeapOrder::Min)
  }

  /// Creates an empty max-heap.
  #[must_use]
  pub const fn new_max(comparator: Comparator<P>) -> Self {
    Self::new(comparator, HeapOrder::Max)
  }

  /// Adds an entry and sifts it up to its place.
  ///
  /// The destination slot is located before anything moves, so a comparator that panics leaves
  /// the heap as it was and drops the new entry.
  pub fn enqueue(&mut self, priority: P, value: V) {
    let entry = HeapEntry::new(priority, value);
    let path = self.ascent_path(&entry);
    self.entries.push(entry);
    let mut index = self.entries.len() - 1;
    for parent in path {
      self.entries.swap(index, parent);
      index = parent;
    }
  }

  /// Root entry without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the heap holds no entries.
  pub fn peek(&self) -> Result<&HeapEntry<P, V>, CollectionError> {
    self.entries.first().ok_or(CollectionError::Empty)
  }

  /// Removes the root entry and restores heap order.
  ///
  /// Like [`enqueue`](Self::enqueue), the comparisons run before any entry moves.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the heap holds no entries.
  pub fn extract_top(&mut self) -> Result<(P, V), CollectionError> {
    let path = self.descent_path();
    let Some(last) = self.entries.pop() else {
      return Err(CollectionError::Empty);
    };
    if self.entries.is_empty() {
      return Ok(last.into_parts());
    }
    let mut index = 0;
    for child in path {
      self.entries.swap(index, child);
      index = child;
    }
    Ok(core::mem::replace(&mut self.entries[index], last).into_parts())
  }

  /// Entries in storage order, which is not sorted.
  pub fn iter(&self) -> impl Iterator<Item = &HeapEntry<P, V>> + '_ {
    self.entries.iter()
  }

  /// Removes every entry.
  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the heap holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Orientation chosen at construction.
  #[must_use]
  pub const fn order(&self) -> HeapOrder {
    self.order
  }

  /// Ancestor slots the entry would pass while sifting up from the next free slot, nearest first.
  fn ascent_path(&self, entry: &HeapEntry<P, V>) -> Vec<usize> {
    let mut path = Vec::new();
    let mut index = self.entries.len();
    while index > 0 {
      let parent = (index - 1) / 2;
      let ordering = self.comparator.compare(entry.priority(), self.entries[parent].priority());
      if !self.order.prefers(ordering) {
        break;
      }
      path.push(parent);
      index = parent;
    }
    path
  }

  /// Child slots whose entries move up one level when the root is removed and the last entry
  /// refills it. The final slot in the path is where the last entry lands.
  fn descent_path(&self) -> Vec<usize> {
    let mut path = Vec::new();
    let Some(len) = self.entries.len().checked_sub(1) else {
      return path;
    };
    let last = self.entries[len].priority();
    let mut index = 0;
    loop {
      let left = 2 * index + 1;
      let right = left + 1;
      if left >= len {
        break;
      }
      let mut child = left;
      if right < len && self.outranks(right, left) {
        child = right;
      }
      let ordering = self.comparator.compare(self.entries[child].priority(), last);
      if !self.order.prefers(ordering) {
        break;
      }
      path.push(child);
      index = child;
    }
    path
  }

  fn outranks(&self, candidate: usize, other: usize) -> bool {
    let ordering = self.comparator.compare(self.entries[candidate].priority(), self.entries[other].priority());
    self.order.prefers(ordering)
  }
}

impl<P, V> Extend<(P, V)> for PriorityHeap<P, V> {
  fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, entries: I) {
    for (priority, value) in entries {
      self.enqueue(priority, value);
    }
  }
}
