use alloc::vec::Vec;
use core::{fmt, iter};

use crate::{collections::fmt_sequence, CollectionError, Comparator};


#[derive(Clone, Debug)]
struct ListNode<T> {
  value: T,
  prev:  Option<usize>,
  next:  Option<usize>,
}

/// Doubly-linked list whose nodes live in an index arena.
///
/// Slots freed by removals are recycled by later insertions, so node indices stay stable while a
/// node is linked.
#[derive(Clone, Debug)]
pub struct LinkedListBuffer<T> {
  nodes:      Vec<Option<ListNode<T>>>,
  free:       Vec<usize>,
  head:       Option<usize>,
  tail:       Option<usize>,
  len:        usize,
  comparator: Comparator<T>,
}

impl<T> LinkedListBuffer<T> {
  /// Creates an empty list.
  #[must_use]
  pub const fn new(comparator: Comparator<T>) -> Self {
    Self { nodes: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0, comparator }
  }

  /// Inserts a value at the front.
  pub fn insert_front(&mut self, value: T) {
    self.link_front(value);
  }

  /// Inserts a value at the back.
  pub fn insert_back(&mut self, value: T) {
    self.link_back(value);
  }

  /// Inserts a value so that it ends up at `position`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `position` is greater than the length.
  pub fn insert_position(&mut self, value: T, position: usize) -> Result<(), CollectionError> {
    if position > self.len {
      return Err(CollectionError::out_of_range(position, self.len));
    }
    if position == self.len {
      self.link_back(value);
      return Ok(());
    }
    let at = self.index_at(position).ok_or(CollectionError::out_of_range(position, self.len))?;
    self.link_before(at, value);
    Ok(())
  }

  /// Removes and returns the front value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the list holds no elements.
  pub fn remove_front(&mut self) -> Result<T, CollectionError> {
    let head = self.head.ok_or(CollectionError::Empty)?;
    self.unlink(head).ok_or(CollectionError::Empty)
  }

  /// Removes and returns the back value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the list holds no elements.
  pub fn remove_back(&mut self) -> Result<T, CollectionError> {
    let tail = self.tail.ok_or(CollectionError::Empty)?;
    self.unlink(tail).ok_or(CollectionError::Empty)
  }

  /// Removes and returns the value at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `index` is not below the length.
  pub fn remove_position(&mut self, index: usize) -> Result<T, CollectionError> {
    let out_of_range = CollectionError::out_of_range(index, self.len);
    let at = self.index_at(index).ok_or(out_of_range)?;
    self.unlink(at).ok_or(out_of_range)
  }

  /// Returns a reference to the value at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::IndexOutOfRange`] when `index` is not below the length.
  pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
    self
      .index_at(index)
      .and_then(|at| self.node(at))
      .map(|node| &node.value)
      .ok_or(CollectionError::out_of_range(index, self.len))
  }

  /// Index of the first element equal to `item`.
  #[must_use]
  pub fn find(&self, item: &T) -> Option<usize> {
    self.iter().position(|candidate| self.comparator.equals(candidate, item))
  }

  /// Reverses the list in place.
  pub fn reverse(&mut self) {
    for node in self.nodes.iter_mut().flatten() {
      core::mem::swap(&mut node.prev, &mut node.next);
    }
    core::mem::swap(&mut self.head, &mut self.tail);
    tracing::trace!(len = self.len, "list reversed");
  }

  /// Iterates from front to back.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    let mut cursor = self.head;
    iter::from_fn(move || {
      let node = self.node(cursor?)?;
      cursor = node.next;
      Some(&node.value)
    })
  }

  /// Removes every element and releases the arena.
  pub fn clear(&mut self) {
    self.nodes.clear();
    self.free.clear();
    self.head = None;
    self.tail = None;
    self.len = 0;
  }

  /// Number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the list holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  fn node(&self, index: usize) -> Option<&ListNode<T>> {
    self.nodes.get(index).and_then(Option::as_ref)
  }

  fn node_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
    self.nodes.get_mut(index).and_then(Option::as_mut)
  }

  fn allocate(&mut self, node: ListNode<T>) -> usize {
    self.len += 1;
    match self.free.pop() {
      | Some(index) => {
        self.nodes[index] = Some(node);
        index
      },
      | None => {
        self.nodes.push(Some(node));
        self.nodes.len() - 1
      },
    }
  }

  fn link_front(&mut self, value: T) {
    let head = self.head;
    let index = self.allocate(ListNode { value, prev: None, next: head });
    match head.and_then(|at| self.node_mut(at)) {
      | Some(old_head) => old_head.prev = Some(index),
      | None => self.tail = Some(index),
    }
    self.head = Some(index);
  }

  fn link_back(&mut self, value: T) {
    let tail = self.tail;
    let index = self.allocate(ListNode { value, prev: tail, next: None });
    match tail.and_then(|at| self.node_mut(at)) {
      | Some(old_tail) => old_tail.next = Some(index),
      | None => self.head = Some(index),
    }
    self.tail = Some(index);
  }

  fn link_before(&mut self, at: usize, value: T) {
    let prev = self.node(at).and_then(|node| node.prev);
    let index = self.allocate(ListNode { value, prev, next: Some(at) });
    if let Some(successor) = self.node_mut(at) {
      successor.prev = Some(index);
    }
    match prev.and_then(|before| self.node_mut(before)) {
      | Some(predecessor) => predecessor.next = Some(index),
      | None => self.head = Some(index),
    }
  }

  fn unlink(&mut self, index: usize) -> Option<T> {
    let node = self.nodes.get_mut(index)?.take()?;
    match node.prev.and_then(|before| self.node_mut(before)) {
      | Some(predecessor) => predecessor.next = node.next,
      | None => self.head = node.next,
    }
    match node.next.and_then(|after| self.node_mut(after)) {
      | Some(successor) => successor.prev = node.prev,
      | None => self.tail = node.prev,
    }
    self.free.push(index);
    self.len -= 1;
    Some(node.value)
  }

  fn index_at(&self, position: usize) -> Option<usize> {
    if position >= self.len {
      return None;
    }
    if position <= self.len / 2 {
      let mut cursor = self.head?;
      for _ in 0..position {
        cursor = self.node(cursor)?.next?;
      }
      Some(cursor)
    } else {
      let mut cursor = self.tail?;
      for _ in 0..(self.len - 1 - position) {
        cursor = self.node(cursor)?.prev?;
      }
      Some(cursor)
    }
  }
}

impl<T: Clone> LinkedListBuffer<T> {
  /// Creates a list holding clones of `items` in the same order.
  #[must_use]
  pub fn from_slice(items: &[T], comparator: Comparator<T>) -> Self {
    let mut list = Self::new(comparator);
    for item in items {
      list.link_back(item.clone());
    }
    list
  }

  /// Snapshot of the elements from front to back.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }
}

impl<T: fmt::Display> fmt::Display for LinkedListBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_sequence(f, self.iter())
  }
}
