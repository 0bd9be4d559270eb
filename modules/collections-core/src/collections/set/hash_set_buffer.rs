use alloc::vec::Vec;
use core::{fmt, hash::Hash};

use ahash::RandomState;
use hashbrown::HashSet;

use crate::collections::fmt_sequence;


/// Hash-backed membership set.
#[derive(Clone)]
pub struct HashSetBuffer<T> {
  items: HashSet<T, RandomState>,
}

impl<T> HashSetBuffer<T>
where
  T: Eq + Hash,
{
  /// Creates an empty set.
  #[must_use]
  pub fn new() -> Self {
    Self { items: HashSet::with_hasher(RandomState::new()) }
  }

  /// Adds `value`, returning `true` when it was not present yet.
  pub fn add(&mut self, value: T) -> bool {
    self.items.insert(value)
  }

  /// Removes `value`, returning `true` when it was present.
  pub fn remove(&mut self, value: &T) -> bool {
    self.items.remove(value)
  }

  /// Returns `true` when `value` is a member.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    self.items.contains(value)
  }

  /// Returns `true` when every member of `self` is a member of `other`.
  #[must_use]
  pub fn is_subset(&self, other: &Self) -> bool {
    self.items.is_subset(&other.items)
  }

  /// Returns `true` when every member of `other` is a member of `self`.
  #[must_use]
  pub fn is_superset(&self, other: &Self) -> bool {
    self.items.is_superset(&other.items)
  }

  /// Returns `true` when both sets hold exactly the same members.
  #[must_use]
  pub fn equals(&self, other: &Self) -> bool {
    self.items.len() == other.items.len() && self.is_subset(other)
  }

  /// Iterates over the members in unspecified order.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.items.iter()
  }

  /// Removes every member.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Number of members.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` when the set has no members.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T> HashSetBuffer<T>
where
  T: Eq + Hash + Clone,
{
  /// Creates a set from clones of `items`; duplicates collapse into one member.
  #[must_use]
  pub fn from_slice(items: &[T]) -> Self {
    let mut set = Self::new();
    set.items.extend(items.iter().cloned());
    set
  }

  /// New set holding the members of either set.
  #[must_use]
  pub fn union(&self, other: &Self) -> Self {
    Self::collect(self.items.union(&other.items))
  }

  /// New set holding the members present in both sets.
  #[must_use]
  pub fn intersection(&self, other: &Self) -> Self {
    Self::collect(self.items.intersection(&other.items))
  }

  /// New set holding the members of `self` absent from `other`.
  #[must_use]
  pub fn difference(&self, other: &Self) -> Self {
    Self::collect(self.items.difference(&other.items))
  }

  /// Snapshot of the members in unspecified order.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.items.iter().cloned().collect()
  }

  fn collect<'a>(members: impl Iterator<Item = &'a T>) -> Self
  where
    T: 'a, {
    let mut set = Self::new();
    set.items.extend(members.cloned());
    set
  }
}

impl<T> Default for HashSetBuffer<T>
where
  T: Eq + Hash,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for HashSetBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.items.iter()).finish()
  }
}

impl<T: fmt::Display> fmt::Display for HashSetBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_sequence(f, self.items.iter())
  }
}
