/// Priority/value pair stored by a [`PriorityHeap`](super::PriorityHeap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapEntry<P, V> {
  priority: P,
  value:    V,
}

impl<P, V> HeapEntry<P, V> {
  /// Creates a new entry.
  #[must_use]
  pub const fn new(priority: P, value: V) -> Self {
    Self { priority, value }
  }

  /// Priority used for ordering.
  #[must_use]
  pub const fn priority(&self) -> &P {
    &self.priority
  }

  /// Payload carried by the entry.
  #[must_use]
  pub const fn value(&self) -> &V {
    &self.value
  }

  /// Splits the entry into its priority and value.
  #[must_use]
  pub fn into_parts(self) -> (P, V) {
    (self.priority, self.value)
  }
}
