use core::cmp::Ordering;

/// Orientation of a [`PriorityHeap`](super::PriorityHeap), fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapOrder {
  /// The smallest priority sits at the root.
  Min,
  /// The largest priority sits at the root.
  Max,
}

impl HeapOrder {
  /// Returns `true` when an element whose priority compares as `ordering` against another one
  /// belongs above it.
  #[must_use]
  pub const fn prefers(self, ordering: Ordering) -> bool {
    match self {
      | Self::Min => matches!(ordering, Ordering::Less),
      | Self::Max => matches!(ordering, Ordering::Greater),
    }
  }
}
