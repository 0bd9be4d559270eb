mod list;
mod priority;
mod queue;
mod set;
mod stack;
mod tree;

use core::fmt;

pub use list::{LinkedListBuffer, SyncList};
pub use priority::{HeapEntry, HeapOrder, PriorityHeap, SyncPriorityQueue};
pub use queue::{RingBuffer, SyncQueue, DEFAULT_QUEUE_CAPACITY};
pub use set::{HashSetBuffer, SyncSet};
pub use stack::{StackBuffer, SyncStack};
pub use tree::{BinarySearchTree, SyncTree};

/// Writes `items` as `[a b c]`, or `[]` when there are none.
pub(crate) fn fmt_sequence<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
  T: fmt::Display + 'a,
  I: IntoIterator<Item = &'a T>, {
  f.write_str("[")?;
  for (index, item) in items.into_iter().enumerate() {
    if index > 0 {
      f.write_str(" ")?;
    }
    write!(f, "{item}")?;
  }
  f.write_str("]")
}
