use lockbox_collections_core_rs::{
  BinarySearchTree, HashSetBuffer, LinkedListBuffer, PriorityHeap, RingBuffer, StackBuffer, SyncList,
  SyncPriorityQueue, SyncQueue, SyncSet, SyncStack, SyncTree,
};

use crate::sync::StdSyncMutex;

#[cfg(test)]
mod tests;

/// LIFO stack guarded by [`StdSyncMutex`].
pub type StdSyncStack<T> = SyncStack<T, StdSyncMutex<StackBuffer<T>>>;
/// FIFO queue guarded by [`StdSyncMutex`].
pub type StdSyncQueue<T> = SyncQueue<T, StdSyncMutex<RingBuffer<T>>>;
/// Doubly-linked list guarded by [`StdSyncMutex`].
pub type StdSyncList<T> = SyncList<T, StdSyncMutex<LinkedListBuffer<T>>>;
/// Hash set guarded by [`StdSyncMutex`].
pub type StdSyncSet<T> = SyncSet<T, StdSyncMutex<HashSetBuffer<T>>>;
/// Binary search tree guarded by [`StdSyncMutex`].
pub type StdSyncTree<K, V> = SyncTree<K, V, StdSyncMutex<BinarySearchTree<K, V>>>;
/// Binary heap priority queue guarded by [`StdSyncMutex`].
pub type StdSyncPriorityQueue<P, V> = SyncPriorityQueue<P, V, StdSyncMutex<PriorityHeap<P, V>>>;
