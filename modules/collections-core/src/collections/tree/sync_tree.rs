use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{
  collections::tree::BinarySearchTree,
  sync::{
    sync_mutex_like::{SpinSyncMutex, SyncMutexLike},
    ArcShared, BufferStorage,
  },
  CollectionError, Comparator,
};

#[cfg(test)]
mod tests;

/// Thread-safe binary search tree guarding a [`BinarySearchTree`] with a single lock.
///
/// Lookups hand out clones; no reference into the tree outlives the call.
pub struct SyncTree<K, V, M = SpinSyncMutex<BinarySearchTree<K, V>>>
where
  M: SyncMutexLike<BinarySearchTree<K, V>>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<(K, V)>,
}

impl<K, V, M> SyncTree<K, V, M>
where
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  /// Creates an empty tree ordered by `comparator`.
  #[must_use]
  pub fn new(comparator: Comparator<K>) -> Self {
    Self::from_tree(BinarySearchTree::new(comparator))
  }

  /// Wraps an existing tree.
  #[must_use]
  pub fn from_tree(tree: BinarySearchTree<K, V>) -> Self {
    Self { inner: ArcShared::new(M::new(tree)), _pd: PhantomData }
  }

  /// Inserts a key/value pair; equal keys are kept side by side.
  pub fn insert(&self, key: K, value: V) {
    self.write(|tree| tree.insert(key, value));
  }

  /// Removes the first node matching `key` and returns its value.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NotFound`] when no node matches.
  pub fn remove(&self, key: &K) -> Result<V, CollectionError> {
    self.write(|tree| tree.remove(key))
  }

  /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
  #[must_use]
  pub fn height(&self) -> isize {
    self.read(BinarySearchTree::height)
  }

  /// Removes every node.
  pub fn clear(&self) {
    self.write(|tree| {
      tracing::debug!(len = tree.len(), "clearing tree");
      tree.clear();
    });
  }

  /// Number of nodes.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read(BinarySearchTree::len)
  }

  /// Returns `true` when the tree holds no nodes.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read(BinarySearchTree::is_empty)
  }

  fn read<R>(&self, f: impl FnOnce(&BinarySearchTree<K, V>) -> R) -> R {
    self.inner.with_read(f)
  }

  fn write<R>(&self, f: impl FnOnce(&mut BinarySearchTree<K, V>) -> R) -> R {
    self.inner.with_write(f)
  }
}

impl<K, V, M> SyncTree<K, V, M>
where
  V: Clone,
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  /// Returns a clone of the value stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NotFound`] when no node matches.
  pub fn search(&self, key: &K) -> Result<V, CollectionError> {
    self.read(|tree| tree.search(key).cloned())
  }
}

impl<K, V, M> SyncTree<K, V, M>
where
  K: Clone,
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  /// Smallest key.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the tree holds no nodes.
  pub fn find_min(&self) -> Result<K, CollectionError> {
    self.read(|tree| tree.find_min().cloned())
  }

  /// Largest key.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the tree holds no nodes.
  pub fn find_max(&self) -> Result<K, CollectionError> {
    self.read(|tree| tree.find_max().cloned())
  }

  /// Snapshot of the keys in left-node-right order.
  #[must_use]
  pub fn in_order_traversal(&self) -> Vec<K> {
    self.read(BinarySearchTree::in_order_traversal)
  }

  /// Snapshot of the keys in node-left-right order.
  #[must_use]
  pub fn pre_order_traversal(&self) -> Vec<K> {
    self.read(BinarySearchTree::pre_order_traversal)
  }

  /// Snapshot of the keys in left-right-node order.
  #[must_use]
  pub fn post_order_traversal(&self) -> Vec<K> {
    self.read(BinarySearchTree::post_order_traversal)
  }

  /// Snapshot of the keys in breadth-first order.
  #[must_use]
  pub fn level_order_traversal(&self) -> Vec<K> {
    self.read(BinarySearchTree::level_order_traversal)
  }
}

impl<K, V, M> SyncTree<K, V, M>
where
  K: Clone,
  V: Clone,
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  /// Creates an independent tree with the same shape, keys and values.
  #[must_use]
  pub fn copy(&self) -> Self {
    let snapshot = self.read(|tree| {
      tracing::debug!(len = tree.len(), "copying tree");
      tree.clone()
    });
    Self::from_tree(snapshot)
  }
}

impl<K, V, M> Clone for SyncTree<K, V, M>
where
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<K, V, M> fmt::Debug for SyncTree<K, V, M>
where
  K: fmt::Debug,
  V: fmt::Debug,
  M: SyncMutexLike<BinarySearchTree<K, V>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.read(|tree| f.debug_tuple("SyncTree").field(tree).finish())
  }
}
