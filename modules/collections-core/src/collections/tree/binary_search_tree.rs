use alloc::{boxed::Box, collections::VecDeque, vec::Vec};
use core::{cmp::Ordering, fmt};

use crate::{CollectionError, Comparator};


type Link<K, V> = Option<Box<TreeNode<K, V>>>;

struct TreeNode<K, V> {
  key:   K,
  value: V,
  left:  Link<K, V>,
  right: Link<K, V>,
}

impl<K, V> TreeNode<K, V> {
  const fn leaf(key: K, value: V) -> Self {
    Self { key, value, left: None, right: None }
  }
}

/// Unbalanced binary search tree mapping keys to values.
///
/// Keys comparing `Less` than a node go to its left subtree, everything else (duplicates
/// included) goes right, so an in-order walk yields keys in non-decreasing order. Every walk is
/// iterative; a degenerate chain built from sorted input cannot overflow the call stack.
pub struct BinarySearchTree<K, V> {
  root:       Link<K, V>,
  len:        usize,
  comparator: Comparator<K>,
}

impl<K, V> BinarySearchTree<K, V> {
  /// Creates an empty tree ordered by `comparator`.
  #[must_use]
  pub const fn new(comparator: Comparator<K>) -> Self {
    Self { root: None, len: 0, comparator }
  }

  /// Inserts a new leaf; an equal key is placed to the right of the existing ones.
  pub fn insert(&mut self, key: K, value: V) {
    let mut link = &mut self.root;
    while let Some(node) = link {
      link = if self.comparator.compare(&key, &node.key) == Ordering::Less { &mut node.left } else { &mut node.right };
    }
    *link = Some(Box::new(TreeNode::leaf(key, value)));
    self.len += 1;
  }

  /// Returns the value of the first node on the search path whose key equals `key`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NotFound`] when no node matches.
  pub fn search(&self, key: &K) -> Result<&V, CollectionError> {
    let mut cursor = self.root.as_deref();
    while let Some(node) = cursor {
      match self.comparator.compare(key, &node.key) {
        | Ordering::Less => cursor = node.left.as_deref(),
        | Ordering::Equal => return Ok(&node.value),
        | Ordering::Greater => cursor = node.right.as_deref(),
      }
    }
    Err(CollectionError::NotFound)
  }

  /// Removes the first node on the search path whose key equals `key` and returns its value.
  ///
  /// A node with two children is replaced by the maximum of its left subtree.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NotFound`] when no node matches; the tree is left untouched.
  pub fn remove(&mut self, key: &K) -> Result<V, CollectionError> {
    let mut link = &mut self.root;
    loop {
      let ordering = match link.as_deref() {
        | Some(node) => self.comparator.compare(key, &node.key),
        | None => return Err(CollectionError::NotFound),
      };
      if ordering == Ordering::Equal {
        break;
      }
      let Some(node) = link else {
        return Err(CollectionError::NotFound);
      };
      link = if ordering == Ordering::Less { &mut node.left } else { &mut node.right };
    }

    let removed = link.take().ok_or(CollectionError::NotFound)?;
    let (replacement, value) = Self::replace_node(*removed);
    *link = replacement;
    self.len -= 1;
    Ok(value)
  }

  /// Key of the leftmost node.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the tree holds no nodes.
  pub fn find_min(&self) -> Result<&K, CollectionError> {
    let mut node = self.root.as_deref().ok_or(CollectionError::Empty)?;
    while let Some(left) = node.left.as_deref() {
      node = left;
    }
    Ok(&node.key)
  }

  /// Key of the rightmost node.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the tree holds no nodes.
  pub fn find_max(&self) -> Result<&K, CollectionError> {
    let mut node = self.root.as_deref().ok_or(CollectionError::Empty)?;
    while let Some(right) = node.right.as_deref() {
      node = right;
    }
    Ok(&node.key)
  }

  /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
  #[must_use]
  pub fn height(&self) -> isize {
    let mut level: Vec<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
      height += 1;
      level = level.iter().flat_map(|node| [node.left.as_deref(), node.right.as_deref()]).flatten().collect();
    }
    height
  }

  /// Removes every node.
  pub fn clear(&mut self) {
    Self::dismantle(self.root.take());
    self.len = 0;
  }

  /// Number of nodes.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the tree holds no nodes.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Comparator ordering the keys.
  #[must_use]
  pub const fn comparator(&self) -> &Comparator<K> {
    &self.comparator
  }

  fn replace_node(node: TreeNode<K, V>) -> (Link<K, V>, V) {
    let TreeNode { value, left, right, .. } = node;
    let replacement = match (left, right) {
      | (None, None) => None,
      | (Some(child), None) | (None, Some(child)) => Some(child),
      | (Some(mut left), Some(right)) => match Self::detach_rightmost(&mut left.right) {
        | Some(mut promoted) => {
          tracing::trace!("promoting in-order predecessor from the left subtree");
          promoted.left = Some(left);
          promoted.right = Some(right);
          Some(promoted)
        },
        | None => {
          left.right = Some(right);
          Some(left)
        },
      },
    };
    (replacement, value)
  }

  /// Unlinks the rightmost node reachable from `link`, leaving its left subtree in its slot.
  fn detach_rightmost(mut link: &mut Link<K, V>) -> Link<K, V> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
      let Some(node) = link else {
        return None;
      };
      link = &mut node.right;
    }
    let mut rightmost = link.take()?;
    *link = rightmost.left.take();
    Some(rightmost)
  }

  fn dismantle(root: Link<K, V>) {
    let mut pending: Vec<Box<TreeNode<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
      pending.extend(node.left.take());
      pending.extend(node.right.take());
    }
  }

  fn in_order_nodes(&self) -> Vec<&TreeNode<K, V>> {
    let mut visited = Vec::with_capacity(self.len);
    let mut stack = Vec::new();
    let mut cursor = self.root.as_deref();
    loop {
      while let Some(node) = cursor {
        stack.push(node);
        cursor = node.left.as_deref();
      }
      let Some(node) = stack.pop() else {
        break;
      };
      visited.push(node);
      cursor = node.right.as_deref();
    }
    visited
  }

  fn pre_order_nodes(&self) -> Vec<&TreeNode<K, V>> {
    let mut visited = Vec::with_capacity(self.len);
    let mut stack: Vec<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
      visited.push(node);
      stack.extend(node.right.as_deref());
      stack.extend(node.left.as_deref());
    }
    visited
  }

  fn post_order_nodes(&self) -> Vec<&TreeNode<K, V>> {
    let mut visited = Vec::with_capacity(self.len);
    let mut stack: Vec<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
      visited.push(node);
      stack.extend(node.left.as_deref());
      stack.extend(node.right.as_deref());
    }
    visited.reverse();
    visited
  }

  fn level_order_nodes(&self) -> Vec<&TreeNode<K, V>> {
    let mut visited = Vec::with_capacity(self.len);
    let mut queue: VecDeque<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
      visited.push(node);
      queue.extend(node.left.as_deref());
      queue.extend(node.right.as_deref());
    }
    visited
  }
}

impl<K: Clone, V> BinarySearchTree<K, V> {
  /// Keys in left-node-right order.
  #[must_use]
  pub fn in_order_traversal(&self) -> Vec<K> {
    Self::keys_of(self.in_order_nodes())
  }

  /// Keys in node-left-right order.
  #[must_use]
  pub fn pre_order_traversal(&self) -> Vec<K> {
    Self::keys_of(self.pre_order_nodes())
  }

  /// Keys in left-right-node order.
  #[must_use]
  pub fn post_order_traversal(&self) -> Vec<K> {
    Self::keys_of(self.post_order_nodes())
  }

  /// Keys in breadth-first order, level by level from the root.
  #[must_use]
  pub fn level_order_traversal(&self) -> Vec<K> {
    Self::keys_of(self.level_order_nodes())
  }

  fn keys_of(nodes: Vec<&TreeNode<K, V>>) -> Vec<K> {
    nodes.into_iter().map(|node| node.key.clone()).collect()
  }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
  fn drop(&mut self) {
    Self::dismantle(self.root.take());
  }
}

impl<K: Clone, V: Clone> Clone for BinarySearchTree<K, V> {
  fn clone(&self) -> Self {
    // post-order guarantees both subtrees of a node are built before the node itself
    let mut built: Vec<Box<TreeNode<K, V>>> = Vec::with_capacity(self.len);
    for node in self.post_order_nodes() {
      let right = if node.right.is_some() { built.pop() } else { None };
      let left = if node.left.is_some() { built.pop() } else { None };
      built.push(Box::new(TreeNode { key: node.key.clone(), value: node.value.clone(), left, right }));
    }
    let root = built.pop();
    debug_assert!(built.is_empty());
    Self { root, len: self.len, comparator: self.comparator.clone() }
  }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.in_order_nodes().into_iter().map(|node| (&node.key, &node.value))).finish()
  }
}

impl<K, V> Extend<(K, V)> for BinarySearchTree<K, V> {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
    for (key, value) in entries {
      self.insert(key, value);
    }
  }
}
