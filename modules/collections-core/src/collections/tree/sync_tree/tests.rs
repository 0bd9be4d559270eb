use alloc::{string::String, vec};
use std::thread;

use super::SyncTree;
use crate::{CollectionError, Comparator};

#[test]
fn operations_through_the_lock() {
  let tree: SyncTree<i32, String> = SyncTree::new(Comparator::natural());
  for key in [4, 8, 2, 6, 3, 1] {
    tree.insert(key, String::new());
  }

  assert_eq!(tree.pre_order_traversal(), vec![4, 2, 1, 3, 8, 6]);
  assert_eq!(tree.post_order_traversal(), vec![1, 3, 2, 6, 8, 4]);
  assert_eq!(tree.height(), 2);
  assert_eq!(tree.find_min(), Ok(1));
  assert_eq!(tree.find_max(), Ok(8));
  assert_eq!(tree.search(&6), Ok(String::new()));
  assert_eq!(tree.remove(&9), Err(CollectionError::NotFound));
  assert_eq!(tree.len(), 6);
}

#[test]
fn copy_is_independent() {
  let tree: SyncTree<u32, &str> = SyncTree::new(Comparator::natural());
  tree.insert(2, "two");
  tree.insert(1, "one");
  let copy = tree.copy();

  copy.insert(3, "three");
  assert_eq!(tree.remove(&1), Ok("one"));

  assert_eq!(tree.in_order_traversal(), vec![2]);
  assert_eq!(copy.in_order_traversal(), vec![1, 2, 3]);
  assert_eq!(copy.search(&1), Ok("one"));
}

#[test]
fn concurrent_inserts_are_counted_once() {
  let tree: SyncTree<usize, usize> = SyncTree::new(Comparator::natural());

  thread::scope(|scope| {
    for worker in 0..8 {
      let tree = tree.clone();
      scope.spawn(move || {
        for offset in 0..50 {
          tree.insert(worker * 50 + offset, worker);
        }
      });
    }
  });

  assert_eq!(tree.len(), 400);
  let keys = tree.in_order_traversal();
  assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
  tree.clear();
  assert!(tree.level_order_traversal().is_empty());
}
