use std::{
  panic::{self, AssertUnwindSafe},
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
  thread,
};

use lockbox_collections_core_rs::{CollectionError, Comparator, HeapOrder};

use super::*;

#[test]
fn std_stack_round_trip() {
  let stack: StdSyncStack<u32> = StdSyncStack::from_slice(&[1, 2], Comparator::natural());
  stack.push(3);

  assert_eq!(stack.to_string(), "[1 2 3]");
  assert_eq!(stack.pop(), Ok(3));
  assert_eq!(stack.find(&1), Some(0));
}

#[test]
fn std_queue_grows_from_the_default_capacity() {
  let queue: StdSyncQueue<u32> = StdSyncQueue::new(Comparator::natural());
  for value in 0..5 {
    queue.enqueue(value);
  }

  assert_eq!(queue.capacity(), 8);
  assert_eq!(queue.dequeue(), Ok(0));
  assert_eq!(queue.to_string(), "[1 2 3 4]");
}

#[test]
fn std_list_positional_access() {
  let list: StdSyncList<&str> = StdSyncList::from_slice(&["a", "c"], Comparator::natural());
  list.insert_position("b", 1).unwrap();

  assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
  assert_eq!(list.remove_position(5), Err(CollectionError::out_of_range(5, 3)));
}

#[test]
fn std_set_algebra() {
  let left: StdSyncSet<u8> = StdSyncSet::from_slice(&[1, 2, 3]);
  let right: StdSyncSet<u8> = StdSyncSet::from_slice(&[3, 4, 5]);

  assert_eq!(left.union(&right).len(), 5);
  assert_eq!(left.intersection(&right).to_vec(), vec![3]);
}

#[test]
fn std_tree_and_heap() {
  let tree: StdSyncTree<i32, ()> = StdSyncTree::new(Comparator::natural());
  for key in [4, 8, 2, 6, 3, 1] {
    tree.insert(key, ());
  }
  assert_eq!(tree.level_order_traversal(), vec![4, 2, 8, 1, 3, 6]);

  let heap: StdSyncPriorityQueue<i32, &str> = StdSyncPriorityQueue::new(Comparator::natural(), HeapOrder::Max);
  heap.enqueue(1, "low");
  heap.enqueue(3, "high");
  assert_eq!(heap.extract_top(), Ok((3, "high")));
}

#[test]
fn panicking_comparator_does_not_wedge_the_container() {
  let stack: StdSyncStack<i32> = StdSyncStack::new(Comparator::from_fn(|left: &i32, right: &i32| {
    assert!(*left >= 0 && *right >= 0, "negative values are not comparable");
    left.cmp(right)
  }));
  stack.push(1);

  let worker = stack.clone();
  let outcome = thread::spawn(move || panic::catch_unwind(AssertUnwindSafe(|| worker.find(&-1))).is_err())
    .join()
    .unwrap();
  assert!(outcome);

  stack.push(2);
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.find(&2), Some(1));
}

#[test]
fn heap_stays_ordered_after_a_poisoned_extraction() {
  let failing = Arc::new(AtomicBool::new(false));
  let trigger = Arc::clone(&failing);
  let heap: StdSyncPriorityQueue<i32, char> = StdSyncPriorityQueue::new(
    Comparator::from_fn(move |left: &i32, right: &i32| {
      assert!(!trigger.load(Ordering::SeqCst), "comparator failure");
      left.cmp(right)
    }),
    HeapOrder::Max,
  );
  for (priority, value) in [(2, 'b'), (7, 'g'), (4, 'd'), (9, 'i'), (1, 'a'), (6, 'f')] {
    heap.enqueue(priority, value);
  }

  failing.store(true, Ordering::SeqCst);
  let worker = heap.clone();
  let outcome = thread::spawn(move || panic::catch_unwind(AssertUnwindSafe(|| worker.extract_top())).is_err())
    .join()
    .unwrap();
  assert!(outcome);
  failing.store(false, Ordering::SeqCst);

  let drained: Vec<i32> = std::iter::from_fn(|| heap.extract_top().ok().map(|(priority, _)| priority)).collect();
  assert_eq!(drained, vec![9, 7, 6, 4, 2, 1]);
}
