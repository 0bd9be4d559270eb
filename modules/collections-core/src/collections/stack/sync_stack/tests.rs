use alloc::{string::ToString, vec};
use std::thread;

use super::SyncStack;
use crate::{CollectionError, Comparator};

#[test]
fn operations_round_trip_through_the_lock() {
  let stack: SyncStack<i32> = SyncStack::new(Comparator::natural());
  stack.push(1);
  stack.push(2);

  assert_eq!(stack.peek(), Ok(2));
  assert_eq!(stack.find(&1), Some(0));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.len(), 1);
  stack.clear();
  assert!(stack.is_empty());
  assert_eq!(stack.pop(), Err(CollectionError::Empty));
}

#[test]
fn clone_shares_while_copy_detaches() {
  let stack: SyncStack<i32> = SyncStack::from_slice(&[1, 2, 3], Comparator::natural());
  let handle = stack.clone();
  let copy = stack.copy();

  handle.push(4);
  copy.push(99);

  assert!(stack.same_instance(&handle));
  assert!(!stack.same_instance(&copy));
  assert_eq!(stack.to_vec(), vec![1, 2, 3, 4]);
  assert_eq!(copy.to_vec(), vec![1, 2, 3, 99]);
  assert_eq!(copy.to_string(), "[1 2 3 99]");
}

#[test]
fn concurrent_pushes_are_all_kept() {
  let stack: SyncStack<usize> = SyncStack::with_capacity(64, Comparator::natural());

  thread::scope(|scope| {
    for worker in 0..4 {
      let stack = stack.clone();
      scope.spawn(move || {
        for value in 0..50 {
          stack.push(worker * 100 + value);
        }
      });
    }
  });

  assert_eq!(stack.len(), 200);
}
