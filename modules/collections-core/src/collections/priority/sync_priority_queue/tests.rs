use std::thread;

use super::SyncPriorityQueue;
use crate::{CollectionError, Comparator, HeapOrder};

#[test]
fn max_queue_through_the_lock() {
  let queue: SyncPriorityQueue<u8, &str> = SyncPriorityQueue::new_max(Comparator::natural());
  queue.enqueue(1, "low");
  queue.enqueue(2, "medium");
  queue.enqueue(3, "high");

  assert_eq!(queue.order(), HeapOrder::Max);
  assert_eq!(queue.peek(), Ok((3, "high")));
  assert_eq!(queue.extract_top(), Ok((3, "high")));
  assert_eq!(queue.len(), 2);
}

#[test]
fn copy_and_clear_are_independent() {
  let queue: SyncPriorityQueue<i32, ()> = SyncPriorityQueue::new_min(Comparator::natural());
  queue.enqueue(2, ());
  queue.enqueue(1, ());
  let copy = queue.copy();
  queue.clear();

  assert!(queue.is_empty());
  assert_eq!(queue.extract_top(), Err(CollectionError::Empty));
  assert_eq!(copy.extract_top(), Ok((1, ())));
  assert_eq!(copy.len(), 1);
}

#[test]
fn concurrent_producers_then_ordered_drain() {
  let queue: SyncPriorityQueue<usize, usize> =
    SyncPriorityQueue::new(Comparator::natural(), HeapOrder::Min);

  thread::scope(|scope| {
    for worker in 0..5 {
      let queue = queue.clone();
      scope.spawn(move || {
        for step in 0..40 {
          queue.enqueue((step * 7 + worker * 13) % 101, worker);
        }
      });
    }
  });

  assert_eq!(queue.len(), 200);
  let mut previous = 0;
  while let Ok((priority, _)) = queue.extract_top() {
    assert!(priority >= previous);
    previous = priority;
  }
}
