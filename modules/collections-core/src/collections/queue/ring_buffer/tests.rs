use alloc::{string::ToString, vec, vec::Vec};

use super::{RingBuffer, DEFAULT_QUEUE_CAPACITY};
use crate::{CollectionError, Comparator};

#[test]
fn starts_with_default_capacity_and_doubles() {
  let mut queue = RingBuffer::new(Comparator::natural());
  assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY);

  for value in 0..5 {
    queue.enqueue(value);
  }
  assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY * 2);
  assert_eq!(queue.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn growth_preserves_order_after_wrap_around() {
  let mut queue = RingBuffer::with_capacity(4, Comparator::natural());
  for value in 1..=4 {
    queue.enqueue(value);
  }
  assert_eq!(queue.dequeue(), Ok(1));
  assert_eq!(queue.dequeue(), Ok(2));
  queue.enqueue(5);
  queue.enqueue(6);
  // slots are full and wrapped: head sits in the middle
  queue.enqueue(7);

  assert_eq!(queue.capacity(), 8);
  let drained: Vec<i32> = core::iter::from_fn(|| queue.dequeue().ok()).collect();
  assert_eq!(drained, vec![3, 4, 5, 6, 7]);
}

#[test]
fn empty_queue_reports_empty() {
  let mut queue = RingBuffer::<u32>::new(Comparator::natural());
  assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
  assert_eq!(queue.peek(), Err(CollectionError::Empty));
}

#[test]
fn zero_capacity_is_clamped_to_one() {
  let mut queue = RingBuffer::with_capacity(0, Comparator::natural());
  assert_eq!(queue.capacity(), 1);
  queue.enqueue('a');
  queue.enqueue('b');
  assert_eq!(queue.capacity(), 2);
  assert_eq!(queue.peek(), Ok(&'a'));
}

#[test]
fn find_counts_from_the_front() {
  let mut queue = RingBuffer::from_slice(&[5, 6, 7], Comparator::natural());
  assert_eq!(queue.find(&7), Some(2));
  assert_eq!(queue.dequeue(), Ok(5));
  assert_eq!(queue.find(&7), Some(1));
  assert_eq!(queue.find(&5), None);
}

#[test]
fn clear_keeps_capacity_and_display_follows_queue_order() {
  let mut queue = RingBuffer::from_slice(&[1, 2, 3], Comparator::natural());
  assert_eq!(queue.to_string(), "[1 2 3]");

  queue.clear();
  assert!(queue.is_empty());
  assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY);
  assert_eq!(queue.to_string(), "[]");
}
