use alloc::{string::ToString, vec};

use super::StackBuffer;
use crate::{CollectionError, Comparator};

#[test]
fn push_and_pop_follow_lifo_order() {
  let mut stack = StackBuffer::new(Comparator::natural());
  stack.push(1);
  stack.push(2);
  stack.push(3);

  assert_eq!(stack.len(), 3);
  assert_eq!(stack.peek(), Ok(&3));
  assert_eq!(stack.pop(), Ok(3));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert!(stack.is_empty());
}

#[test]
fn empty_stack_reports_empty() {
  let mut stack = StackBuffer::<u8>::with_capacity(8, Comparator::natural());
  assert_eq!(stack.pop(), Err(CollectionError::Empty));
  assert_eq!(stack.peek(), Err(CollectionError::Empty));
}

#[test]
fn find_counts_from_the_bottom() {
  let stack = StackBuffer::from_slice(&[10, 20, 30, 20], Comparator::natural());
  assert_eq!(stack.find(&10), Some(0));
  assert_eq!(stack.find(&20), Some(1));
  assert_eq!(stack.find(&99), None);
}

#[test]
fn from_slice_copies_the_input() {
  let mut source = vec![1, 2];
  let stack = StackBuffer::from_slice(&source, Comparator::natural());
  source.push(3);
  source[0] = 42;

  assert_eq!(stack.to_vec(), vec![1, 2]);
  assert_eq!(stack.peek(), Ok(&2));
}

#[test]
fn display_lists_bottom_to_top() {
  let mut stack = StackBuffer::new(Comparator::natural());
  assert_eq!(stack.to_string(), "[]");
  stack.push(1);
  stack.push(2);
  stack.push(3);
  assert_eq!(stack.to_string(), "[1 2 3]");
  stack.clear();
  assert_eq!(stack.to_string(), "[]");
}
