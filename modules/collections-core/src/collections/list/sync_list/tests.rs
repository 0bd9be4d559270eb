use alloc::{string::ToString, vec};

use super::SyncList;
use crate::{CollectionError, Comparator};

#[test]
fn positional_operations_through_the_lock() {
  let list: SyncList<char> = SyncList::from_slice(&['a', 'c'], Comparator::natural());
  list.insert_position('b', 1).unwrap();
  list.insert_front('_');
  list.insert_back('d');

  assert_eq!(list.to_vec(), vec!['_', 'a', 'b', 'c', 'd']);
  assert_eq!(list.get(2), Ok('b'));
  assert_eq!(list.find(&'c'), Some(3));
  assert_eq!(list.remove_position(0), Ok('_'));
  assert_eq!(list.get(9), Err(CollectionError::out_of_range(9, 4)));
}

#[test]
fn reverse_and_display() {
  let list: SyncList<i32> = SyncList::from_slice(&[1, 2, 3], Comparator::natural());
  list.reverse();

  assert_eq!(list.to_string(), "[3 2 1]");
  assert_eq!(list.remove_front(), Ok(3));
  assert_eq!(list.remove_back(), Ok(1));
}

#[test]
fn copy_detaches_from_the_source() {
  let list: SyncList<i32> = SyncList::new(Comparator::natural());
  list.insert_back(1);
  let copy = list.copy();
  copy.insert_back(2);
  list.clear();

  assert!(list.is_empty());
  assert_eq!(copy.len(), 2);
  assert_eq!(copy.to_vec(), vec![1, 2]);
}
