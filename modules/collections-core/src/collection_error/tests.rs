use alloc::string::ToString;

use super::CollectionError;

#[test]
fn messages_describe_the_failure() {
  assert_eq!(CollectionError::Empty.to_string(), "container is empty");
  assert_eq!(CollectionError::NotFound.to_string(), "key not found");
  assert_eq!(CollectionError::out_of_range(7, 3).to_string(), "index 7 out of range for length 3");
}

#[test]
fn out_of_range_carries_position_and_length() {
  let err = CollectionError::out_of_range(4, 2);
  assert!(matches!(err, CollectionError::IndexOutOfRange { index: 4, len: 2 }));
}
