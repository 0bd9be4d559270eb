use super::ArcShared;

#[test]
fn clones_share_identity() {
  let shared = ArcShared::new(5_u32);
  let cloned = shared.clone();

  assert!(shared.ptr_eq(&cloned));
  assert_eq!(shared.addr(), cloned.addr());
  assert_eq!(shared.strong_count(), 2);
  assert_eq!(*cloned, 5);
}

#[test]
fn separate_allocations_have_distinct_identity() {
  let first = ArcShared::new(1_u32);
  let second = ArcShared::new(1_u32);

  assert!(!first.ptr_eq(&second));
  assert_ne!(first.addr(), second.addr());
}
