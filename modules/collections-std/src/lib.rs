#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::disallowed_types))]

//! `std` bindings for lockbox collections.
//!
//! The facades defined in `lockbox_collections_core_rs` are generic over the lock they hold. This
//! crate provides [`StdSyncMutex`](sync::StdSyncMutex), a poison-tolerant wrapper over
//! `std::sync::Mutex`, and `Std*` aliases binding every facade to it.

/// Facade aliases bound to [`StdSyncMutex`](sync::StdSyncMutex).
pub mod collections;
/// Mutex implementations for std environments.
pub mod sync;

pub use collections::{StdSyncList, StdSyncPriorityQueue, StdSyncQueue, StdSyncSet, StdSyncStack, StdSyncTree};
pub use lockbox_collections_core_rs::{
  f32_order, f64_order, BinarySearchTree, CollectionError, Comparator, HashSetBuffer, HeapEntry, HeapOrder,
  LinkedListBuffer, PriorityHeap, RingBuffer, StackBuffer, DEFAULT_QUEUE_CAPACITY,
};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use lockbox_collections_core_rs::{
    sync::{sync_mutex_like::SyncMutexLike, ArcShared, BufferStorage},
    CollectionError, Comparator, HeapOrder, DEFAULT_QUEUE_CAPACITY,
  };

  pub use crate::{
    collections::{StdSyncList, StdSyncPriorityQueue, StdSyncQueue, StdSyncSet, StdSyncStack, StdSyncTree},
    sync::StdSyncMutex,
  };
}
