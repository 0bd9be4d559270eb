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
#![cfg_attr(not(test), no_std)]

//! Runtime-agnostic building blocks for lockbox collections.
//!
//! The crate is split into two layers. The buffers ([`StackBuffer`], [`RingBuffer`],
//! [`LinkedListBuffer`], [`HashSetBuffer`], [`BinarySearchTree`], [`PriorityHeap`]) are plain
//! single-owner containers operated through `&mut self`. The synchronized facades ([`SyncStack`],
//! [`SyncQueue`], [`SyncList`], [`SyncSet`], [`SyncTree`], [`SyncPriorityQueue`]) put exactly one
//! [`SyncMutexLike`](sync::sync_mutex_like::SyncMutexLike) lock in front of a buffer and expose a
//! `&self` API that is safe to share across threads.
//!
//! The facades default to a spin lock so they work without `std`. The `lockbox-collections-std-rs`
//! crate binds them to `std::sync::Mutex`.

extern crate alloc;

/// Container buffers and their synchronized facades.
pub mod collections;
mod collection_error;
mod comparator;
/// Shared ownership and mutex abstractions.
pub mod sync;

pub use collection_error::CollectionError;
pub use collections::{
  BinarySearchTree, HashSetBuffer, HeapEntry, HeapOrder, LinkedListBuffer, PriorityHeap, RingBuffer, StackBuffer,
  SyncList, SyncPriorityQueue, SyncQueue, SyncSet, SyncStack, SyncTree, DEFAULT_QUEUE_CAPACITY,
};
pub use comparator::{f32_order, f64_order, Comparator};
pub use sync::{ArcShared, BufferStorage};
