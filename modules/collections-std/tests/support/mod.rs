#![allow(dead_code)]

use std::thread;

use lockbox_collections_std_rs::CollectionError;

/// Installs a test-friendly `fmt` subscriber once per test binary.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init();
}

/// Runs `operation(worker, repetition)` `repetitions` times on each of `threads` scoped threads and
/// fails the test when any call returned an error.
pub fn concurrent_operations<F>(threads: usize, repetitions: usize, operation: F)
where
  F: Fn(usize, usize) -> Result<(), CollectionError> + Sync, {
  let operation = &operation;
  let errors: Vec<(usize, CollectionError)> = thread::scope(|scope| {
    let workers: Vec<_> = (0..threads)
      .map(|worker| {
        scope.spawn(move || {
          (0..repetitions).filter_map(|repetition| operation(worker, repetition).err()).collect::<Vec<_>>()
        })
      })
      .collect();
    workers
      .into_iter()
      .enumerate()
      .flat_map(|(worker, handle)| {
        handle.join().expect("worker panicked").into_iter().map(move |error| (worker, error))
      })
      .collect()
  });
  assert!(errors.is_empty(), "{} operations failed: {errors:?}", errors.len());
}
