use std::{
  io::Write,
  sync::{Arc, Mutex},
  thread,
};

use lockbox_collections_core_rs::sync::sync_mutex_like::SyncMutexLike;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

use super::StdSyncMutex;

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn poison(mutex: &Arc<StdSyncMutex<u32>>) {
  let handle = Arc::clone(mutex);
  let outcome = thread::spawn(move || {
    let _guard = handle.lock();
    panic!("poisoning the lock on purpose");
  })
  .join();
  assert!(outcome.is_err());
}

#[test]
fn lock_and_into_inner_through_the_trait() {
  let mutex = <StdSyncMutex<Vec<u8>> as SyncMutexLike<Vec<u8>>>::new(vec![1]);
  SyncMutexLike::lock(&mutex).push(2);
  assert_eq!(SyncMutexLike::into_inner(mutex), vec![1, 2]);
}

#[test]
fn poisoned_lock_is_recovered() {
  let mutex = Arc::new(StdSyncMutex::new(5));
  poison(&mutex);
  assert!(mutex.as_inner().is_poisoned());

  *mutex.lock() += 1;
  assert_eq!(*mutex.lock(), 6);

  let mutex = Arc::try_unwrap(mutex).ok().unwrap();
  assert_eq!(mutex.into_inner(), 6);
}

#[test]
fn recovery_emits_a_warning() {
  let mutex = Arc::new(StdSyncMutex::new(0));
  poison(&mutex);

  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  with_default(subscriber, || {
    *mutex.lock() += 1;
  });

  let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
  assert!(output.contains("WARN"));
  assert!(output.contains("poisoned collection lock"));
}
