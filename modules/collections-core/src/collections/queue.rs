mod ring_buffer;
mod sync_queue;

pub use ring_buffer::{RingBuffer, DEFAULT_QUEUE_CAPACITY};
pub use sync_queue::SyncQueue;
