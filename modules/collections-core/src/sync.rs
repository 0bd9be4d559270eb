mod arc_shared;
mod buffer_storage;
/// Mutex abstraction shared by every synchronized facade.
pub mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use buffer_storage::BufferStorage;
