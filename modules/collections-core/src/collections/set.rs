mod hash_set_buffer;
mod sync_set;

pub use hash_set_buffer::HashSetBuffer;
pub use sync_set::SyncSet;
