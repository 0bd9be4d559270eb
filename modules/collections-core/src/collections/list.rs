mod linked_list_buffer;
mod sync_list;

pub use linked_list_buffer::LinkedListBuffer;
pub use sync_list::SyncList;
