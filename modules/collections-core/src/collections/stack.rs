mod stack_buffer;
mod sync_stack;

pub use stack_buffer::StackBuffer;
pub use sync_stack::SyncStack;
