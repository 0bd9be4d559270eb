mod heap_entry;
mod heap_order;
mod priority_heap;
mod sync_priority_queue;

pub use heap_entry::HeapEntry;
pub use heap_order::HeapOrder;
pub use priority_heap::PriorityHeap;
pub use sync_priority_queue::SyncPriorityQueue;
