mod binary_search_tree;
mod sync_tree;

pub use binary_search_tree::BinarySearchTree;
pub use sync_tree::SyncTree;
