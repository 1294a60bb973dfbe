// Tree module - FP-Tree arena and inspection helpers

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, NodeId, ROOT_LABEL};
pub use tree_ops::{HeaderChain, TreeSnapshot};
