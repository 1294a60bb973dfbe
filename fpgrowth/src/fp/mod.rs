pub mod builder;
pub mod config;
pub mod error;
pub mod frequent;
pub mod growth;
pub mod mining;
pub mod pattern_base;
pub mod transaction;
pub mod tree;

#[cfg(test)]
mod tests;

pub use builder::build_fp_tree;
pub use config::MinerConfig;
pub use error::FpGrowthError;
pub use frequent::{ItemCount, ItemFrequencyTable};
pub use growth::{FittedFpGrowth, FpGrowth, MiningStats};
pub use mining::mine_pattern_bases;
pub use pattern_base::{conditional_pattern_bases, intersect_pattern_bases, PatternBase};
pub use transaction::{transactions_from_matrix, Transaction, TransactionStore};
pub use tree::{FPNode, FPTree, HeaderChain, NodeId, TreeSnapshot, ROOT_LABEL};
