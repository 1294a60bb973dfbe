//! Frequent itemset groundwork: FP-tree construction and conditional
//! pattern base extraction over labelled transactions.
//!
//! ```
//! use fpgrowth::{FpGrowth, Transaction};
//!
//! let mut fpg = FpGrowth::new(0.2)?;
//! fpg.insert(Transaction::new(0, ["bread", "milk"]))?;
//! fpg.insert(Transaction::new(1, ["bread", "butter", "milk"]))?;
//! let fitted = fpg.build_tree();
//!
//! assert_eq!(fitted.canonical_order(), ["milk", "bread", "butter"]);
//! assert_eq!(fitted.pattern_base("butter").sub_pattern_base.len(), 2);
//! # Ok::<(), fpgrowth::FpGrowthError>(())
//! ```

pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use fp::{
    FPNode, FPTree, FittedFpGrowth, FpGrowth, FpGrowthError, ItemCount, ItemFrequencyTable,
    MinerConfig, MiningStats, NodeId, PatternBase, Transaction, TransactionStore, TreeSnapshot,
};
