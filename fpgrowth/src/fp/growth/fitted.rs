use super::session::MiningStats;
use crate::fp::builder::build_fp_tree;
use crate::fp::config::MinerConfig;
use crate::fp::frequent::ItemFrequencyTable;
use crate::fp::mining::mine_pattern_bases;
use crate::fp::pattern_base::{pattern_base, PatternBase};
use crate::fp::transaction::TransactionStore;
use crate::fp::tree::{FPTree, HeaderChain};
use once_cell::unsync::OnceCell;

/// A mining session whose FP-tree has been built.
#[derive(Debug)]
pub struct FittedFpGrowth {
    config: MinerConfig,
    frequent_items: ItemFrequencyTable,
    transactions: TransactionStore,
    canonical: Vec<String>,
    fp_tree: FPTree,
    pattern_bases: OnceCell<Vec<PatternBase>>,
}

impl FittedFpGrowth {
    pub(super) fn build(
        config: MinerConfig,
        mut frequent_items: ItemFrequencyTable,
        transactions: TransactionStore,
    ) -> Self {
        let canonical = frequent_items.sorted_frequent_items(config.min_support);
        let fp_tree = build_fp_tree(&transactions, &canonical, &mut frequent_items);

        Self {
            config,
            frequent_items,
            transactions,
            canonical,
            fp_tree,
            pattern_bases: OnceCell::new(),
        }
    }

    /// Throws the tree away and builds it again from a fresh root.
    pub fn rebuild(&mut self) {
        self.canonical = self
            .frequent_items
            .sorted_frequent_items(self.config.min_support);
        self.fp_tree = build_fp_tree(&self.transactions, &self.canonical, &mut self.frequent_items);
        self.pattern_bases = OnceCell::new();
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// The item order the tree was built with.
    pub fn canonical_order(&self) -> &[String] {
        &self.canonical
    }

    pub fn frequent_items(&self, min_support: f64) -> Vec<String> {
        self.frequent_items.sorted_frequent_items(min_support)
    }

    pub fn item_frequencies(&self) -> &ItemFrequencyTable {
        &self.frequent_items
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    pub fn tree(&self) -> &FPTree {
        &self.fp_tree
    }

    /// Every node labelled `item`, in creation order.
    pub fn header_chain(&self, item: &str) -> HeaderChain<'_> {
        self.fp_tree.chain(self.frequent_items.head(item))
    }

    pub fn pattern_base(&self, item: &str) -> PatternBase {
        pattern_base(&self.fp_tree, &self.frequent_items, item)
    }

    /// Pattern bases of every frequent item, least frequent first. Mined on
    /// first call and kept until the next rebuild.
    pub fn pattern_bases(&self) -> &[PatternBase] {
        self.pattern_bases.get_or_init(|| {
            mine_pattern_bases(
                &self.fp_tree,
                &self.frequent_items,
                &self.canonical,
                self.config.parallel_mining,
            )
        })
    }

    pub fn stats(&self) -> MiningStats {
        MiningStats {
            total_transactions: self.transactions.len(),
            total_item_occurrences: self.frequent_items.total(),
            unique_items: self.frequent_items.len(),
            frequent_items: self.canonical.len(),
            tree_nodes: self.fp_tree.len(),
        }
    }
}
