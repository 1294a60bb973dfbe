use super::fitted::FittedFpGrowth;
use crate::fp::config::MinerConfig;
use crate::fp::error::FpGrowthError;
use crate::fp::frequent::ItemFrequencyTable;
use crate::fp::transaction::{transactions_from_matrix, Transaction, TransactionStore};
use ndarray::ArrayView2;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiningStats {
    pub total_transactions: usize,
    pub total_item_occurrences: usize,
    pub unique_items: usize,
    pub frequent_items: usize,
    pub tree_nodes: usize,
}

/// Ingestion phase of a mining session.
///
/// Transactions are counted as they arrive; [`FpGrowth::build_tree`] consumes
/// the session once every transaction is in.
#[derive(Debug, Clone)]
pub struct FpGrowth {
    config: MinerConfig,
    frequent_items: ItemFrequencyTable,
    transactions: TransactionStore,
}

impl FpGrowth {
    pub fn new(min_support: f64) -> Result<Self, FpGrowthError> {
        Self::with_config(MinerConfig::new(min_support))
    }

    pub fn with_config(config: MinerConfig) -> Result<Self, FpGrowthError> {
        config.validate()?;
        Ok(Self {
            config,
            frequent_items: ItemFrequencyTable::new(),
            transactions: TransactionStore::new(),
        })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    pub fn min_support(&self) -> f64 {
        self.config.min_support
    }

    /// Stores a transaction and counts its non-empty labels.
    ///
    /// `None` is rejected with [`FpGrowthError::MissingTransaction`] and
    /// leaves the session untouched.
    pub fn insert<T>(&mut self, transaction: T) -> Result<(), FpGrowthError>
    where
        T: Into<Option<Transaction>>,
    {
        let transaction: Option<Transaction> = transaction.into();
        let Some(transaction) = transaction else {
            warn!("rejected missing transaction");
            return Err(FpGrowthError::MissingTransaction);
        };

        self.ingest(transaction);
        Ok(())
    }

    /// Inserts in order and stops at the first missing transaction. Whatever
    /// was inserted before it stays.
    pub fn insert_all<I, T>(&mut self, transactions: I) -> Result<(), FpGrowthError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Transaction>>,
    {
        for (position, transaction) in transactions.into_iter().enumerate() {
            if let Err(err) = self.insert(transaction) {
                warn!(position, "batch insert stopped");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Inserts every row of a binary matrix, labelling columns with `labels`.
    pub fn insert_matrix(&mut self, matrix: ArrayView2<i32>, labels: &[String]) {
        for transaction in transactions_from_matrix(matrix, labels) {
            self.ingest(transaction);
        }
    }

    fn ingest(&mut self, transaction: Transaction) {
        for item in transaction.items.iter().filter(|item| !item.is_empty()) {
            self.frequent_items.add(item);
        }
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    pub fn item_frequencies(&self) -> &ItemFrequencyTable {
        &self.frequent_items
    }

    pub fn item_count(&self, item: &str) -> usize {
        self.frequent_items.get(item)
    }

    /// Canonical item order for an arbitrary support threshold.
    pub fn frequent_items(&self, min_support: f64) -> Vec<String> {
        self.frequent_items.sorted_frequent_items(min_support)
    }

    pub fn stats(&self) -> MiningStats {
        MiningStats {
            total_transactions: self.transactions.len(),
            total_item_occurrences: self.frequent_items.total(),
            unique_items: self.frequent_items.len(),
            frequent_items: self.frequent_items(self.config.min_support).len(),
            tree_nodes: 0,
        }
    }

    /// Drops every transaction and count, keeping the configuration.
    pub fn reset(&mut self) {
        self.frequent_items.reset();
        self.transactions.clear();
    }

    /// Computes the canonical order from the final counts and builds the tree.
    pub fn build_tree(self) -> FittedFpGrowth {
        FittedFpGrowth::build(self.config, self.frequent_items, self.transactions)
    }

    /// [`insert_all`](Self::insert_all) followed by [`build_tree`](Self::build_tree).
    ///
    /// A rejected batch drops the session; call the two steps separately to
    /// keep it.
    pub fn fit<I, T>(mut self, transactions: I) -> Result<FittedFpGrowth, FpGrowthError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Transaction>>,
    {
        self.insert_all(transactions)?;
        Ok(self.build_tree())
    }
}
