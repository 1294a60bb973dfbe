use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub items: Vec<String>,
}

impl Transaction {
    pub fn new<I, S>(id: u64, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test; repeated labels count once.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}

/// Ordered, append-only list of every transaction ingested so far.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Convert a binary transaction matrix to labelled transactions.
///
/// Row `i` becomes transaction `i`; every non-zero cell in column `j`
/// contributes `labels[j]`. Columns past the end of `labels` are ignored.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>, labels: &[String]) -> Vec<Transaction> {
    let num_items = matrix.shape()[1].min(labels.len());

    matrix
        .rows()
        .into_iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let items = (0..num_items)
                .filter(|&j| row[j] != 0)
                .map(|j| labels[j].clone())
                .collect();
            Transaction {
                id: row_idx as u64,
                items,
            }
        })
        .collect()
}
