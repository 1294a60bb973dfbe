use thiserror::Error;

/// Errors surfaced while configuring a miner or feeding it transactions.
///
/// Building the tree and mining pattern bases never fail; they only run on
/// input that already went through these checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FpGrowthError {
    #[error("invalid minimum support {min_support}: must be from 0 to 1")]
    InvalidConfiguration { min_support: f64 },

    #[error("missing transaction")]
    MissingTransaction,
}
