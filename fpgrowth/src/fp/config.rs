use super::error::FpGrowthError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Fraction of all item occurrences an item needs to be frequent.
    pub min_support: f64,
    /// Fan pattern-base mining out over rayon's pool.
    pub parallel_mining: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            parallel_mining: false,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel_mining(mut self, parallel: bool) -> Self {
        self.parallel_mining = parallel;
        self
    }

    /// Rejects supports outside `[0, 1]`, NaN included.
    pub fn validate(&self) -> Result<(), FpGrowthError> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(FpGrowthError::InvalidConfiguration {
                min_support: self.min_support,
            });
        }
        Ok(())
    }
}
