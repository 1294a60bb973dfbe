mod fitted;
mod session;

pub use fitted::FittedFpGrowth;
pub use session::{FpGrowth, MiningStats};
