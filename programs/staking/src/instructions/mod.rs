pub mod claim_rewards;
pub mod create_stake;
pub mod initialize_pool;
pub mod slash;
pub mod unstake;
pub mod update_pool;

pub use claim_rewards::*;
pub use create_stake::*;
pub use initialize_pool::*;
pub use slash::*;
pub use unstake::*;
pub use update_pool::*;
