use anchor_lang::prelude::*;

use crate::state::{StakerType, StakingConfig};

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub machine_owner_config: StakingConfig,
    pub game_creator_config: StakingConfig,
}

#[event]
pub struct PoolUpdated {
    pub pool: Pubkey,
    pub machine_owner_config: StakingConfig,
    pub game_creator_config: StakingConfig,
    pub is_active: bool,
}

#[event]
pub struct StakeCreated {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub staker_type: StakerType,
    pub amount: u64,
    pub lockup_end_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub reward: u64,
    pub total_rewards_claimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct Unstaked {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub timestamp: i64,
}

#[event]
pub struct Slashed {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub timestamp: i64,
}
