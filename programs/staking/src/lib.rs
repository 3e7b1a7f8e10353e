use anchor_lang::prelude::*;
use instructions::*;
use state::{StakerType, StakingConfig};

declare_id!("CpFJ2u99ZK3UP1SjdXMBs1mpre1mA5Zr76ySdjLihRWi");

mod constants;
mod error;
mod events;
mod instructions;
mod state;

#[program]
pub mod arcade_staking {
    use super::*;

    pub fn initialize_pool_v1(
        ctx: Context<InitializePool>,
        machine_owner_config: StakingConfig,
        game_creator_config: StakingConfig,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, machine_owner_config, game_creator_config)
    }

    pub fn update_pool_v1(
        ctx: Context<UpdatePool>,
        machine_owner_config: StakingConfig,
        game_creator_config: StakingConfig,
        is_active: bool,
    ) -> Result<()> {
        instructions::update_pool::handler(ctx, machine_owner_config, game_creator_config, is_active)
    }

    pub fn create_stake_v1(
        ctx: Context<CreateStake>,
        staker_type: StakerType,
        amount: u64,
    ) -> Result<()> {
        instructions::create_stake::handler(ctx, staker_type, amount)
    }

    pub fn claim_rewards_v1(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    pub fn unstake_v1(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    pub fn slash_v1(ctx: Context<Slash>, amount: u64) -> Result<()> {
        instructions::slash::handler(ctx, amount)
    }
}
