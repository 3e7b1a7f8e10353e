use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolUpdated;
use crate::state::{StakingConfig, StakingPool};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.mint.as_ref()],
        bump = pool.bump,
        constraint = authority.key() == pool.authority @ StakingError::Unauthorized
    )]
    pub pool: Account<'info, StakingPool>,

    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<UpdatePool>,
    machine_owner_config: StakingConfig,
    game_creator_config: StakingConfig,
    is_active: bool,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    pool.machine_owner_config = machine_owner_config;
    pool.game_creator_config = game_creator_config;
    pool.is_active = is_active;

    emit!(PoolUpdated {
        pool: pool.key(),
        machine_owner_config,
        game_creator_config,
        is_active,
    });

    msg!("Pool configuration updated, active: {}", is_active);
    Ok(())
}
