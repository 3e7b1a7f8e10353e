use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeCreated;
use crate::state::{StakeAccount, StakerType, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct CreateStake<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    // One stake per (pool, staker); a second create fails at account creation.
    #[account(
        init,
        payer = staker,
        space = StakeAccount::LEN,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(mut, token::mint = pool.mint, token::authority = staker)]
    pub staker_token_account: Account<'info, TokenAccount>,

    #[account(mut, token::mint = pool.mint, token::authority = pool)]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateStake>, staker_type: StakerType, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroStakeAmount);
    require!(ctx.accounts.pool.is_active, StakingError::PoolInactive);
    require!(
        ctx.accounts.staker_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.staker_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.staker.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?;

    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;
    let lockup_end_time = clock
        .unix_timestamp
        .checked_add(pool.config_for(staker_type).lockup_period)
        .ok_or(StakingError::ArithmeticOverflow)?;

    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let stake_account = &mut ctx.accounts.stake_account;
    stake_account.pool = pool.key();
    stake_account.owner = ctx.accounts.staker.key();
    stake_account.staker_type = staker_type;
    stake_account.amount_staked = amount;
    stake_account.stake_start_time = clock.unix_timestamp;
    stake_account.lockup_end_time = lockup_end_time;
    stake_account.last_reward_time = clock.unix_timestamp;
    stake_account.total_rewards_claimed = 0;
    stake_account.bump = ctx.bumps.stake_account;

    emit!(StakeCreated {
        pool: pool.key(),
        staker: stake_account.owner,
        staker_type,
        amount,
        lockup_end_time,
        timestamp: clock.unix_timestamp,
    });

    msg!("Stake created");
    msg!("Amount: {}", amount);
    msg!("Lockup ends at: {}", lockup_end_time);
    Ok(())
}
