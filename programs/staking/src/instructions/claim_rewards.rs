use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::state::{StakeAccount, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [STAKE_SEED, pool.key().as_ref(), staker.key().as_ref()],
        bump = stake_account.bump,
        has_one = pool,
        constraint = stake_account.owner == staker.key() @ StakingError::Unauthorized
    )]
    pub stake_account: Account<'info, StakeAccount>,

    pub staker: Signer<'info>,

    #[account(mut, token::mint = pool.mint, token::authority = staker)]
    pub staker_token_account: Account<'info, TokenAccount>,

    #[account(mut, token::mint = pool.mint, token::authority = pool)]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    require!(ctx.accounts.pool.is_active, StakingError::PoolInactive);

    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    let reward = ctx
        .accounts
        .stake_account
        .pending_rewards(&ctx.accounts.pool, current_time)?;

    // No partial payouts: the vault must cover the full accrued reward.
    require!(
        ctx.accounts.vault.amount >= reward,
        StakingError::InsufficientVaultBalance
    );

    // A claim with zero elapsed time is a no-op transfer of zero.
    let authority = ctx.accounts.pool.authority;
    let mint = ctx.accounts.pool.mint;
    let seeds = &[
        POOL_SEED,
        authority.as_ref(),
        mint.as_ref(),
        &[ctx.accounts.pool.bump],
    ];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.staker_token_account.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer),
        reward,
    )?;

    // Reset the accrual clock so the same interval can't be claimed twice.
    let stake_account = &mut ctx.accounts.stake_account;
    stake_account.last_reward_time = current_time;
    stake_account.total_rewards_claimed = stake_account
        .total_rewards_claimed
        .checked_add(reward)
        .ok_or(StakingError::ArithmeticOverflow)?;

    emit!(RewardsClaimed {
        pool: stake_account.pool,
        staker: stake_account.owner,
        reward,
        total_rewards_claimed: stake_account.total_rewards_claimed,
        timestamp: current_time,
    });

    msg!("Rewards claimed: {}", reward);
    Ok(())
}
