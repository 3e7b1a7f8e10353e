use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::state::{StakeAccount, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        mut,
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

pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    require!(
        !ctx.accounts.stake_account.is_locked(clock.unix_timestamp),
        StakingError::LockupNotExpired
    );

    // 0 means unstake the full balance.
    let unstake_amount = if amount == 0 {
        ctx.accounts.stake_account.amount_staked
    } else {
        amount
    };
    ctx.accounts.stake_account.debit(unstake_amount)?;

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
        unstake_amount,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_sub(unstake_amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let stake_account = &ctx.accounts.stake_account;
    emit!(Unstaked {
        pool: pool.key(),
        staker: stake_account.owner,
        amount: unstake_amount,
        remaining: stake_account.amount_staked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Unstaked: {}", unstake_amount);
    msg!("Remaining stake: {}", stake_account.amount_staked);
    Ok(())
}
