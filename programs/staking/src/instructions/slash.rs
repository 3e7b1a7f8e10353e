use crate::constants::*;
use crate::error::StakingError;
use crate::events::Slashed;
use crate::state::{StakeAccount, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Slash<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.mint.as_ref()],
        bump = pool.bump,
        constraint = authority.key() == pool.authority @ StakingError::Unauthorized
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(mut, has_one = pool)]
    pub stake_account: Account<'info, StakeAccount>,

    pub authority: Signer<'info>,

    #[account(mut, token::mint = pool.mint, token::authority = pool)]
    pub vault: Account<'info, TokenAccount>,

    // Where the confiscated tokens go; any account of the pool's mint.
    #[account(mut, token::mint = pool.mint)]
    pub slash_destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Slash>, amount: u64) -> Result<()> {
    ctx.accounts.stake_account.debit(amount)?;

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
        to: ctx.accounts.slash_destination.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer),
        amount,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let clock = Clock::get()?;
    let stake_account = &ctx.accounts.stake_account;
    emit!(Slashed {
        pool: pool.key(),
        staker: stake_account.owner,
        destination: ctx.accounts.slash_destination.key(),
        amount,
        remaining: stake_account.amount_staked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Slashed {} from {}", amount, stake_account.owner);
    Ok(())
}
