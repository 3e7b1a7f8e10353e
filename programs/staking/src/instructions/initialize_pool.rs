use crate::constants::*;
use crate::events::PoolInitialized;
use crate::state::{StakingConfig, StakingPool};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    // One pool per (authority, mint); a second init for the same pair fails
    // at account creation.
    #[account(
        init,
        payer = payer,
        space = StakingPool::LEN,
        seeds = [POOL_SEED, authority.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, StakingPool>,

    pub mint: Account<'info, Mint>,

    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    // The reward vault. The pool PDA is its authority so only the program
    // can move tokens out of it.
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = pool
    )]
    pub pool_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    machine_owner_config: StakingConfig,
    game_creator_config: StakingConfig,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    pool.authority = ctx.accounts.authority.key();
    pool.mint = ctx.accounts.mint.key();
    pool.machine_owner_config = machine_owner_config;
    pool.game_creator_config = game_creator_config;
    pool.total_staked = 0;
    pool.is_active = true;
    pool.bump = ctx.bumps.pool;

    emit!(PoolInitialized {
        pool: pool.key(),
        authority: pool.authority,
        mint: pool.mint,
        machine_owner_config,
        game_creator_config,
    });

    msg!("Staking pool initialized");
    msg!("Authority: {}", pool.authority);
    msg!("Mint: {}", pool.mint);
    Ok(())
}
