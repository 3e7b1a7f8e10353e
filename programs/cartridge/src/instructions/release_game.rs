use crate::constants::*;
use crate::error::CartridgeError;
use crate::events::GameReleased;
use crate::state::Game;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(name: String, uri: String, nonce: u8)]
pub struct ReleaseGame<'info> {
    // One game per (name, nonce); re-releasing fails at account creation.
    #[account(
        init,
        payer = payer,
        space = Game::LEN,
        seeds = [GAME_SEED, name.as_bytes(), &[nonce]],
        bump
    )]
    pub game: Account<'info, Game>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<ReleaseGame>,
    name: String,
    uri: String,
    nonce: u8,
    price: u64,
) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
        CartridgeError::InvalidName
    );
    require!(
        !uri.is_empty() && uri.len() <= MAX_URI_LENGTH,
        CartridgeError::InvalidUri
    );

    let game = &mut ctx.accounts.game;
    game.name = name;
    game.uri = uri;
    game.num_minted = 0;
    game.current_size = 0;
    game.data_version = 0;
    game.price = price;
    game.nonce = nonce;
    game.bump = ctx.bumps.game;

    emit!(GameReleased {
        game: game.key(),
        name: game.name.clone(),
        price,
    });

    msg!("Game released: {}", game.name);
    Ok(())
}
