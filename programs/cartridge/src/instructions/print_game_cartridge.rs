use crate::constants::*;
use crate::events::CartridgePrinted;
use crate::state::{Cartridge, Game};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PrintGameCartridge<'info> {
    // Cartridges live at arbitrary keypair addresses, so the new account
    // signs for its own creation.
    #[account(init, payer = payer, space = Cartridge::LEN)]
    pub cartridge: Account<'info, Cartridge>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.name.as_bytes(), &[game.nonce]],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    /// CHECK: Recorded as the cartridge owner; any address may own a cartridge.
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PrintGameCartridge>) -> Result<()> {
    let game = &mut ctx.accounts.game;

    // Name and edition come from the collection counter before it is bumped.
    let name = game.cartridge_name();
    let edition = game.next_edition();
    game.register_print()?;

    let cartridge = &mut ctx.accounts.cartridge;
    cartridge.game = game.key();
    cartridge.owner = ctx.accounts.owner.key();
    cartridge.name = name;
    cartridge.uri = game.uri.clone();
    cartridge.edition = edition;
    cartridge.frozen = false;
    cartridge.linked_app_data = None;

    emit!(CartridgePrinted {
        cartridge: cartridge.key(),
        game: cartridge.game,
        owner: cartridge.owner,
        edition,
    });

    msg!("Cartridge printed: {}", cartridge.name);
    Ok(())
}
