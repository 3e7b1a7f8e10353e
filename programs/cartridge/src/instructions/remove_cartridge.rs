use crate::constants::*;
use crate::error::CartridgeError;
use crate::events::CartridgeRemoved;
use crate::state::{Cartridge, Game, Machine};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RemoveCartridge<'info> {
    #[account(
        mut,
        has_one = game,
        constraint = cartridge.owner == cartridge_owner.key() @ CartridgeError::NotCartridgeOwner
    )]
    pub cartridge: Account<'info, Cartridge>,

    #[account(
        seeds = [GAME_SEED, game.name.as_bytes(), &[game.nonce]],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    pub cartridge_owner: Signer<'info>,

    #[account(
        mut,
        has_one = machine_collection,
        seeds = [MACHINE_SEED, machine.machine_collection.as_ref(), machine.name.as_bytes()],
        bump = machine.bump
    )]
    pub machine: Account<'info, Machine>,

    /// CHECK: Only used as a namespace key in the machine's PDA derivation.
    pub machine_collection: UncheckedAccount<'info>,

    /// CHECK: The recorded machine owner; not required to sign.
    pub machine_owner: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<RemoveCartridge>) -> Result<()> {
    let cartridge_key = ctx.accounts.cartridge.key();
    let cartridge = &mut ctx.accounts.cartridge;
    let machine = &mut ctx.accounts.machine;

    // Fails when the slot is empty or holds a different cartridge.
    machine.remove(cartridge_key)?;

    // Unfreeze and unlink together; the cartridge returns to its exact
    // pre-insert state.
    cartridge.frozen = false;
    cartridge.linked_app_data = None;

    emit!(CartridgeRemoved {
        cartridge: cartridge_key,
        machine: machine.key(),
    });

    msg!("Cartridge {} removed from {}", cartridge.name, machine.name);
    Ok(())
}
