use crate::constants::*;
use crate::error::CartridgeError;
use crate::events::CartridgeInserted;
use crate::state::{Cartridge, Game, Machine};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InsertCartridge<'info> {
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

pub fn handler(ctx: Context<InsertCartridge>) -> Result<()> {
    let cartridge_key = ctx.accounts.cartridge.key();
    let cartridge = &mut ctx.accounts.cartridge;
    let machine = &mut ctx.accounts.machine;

    // A frozen cartridge already sits in some machine.
    require!(
        !cartridge.is_inserted(),
        CartridgeError::CartridgeAlreadyInserted
    );
    machine.insert(cartridge_key)?;

    // Freeze and link in the same instruction as the slot write, so the
    // three fields can never disagree.
    cartridge.frozen = true;
    cartridge.linked_app_data = Some(cartridge_key);

    emit!(CartridgeInserted {
        cartridge: cartridge_key,
        machine: machine.key(),
    });

    msg!("Cartridge {} inserted into {}", cartridge.name, machine.name);
    Ok(())
}
