use crate::constants::*;
use crate::error::CartridgeError;
use crate::events::MachineCommissioned;
use crate::state::Machine;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CommissionMachine<'info> {
    #[account(
        init,
        payer = payer,
        space = Machine::LEN,
        seeds = [MACHINE_SEED, machine_collection.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub machine: Account<'info, Machine>,

    /// CHECK: Only used as a namespace key in the machine's PDA derivation.
    pub machine_collection: UncheckedAccount<'info>,

    /// CHECK: Recorded as the machine owner; any address may own a machine.
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CommissionMachine>, name: String, uri: String) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
        CartridgeError::InvalidName
    );
    require!(
        !uri.is_empty() && uri.len() <= MAX_URI_LENGTH,
        CartridgeError::InvalidUri
    );

    let machine = &mut ctx.accounts.machine;
    machine.machine_collection = ctx.accounts.machine_collection.key();
    machine.owner = ctx.accounts.owner.key();
    machine.name = name;
    machine.uri = uri;
    machine.frozen = false;
    machine.inserted_cartridge = None;
    machine.bump = ctx.bumps.machine;

    emit!(MachineCommissioned {
        machine: machine.key(),
        machine_collection: machine.machine_collection,
        owner: machine.owner,
        name: machine.name.clone(),
    });

    msg!("Machine commissioned: {}", machine.name);
    Ok(())
}
