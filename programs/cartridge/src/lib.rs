use anchor_lang::prelude::*;
use instructions::*;

declare_id!("9sUamV2mBNzzySRS8u86HDeDKhFsshqgGCH1FuyL1NKf");

mod constants;
mod error;
mod events;
mod instructions;
mod state;

#[program]
pub mod arcade_cartridge {
    use super::*;

    pub fn release_game_v1(
        ctx: Context<ReleaseGame>,
        name: String,
        uri: String,
        nonce: u8,
        price: u64,
    ) -> Result<()> {
        instructions::release_game::handler(ctx, name, uri, nonce, price)
    }

    pub fn commission_machine_v1(
        ctx: Context<CommissionMachine>,
        name: String,
        uri: String,
    ) -> Result<()> {
        instructions::commission_machine::handler(ctx, name, uri)
    }

    pub fn print_game_cartridge_v1(ctx: Context<PrintGameCartridge>) -> Result<()> {
        instructions::print_game_cartridge::handler(ctx)
    }

    pub fn insert_cartridge_v1(ctx: Context<InsertCartridge>) -> Result<()> {
        instructions::insert_cartridge::handler(ctx)
    }

    pub fn remove_cartridge_v1(ctx: Context<RemoveCartridge>) -> Result<()> {
        instructions::remove_cartridge::handler(ctx)
    }
}
