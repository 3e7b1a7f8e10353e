use anchor_lang::prelude::*;

#[event]
pub struct GameReleased {
    pub game: Pubkey,
    pub name: String,
    pub price: u64,
}

#[event]
pub struct MachineCommissioned {
    pub machine: Pubkey,
    pub machine_collection: Pubkey,
    pub owner: Pubkey,
    pub name: String,
}

#[event]
pub struct CartridgePrinted {
    pub cartridge: Pubkey,
    pub game: Pubkey,
    pub owner: Pubkey,
    pub edition: u32,
}

#[event]
pub struct CartridgeInserted {
    pub cartridge: Pubkey,
    pub machine: Pubkey,
}

#[event]
pub struct CartridgeRemoved {
    pub cartridge: Pubkey,
    pub machine: Pubkey,
}
