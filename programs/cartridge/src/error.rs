use anchor_lang::prelude::*;

#[error_code]
pub enum CartridgeError {
    #[msg("Name must be between 1 and 32 characters!")]
    InvalidName = 0,

    #[msg("URI must not be empty!")]
    InvalidUri,

    #[msg("Signer is not the cartridge owner!")]
    NotCartridgeOwner,

    #[msg("A cartridge is already inserted into the machine!")]
    CartridgeAlreadyInserted,

    #[msg("A cartridge is not inserted into the machine!")]
    CartridgeNotInserted,

    #[msg("The cartridge sits in a different machine!")]
    WrongMachine,

    #[msg("Arithmetic overflow!")]
    ArithmeticOverflow,
}
