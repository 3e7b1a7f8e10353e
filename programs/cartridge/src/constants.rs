// PDA seed prefixes
pub const GAME_SEED: &[u8] = b"game";
pub const MACHINE_SEED: &[u8] = b"machine";

// Names double as PDA seeds, so they are capped at one seed's length.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_URI_LENGTH: usize = 200;

// Cartridge names are "{game name} {edition}"; u32 editions add at most
// 10 digits plus the separating space.
pub const MAX_CARTRIDGE_NAME_LENGTH: usize = MAX_NAME_LENGTH + 11;
