pub mod commission_machine;
pub mod insert_cartridge;
pub mod print_game_cartridge;
pub mod release_game;
pub mod remove_cartridge;

pub use commission_machine::*;
pub use insert_cartridge::*;
pub use print_game_cartridge::*;
pub use release_game::*;
pub use remove_cartridge::*;
