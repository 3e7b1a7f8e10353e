use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::CartridgeError;

/// A released game. Acts as the collection and update authority for every
/// cartridge printed from it.
#[account]
#[derive(InitSpace)]
pub struct Game {
    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,
    #[max_len(MAX_URI_LENGTH)]
    pub uri: String,
    /// Total cartridges ever printed; next edition is `num_minted + 1`.
    pub num_minted: u32,
    /// Cartridges currently live in the collection.
    pub current_size: u32,
    /// Packed price data section: version byte plus the list price.
    pub data_version: u8,
    pub price: u64,
    pub nonce: u8,
    pub bump: u8,
}

impl Game {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn next_edition(&self) -> u32 {
        self.num_minted.saturating_add(1)
    }

    pub fn cartridge_name(&self) -> String {
        format!("{} {}", self.name, self.next_edition())
    }

    /// Account for a freshly printed cartridge.
    pub fn register_print(&mut self) -> Result<()> {
        self.num_minted = self
            .num_minted
            .checked_add(1)
            .ok_or(CartridgeError::ArithmeticOverflow)?;
        self.current_size = self
            .current_size
            .checked_add(1)
            .ok_or(CartridgeError::ArithmeticOverflow)?;
        Ok(())
    }
}

/// A machine slot that holds at most one cartridge.
#[account]
#[derive(InitSpace)]
pub struct Machine {
    pub machine_collection: Pubkey,
    pub owner: Pubkey,
    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,
    #[max_len(MAX_URI_LENGTH)]
    pub uri: String,
    /// Machines carry a freeze delegate but are never frozen themselves.
    pub frozen: bool,
    /// Binary app-data slot: the inserted cartridge's address, if any.
    pub inserted_cartridge: Option<Pubkey>,
    pub bump: u8,
}

impl Machine {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn insert(&mut self, cartridge: Pubkey) -> Result<()> {
        require!(
            self.inserted_cartridge.is_none(),
            CartridgeError::CartridgeAlreadyInserted
        );
        self.inserted_cartridge = Some(cartridge);
        Ok(())
    }

    pub fn remove(&mut self, cartridge: Pubkey) -> Result<()> {
        match self.inserted_cartridge {
            None => err!(CartridgeError::CartridgeNotInserted),
            Some(occupant) if occupant != cartridge => err!(CartridgeError::WrongMachine),
            Some(_) => {
                self.inserted_cartridge = None;
                Ok(())
            }
        }
    }
}

/// A printed cartridge. Lives at an arbitrary keypair address, owned by a
/// player, with its game as update authority.
#[account]
#[derive(InitSpace)]
pub struct Cartridge {
    pub game: Pubkey,
    pub owner: Pubkey,
    #[max_len(MAX_CARTRIDGE_NAME_LENGTH)]
    pub name: String,
    #[max_len(MAX_URI_LENGTH)]
    pub uri: String,
    pub edition: u32,
    /// Freeze-delegate state; set while the cartridge sits in a machine.
    pub frozen: bool,
    /// Linked app-data payload: holds the cartridge's own address while
    /// inserted, `None` otherwise. Invariant: `frozen == linked_app_data.is_some()`.
    pub linked_app_data: Option<Pubkey>,
}

impl Cartridge {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn is_inserted(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str) -> Game {
        Game {
            name: name.to_string(),
            uri: "https://example.com/game.json".to_string(),
            num_minted: 0,
            current_size: 0,
            data_version: 0,
            price: 1_000,
            nonce: 0,
            bump: 255,
        }
    }

    fn machine() -> Machine {
        Machine {
            machine_collection: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            name: "Machine 1".to_string(),
            uri: "https://example.com/machine.json".to_string(),
            frozen: false,
            inserted_cartridge: None,
            bump: 254,
        }
    }

    #[test]
    fn cartridge_names_count_from_one() {
        let mut game = game("Space Raiders");
        assert_eq!(game.cartridge_name(), "Space Raiders 1");
        game.register_print().unwrap();
        assert_eq!(game.num_minted, 1);
        assert_eq!(game.current_size, 1);
        assert_eq!(game.cartridge_name(), "Space Raiders 2");
    }

    #[test]
    fn print_counter_overflow_is_an_error() {
        let mut game = game("Space Raiders");
        game.num_minted = u32::MAX;
        assert!(game.register_print().is_err());
    }

    #[test]
    fn insert_into_vacant_machine() {
        let mut machine = machine();
        let cartridge = Pubkey::new_unique();
        machine.insert(cartridge).unwrap();
        assert_eq!(machine.inserted_cartridge, Some(cartridge));
    }

    #[test]
    fn second_insert_is_rejected() {
        let mut machine = machine();
        let first = Pubkey::new_unique();
        machine.insert(first).unwrap();
        assert!(machine.insert(Pubkey::new_unique()).is_err());
        assert_eq!(machine.inserted_cartridge, Some(first));
    }

    #[test]
    fn remove_from_vacant_machine_is_rejected() {
        let mut machine = machine();
        assert!(machine.remove(Pubkey::new_unique()).is_err());
    }

    #[test]
    fn remove_of_a_different_cartridge_is_rejected() {
        let mut machine = machine();
        let occupant = Pubkey::new_unique();
        machine.insert(occupant).unwrap();
        assert!(machine.remove(Pubkey::new_unique()).is_err());
        assert_eq!(machine.inserted_cartridge, Some(occupant));
    }

    #[test]
    fn insert_remove_round_trip_restores_vacancy() {
        let mut machine = machine();
        let cartridge = Pubkey::new_unique();
        machine.insert(cartridge).unwrap();
        machine.remove(cartridge).unwrap();
        assert_eq!(machine.inserted_cartridge, None);
        machine.insert(cartridge).unwrap();
        assert_eq!(machine.inserted_cartridge, Some(cartridge));
    }
}
