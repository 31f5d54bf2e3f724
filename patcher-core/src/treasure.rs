use std::cell::RefCell;
use std::rc::Rc;

use crate::addr::Addr;
use crate::patch::{Mismatch, Mutable, PatchError};

/// Collection modes: how the game hands a treasure to the player.
pub mod collect {
    pub const BUY_SATCHEL: u8 = 0x01;
    pub const RING_BOX: u8 = 0x02;
    pub const UNDERWATER: u8 = 0x08;
    pub const FIND1: u8 = 0x09;
    pub const FIND2: u8 = 0x0a;
    /// Heart containers.
    pub const APPEAR: u8 = 0x1a;
    pub const FALL: u8 = 0x29;
    /// Most chest items.
    pub const CHEST: u8 = 0x38;
    /// Dungeon map and compass.
    pub const CHEST_MAP: u8 = 0x68;
    pub const DIG: u8 = 0x5a;
}

/// Bank holding the treasure data table.
pub const TREASURE_BANK: u8 = 0x15;

/// Treasure record shared between the treasure table and any slots that
/// currently hold it.
pub type SharedTreasure = Rc<RefCell<Treasure>>;

/// The data associated with one item id / sub id pair: four consecutive
/// bytes in the treasure table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Treasure {
    pub id: u8,
    pub sub_id: u8,
    pub addr: Addr,
    pub collect_mode: u8,
    pub param: u8,
    pub text: u8,
    pub sprite: u8,
}

impl Treasure {
    /// A placeholder treasure with no bytes behind it, such as the seed type
    /// of a seed tree.
    pub fn placeholder(id: u8) -> Self {
        Self {
            id,
            sub_id: 0,
            addr: Addr::new(0, 0),
            collect_mode: 0,
            param: 0,
            text: 0,
            sprite: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.addr.offset == 0
    }

    /// The record as it appears in the image.
    pub fn bytes(&self) -> [u8; 4] {
        [self.collect_mode, self.param, self.text, self.sprite]
    }

    pub fn shared(self) -> SharedTreasure {
        Rc::new(RefCell::new(self))
    }
}

impl Mutable for Treasure {
    fn mutate(&self, rom: &mut [u8]) -> Result<(), PatchError> {
        if self.is_placeholder() {
            return Ok(());
        }
        let offset = self.addr.full_offset();
        rom[offset..offset + 4].copy_from_slice(&self.bytes());
        Ok(())
    }

    fn check(&self, rom: &[u8]) -> Result<(), Mismatch> {
        if self.is_placeholder() {
            return Ok(());
        }
        let offset = self.addr.full_offset();
        let expected = self.bytes();
        let found = &rom[offset..offset + 4];
        if found != expected {
            return Err(Mismatch::Window {
                offset,
                expected: expected.to_vec(),
                found: found.to_vec(),
            });
        }
        Ok(())
    }
}
