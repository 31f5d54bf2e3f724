use crate::addr::Addr;
use crate::patch::{Mismatch, Mutable, PatchError};
use crate::treasure::{SharedTreasure, Treasure};

/// Item id of the rod of seasons.
pub const ROD_ITEM_ID: u8 = 0x07;

/// How a slot with a non-zero sub id offset encodes the sub id byte for a
/// given item.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SubIdEncoding {
    /// `sub_id + sub_id_offset`.
    Biased,
    /// The item id itself. The game reads this byte as a flag for these
    /// items, so a biased value would set unrelated state.
    ItemId,
}

const SUB_ID_ENCODINGS: &[(u8, SubIdEncoding)] = &[(ROD_ITEM_ID, SubIdEncoding::ItemId)];

pub fn sub_id_encoding(item_id: u8) -> SubIdEncoding {
    SUB_ID_ENCODINGS
        .iter()
        .find(|(id, _)| *id == item_id)
        .map(|(_, encoding)| *encoding)
        .unwrap_or(SubIdEncoding::Biased)
}

/// An item slot (chest, gift, dig spot...). Holds the locations of the id
/// and sub id bytes that select the treasure, and how the slot delivers it.
pub struct SlotPatch {
    pub treasure: SharedTreasure,
    pub id_addrs: Vec<Addr>,
    pub sub_id_addrs: Vec<Addr>,
    pub collect_mode: u8,
    pub sub_id_offset: u8,
}

impl SlotPatch {
    /// Value written to each sub id address for the given treasure.
    pub fn encoded_sub_id(&self, treasure: &Treasure) -> u8 {
        if self.sub_id_offset == 0 {
            return treasure.sub_id;
        }
        match sub_id_encoding(treasure.id) {
            SubIdEncoding::Biased => treasure.sub_id.wrapping_add(self.sub_id_offset),
            SubIdEncoding::ItemId => treasure.id,
        }
    }

    /// Point the first id byte (and optionally the first sub id byte) at a
    /// new location, used once a routine holding them has been placed.
    pub fn relocate(&mut self, id_addr: Addr, sub_id_addr: Option<Addr>) {
        replace_first(&mut self.id_addrs, id_addr);
        if let Some(addr) = sub_id_addr {
            replace_first(&mut self.sub_id_addrs, addr);
        }
    }
}

fn replace_first(addrs: &mut Vec<Addr>, addr: Addr) {
    match addrs.first_mut() {
        Some(first) => *first = addr,
        None => addrs.push(addr),
    }
}

impl Mutable for SlotPatch {
    fn mutate(&self, rom: &mut [u8]) -> Result<(), PatchError> {
        {
            let treasure = self.treasure.borrow();
            for addr in &self.id_addrs {
                rom[addr.full_offset()] = treasure.id;
            }
            let sub_id = self.encoded_sub_id(&treasure);
            for addr in &self.sub_id_addrs {
                rom[addr.full_offset()] = sub_id;
            }
        }

        self.treasure.borrow_mut().collect_mode = self.collect_mode;
        self.treasure.borrow().mutate(rom)
    }

    fn check(&self, rom: &[u8]) -> Result<(), Mismatch> {
        let treasure = self.treasure.borrow();
        for addr in &self.id_addrs {
            let offset = addr.full_offset();
            if rom[offset] != treasure.id {
                return Err(Mismatch::ItemId {
                    offset,
                    expected: treasure.id,
                    found: rom[offset],
                });
            }
        }

        let sub_id = self.encoded_sub_id(&treasure);
        for addr in &self.sub_id_addrs {
            let offset = addr.full_offset();
            if rom[offset] != sub_id {
                return Err(Mismatch::SubId {
                    offset,
                    expected: sub_id,
                    found: rom[offset],
                });
            }
        }

        if self.collect_mode != treasure.collect_mode {
            return Err(Mismatch::CollectMode {
                slot: self.collect_mode,
                treasure: treasure.collect_mode,
            });
        }

        Ok(())
    }
}
