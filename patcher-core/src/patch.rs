use thiserror::Error;

use crate::addr::Addr;
use crate::slot::SlotPatch;
use crate::treasure::SharedTreasure;

/// A write that could not be carried out because the patch itself is
/// malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("range at {offset:#x} has {expected} expected bytes but {replacement} replacement bytes")]
    LengthMismatch {
        offset: usize,
        expected: usize,
        replacement: usize,
    },
}

/// The result of comparing a patch against image bytes that do not match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Mismatch {
    #[error("expected {expected:02x} at {offset:x}; found {found:02x}")]
    Byte { offset: usize, expected: u8, found: u8 },

    #[error("expected {} at {offset:x}; found {}", hex(.expected), hex(.found))]
    Window {
        offset: usize,
        expected: Vec<u8>,
        found: Vec<u8>,
    },

    #[error("expected item id {expected:02x} at {offset:x}; found {found:02x}")]
    ItemId { offset: usize, expected: u8, found: u8 },

    #[error("expected sub id {expected:02x} at {offset:x}; found {found:02x}")]
    SubId { offset: usize, expected: u8, found: u8 },

    #[error("slot/treasure collect mode mismatch: {slot:02x}/{treasure:02x}")]
    CollectMode { slot: u8, treasure: u8 },
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Something the patcher can write into an image and later check for.
pub trait Mutable {
    /// Write this patch's bytes into the image.
    fn mutate(&self, rom: &mut [u8]) -> Result<(), PatchError>;

    /// Verify that the image holds this patch's bytes.
    fn check(&self, rom: &[u8]) -> Result<(), Mismatch>;
}

/// Every kind of patch the registry knows about.
pub enum Patch {
    Range(RangePatch),
    Treasure(SharedTreasure),
    Slot(SlotPatch),
}

impl Mutable for Patch {
    fn mutate(&self, rom: &mut [u8]) -> Result<(), PatchError> {
        match self {
            Patch::Range(range) => range.mutate(rom),
            Patch::Treasure(treasure) => treasure.borrow().mutate(rom),
            Patch::Slot(slot) => slot.mutate(rom),
        }
    }

    fn check(&self, rom: &[u8]) -> Result<(), Mismatch> {
        match self {
            Patch::Range(range) => range.check(rom),
            Patch::Treasure(treasure) => treasure.borrow().check(rom),
            Patch::Slot(slot) => slot.check(rom),
        }
    }
}

/// A run of bytes starting at a fixed address. `old` is what an unmodified
/// image holds there and `new` is what gets written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangePatch {
    pub addr: Addr,
    pub old: Vec<u8>,
    pub new: Vec<u8>,
}

impl RangePatch {
    pub fn new(addr: Addr, old: &[u8], new: &[u8]) -> Self {
        Self {
            addr,
            old: old.to_vec(),
            new: new.to_vec(),
        }
    }

    pub fn byte(addr: Addr, old: u8, new: u8) -> Self {
        Self::new(addr, &[old], &[new])
    }

    /// Two-byte range holding big-endian 16-bit values.
    pub fn word(addr: Addr, old: u16, new: u16) -> Self {
        Self::new(addr, &old.to_be_bytes(), &new.to_be_bytes())
    }
}

impl Mutable for RangePatch {
    fn mutate(&self, rom: &mut [u8]) -> Result<(), PatchError> {
        let offset = self.addr.full_offset();
        if self.old.len() != self.new.len() {
            return Err(PatchError::LengthMismatch {
                offset,
                expected: self.old.len(),
                replacement: self.new.len(),
            });
        }
        rom[offset..offset + self.new.len()].copy_from_slice(&self.new);
        Ok(())
    }

    fn check(&self, rom: &[u8]) -> Result<(), Mismatch> {
        let offset = self.addr.full_offset();
        for (i, &expected) in self.old.iter().enumerate() {
            let found = rom[offset + i];
            if found != expected {
                return Err(Mismatch::Byte {
                    offset: offset + i,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}
