use sha1::{Digest, Sha1};
use std::fmt;

use crate::{PatcherError, Result};

/// Size of a full Oracle of Seasons image.
pub const ROM_SIZE: usize = 0x10_0000;

const TITLE_RANGE: std::ops::Range<usize> = 0x134..0x13d;
const TITLE: &[u8] = b"ZELDA DIN";
const REGION_OFFSET: usize = 0x14a;

/// SHA-1 of the unmodified Japanese release.
const VANILLA_SHA1: [u8; 20] = [
    0xba, 0x12, 0x68, 0x29, 0x0f, 0xb2, 0xb1, 0xb7, 0x05, 0x05, 0xd2, 0xd7, 0xb5, 0x82, 0x5f,
    0xc8, 0xa4, 0x81, 0x6a, 0x4b,
];

/// Content hash of a whole image. Identifies a patched result; it is not a
/// security measure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Checksum(pub [u8; 20]);

impl Checksum {
    pub fn of(rom: &[u8]) -> Self {
        let digest = Sha1::digest(rom);
        let mut sum = [0u8; 20];
        sum.copy_from_slice(&digest);
        Checksum(sum)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

pub fn is_seasons(rom: &[u8]) -> bool {
    rom.get(TITLE_RANGE) == Some(TITLE)
}

pub fn is_us(rom: &[u8]) -> bool {
    rom.get(REGION_OFFSET).map_or(false, |&b| b != 0)
}

pub fn is_vanilla(rom: &[u8]) -> bool {
    Checksum::of(rom).0 == VANILLA_SHA1
}

/// Reject images the tables do not describe.
pub fn validate(rom: &[u8]) -> Result<()> {
    if rom.len() < ROM_SIZE {
        return Err(PatcherError::RomSize {
            found: rom.len(),
            expected: ROM_SIZE,
        });
    }
    if !is_seasons(rom) {
        return Err(PatcherError::NotSeasons);
    }
    if is_us(rom) {
        return Err(PatcherError::UnsupportedRegion);
    }
    Ok(())
}
