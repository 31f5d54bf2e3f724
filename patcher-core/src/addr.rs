/// Size of one switchable ROM bank.
pub const BANK_SIZE: usize = 0x4000;

/// A banked ROM address: bank number plus the offset the CPU sees while that
/// bank is paged in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Addr {
    pub bank: u8,
    pub offset: u16,
}

impl Addr {
    pub const fn new(bank: u8, offset: u16) -> Self {
        Self { bank, offset }
    }

    /// Offset of this address in the flat image. Banks 0 and 1 map
    /// directly; bank n >= 2 sits at `offset + BANK_SIZE * (n - 1)`.
    pub fn full_offset(&self) -> usize {
        let bank_offset = if self.bank >= 2 {
            BANK_SIZE * (self.bank as usize - 1)
        } else {
            0
        };
        bank_offset + self.offset as usize
    }

    /// Same bank, offset moved forward by `delta` bytes.
    pub fn advance(&self, delta: u16) -> Self {
        Self::new(self.bank, self.offset.wrapping_add(delta))
    }
}
