//! Static data for the Japanese release of Oracle of Seasons.
//!
//! Nothing here is computed; the registry turns these tables into patches
//! for each run.

use crate::addr::Addr;
use crate::patch::RangePatch;
use crate::treasure::{collect, Treasure, TREASURE_BANK};

#[derive(Copy, Clone, Debug)]
pub struct TreasureDef {
    pub name: &'static str,
    pub id: u8,
    pub sub_id: u8,
    /// Offset into the treasure bank; zero for placeholders.
    pub addr: u16,
    pub collect_mode: u8,
    pub param: u8,
    pub text: u8,
    pub sprite: u8,
}

impl TreasureDef {
    const fn new(
        name: &'static str,
        id: u8,
        sub_id: u8,
        addr: u16,
        collect_mode: u8,
        param: u8,
        text: u8,
        sprite: u8,
    ) -> Self {
        Self {
            name,
            id,
            sub_id,
            addr,
            collect_mode,
            param,
            text,
            sprite,
        }
    }

    const fn placeholder(name: &'static str, id: u8) -> Self {
        Self::new(name, id, 0, 0, 0, 0, 0, 0)
    }

    pub fn to_treasure(&self) -> Treasure {
        if self.addr == 0 {
            return Treasure::placeholder(self.id);
        }
        Treasure {
            id: self.id,
            sub_id: self.sub_id,
            addr: Addr::new(TREASURE_BANK, self.addr),
            collect_mode: self.collect_mode,
            param: self.param,
            text: self.text,
            sprite: self.sprite,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SlotDef {
    pub name: &'static str,
    /// Treasure found here in an unmodified game.
    pub treasure: &'static str,
    pub id_addrs: &'static [Addr],
    pub sub_id_addrs: &'static [Addr],
    pub collect_mode: u8,
    pub sub_id_offset: u8,
}

#[derive(Copy, Clone, Debug)]
pub enum Edit {
    Byte(u8, u8),
    Word(u16, u16),
    Range(&'static [u8], &'static [u8]),
}

#[derive(Copy, Clone, Debug)]
pub struct PatchDef {
    pub name: &'static str,
    pub addr: Addr,
    pub edit: Edit,
}

impl PatchDef {
    const fn byte(name: &'static str, addr: Addr, old: u8, new: u8) -> Self {
        Self {
            name,
            addr,
            edit: Edit::Byte(old, new),
        }
    }

    const fn word(name: &'static str, addr: Addr, old: u16, new: u16) -> Self {
        Self {
            name,
            addr,
            edit: Edit::Word(old, new),
        }
    }

    const fn range(name: &'static str, addr: Addr, old: &'static [u8], new: &'static [u8]) -> Self {
        Self {
            name,
            addr,
            edit: Edit::Range(old, new),
        }
    }

    pub fn to_patch(&self) -> RangePatch {
        match self.edit {
            Edit::Byte(old, new) => RangePatch::byte(self.addr, old, new),
            Edit::Word(old, new) => RangePatch::word(self.addr, old, new),
            Edit::Range(old, new) => RangePatch::new(self.addr, old, new),
        }
    }
}

/// A short routine placed in a bank's free space.
#[derive(Copy, Clone, Debug)]
pub struct RoutineDef {
    pub name: &'static str,
    pub bank: u8,
    pub code: &'static [u8],
}

/// A slot whose id bytes live inside a placed routine rather than at a fixed
/// address.
#[derive(Copy, Clone, Debug)]
pub struct Relocation {
    pub slot: &'static str,
    pub routine: &'static str,
    pub id_offset: u16,
    pub sub_id_offset: Option<u16>,
}

/// Everything the registry needs to know about one ROM.
#[derive(Copy, Clone, Debug)]
pub struct RomTables {
    pub treasures: &'static [TreasureDef],
    pub slots: &'static [SlotDef],
    pub fixed: &'static [PatchDef],
    pub variable: &'static [PatchDef],
    pub routines: &'static [RoutineDef],
    pub relocations: &'static [Relocation],
    /// First free offset at the end of each bank that has room for routines.
    pub free_space: &'static [(u8, u16)],
    /// Seed tree slots; the first one is the tree in Horon Village.
    pub seed_trees: &'static [&'static str],
    pub seed_index_by_tree_id: &'static [u8],
    pub map_icon_by_tree_id: &'static [u8],
    /// Patches whose first byte is the initial seed item (0x20 + seed index).
    pub initial_seed_patches: &'static [&'static str],
    /// Word patches whose low byte selects the initial seed index.
    pub initial_selection_patches: &'static [&'static str],
    /// Variable patches rewritten by an update.
    pub update_patches: &'static [&'static str],
    /// Patches skipped by verification because they legitimately differ
    /// from a static comparison.
    pub verify_exceptions: &'static [&'static str],
}

impl RomTables {
    pub fn seasons() -> Self {
        Self {
            treasures: TREASURES,
            slots: SLOTS,
            fixed: FIXED_PATCHES,
            variable: VARIABLE_PATCHES,
            routines: ROUTINES,
            relocations: RELOCATIONS,
            free_space: FREE_SPACE,
            seed_trees: SEED_TREES,
            seed_index_by_tree_id: SEED_INDEX_BY_TREE_ID,
            map_icon_by_tree_id: MAP_ICON_BY_TREE_ID,
            initial_seed_patches: INITIAL_SEED_PATCHES,
            initial_selection_patches: INITIAL_SELECTION_PATCHES,
            update_patches: UPDATE_PATCHES,
            verify_exceptions: VERIFY_EXCEPTIONS,
        }
    }

    pub fn treasure(&self, name: &str) -> Option<&TreasureDef> {
        self.treasures.iter().find(|t| t.name == name)
    }

    pub fn slot(&self, name: &str) -> Option<&SlotDef> {
        self.slots.iter().find(|s| s.name == name)
    }
}

macro_rules! a {
    ($bank:expr, $offset:expr) => {
        Addr {
            bank: $bank,
            offset: $offset,
        }
    };
}

pub const TREASURES: &[TreasureDef] = &[
    // equip items
    TreasureDef::new("shop shield L-1", 0x01, 0x00, 0x52bd, 0x0a, 0x01, 0x1f, 0x13),
    TreasureDef::new("shield L-2", 0x01, 0x01, 0x52c1, 0x0a, 0x02, 0x20, 0x14),
    TreasureDef::new("bombs, 10", 0x03, 0x00, 0x52c9, 0x38, 0x10, 0x4d, 0x05),
    TreasureDef::new("sword 1", 0x05, 0x00, 0x52d9, 0x38, 0x01, 0x1c, 0x10),
    TreasureDef::new("sword 2", 0x05, 0x01, 0x52dd, 0x09, 0x01, 0x1c, 0x10),
    TreasureDef::new("boomerang 1", 0x06, 0x00, 0x52f1, 0x0a, 0x01, 0x22, 0x1c),
    TreasureDef::new("boomerang 2", 0x06, 0x01, 0x52f5, 0x38, 0x02, 0x23, 0x1d),
    TreasureDef::new("rod", 0x07, 0x00, 0x52f9, 0x38, 0x07, 0x0a, 0x1e),
    TreasureDef::new("spring", 0x07, 0x02, 0x5301, 0x09, 0x00, 0x0d, 0x1e),
    TreasureDef::new("summer", 0x07, 0x03, 0x5305, 0x09, 0x01, 0x0b, 0x1e),
    TreasureDef::new("autumn", 0x07, 0x04, 0x5309, 0x09, 0x02, 0x0c, 0x1e),
    TreasureDef::new("winter", 0x07, 0x05, 0x530d, 0x09, 0x03, 0x0a, 0x1e),
    TreasureDef::new("magnet gloves", 0x08, 0x00, 0x5149, 0x38, 0x00, 0x30, 0x18),
    TreasureDef::new("bombchus", 0x0d, 0x00, 0x531d, 0x0a, 0x10, 0x32, 0x24),
    // the flutes share one record; only the text and sprite differ
    TreasureDef::new("moosh's flute", 0x0e, 0x00, 0x5161, 0x0a, 0x0d, 0x3a, 0x4d),
    TreasureDef::new("dimitri's flute", 0x0e, 0x00, 0x5161, 0x0a, 0x0c, 0x39, 0x4c),
    TreasureDef::new("strange flute", 0x0e, 0x00, 0x5161, 0x0a, 0x0d, 0x3b, 0x23),
    TreasureDef::new("ricky's flute", 0x0e, 0x00, 0x5161, 0x0a, 0x0b, 0x38, 0x4b),
    TreasureDef::new("slingshot 1", 0x13, 0x00, 0x5325, 0x38, 0x01, 0x2e, 0x21),
    TreasureDef::new("slingshot 2", 0x13, 0x01, 0x5329, 0x38, 0x01, 0x2e, 0x21),
    TreasureDef::new("shovel", 0x15, 0x00, 0x517d, 0x0a, 0x00, 0x25, 0x1b),
    TreasureDef::new("bracelet", 0x16, 0x00, 0x5181, 0x38, 0x00, 0x26, 0x19),
    TreasureDef::new("feather 1", 0x17, 0x00, 0x532d, 0x38, 0x01, 0x27, 0x16),
    TreasureDef::new("feather 2", 0x17, 0x01, 0x5331, 0x38, 0x01, 0x27, 0x16),
    TreasureDef::new("satchel 1", 0x19, 0x00, 0x52b5, 0x0a, 0x01, 0x2d, 0x20),
    TreasureDef::new("satchel 2", 0x19, 0x01, 0x52b9, 0x01, 0x01, 0x2d, 0x20),
    TreasureDef::new("fool's ore", 0x1e, 0x00, 0x51a1, 0x00, 0x00, 0x36, 0x4a),
    // non-inventory items
    TreasureDef::new("rupees, 1", 0x28, 0x00, 0x5355, 0x38, 0x01, 0x01, 0x28),
    TreasureDef::new("rupees, 5", 0x28, 0x01, 0x5359, 0x38, 0x03, 0x02, 0x29),
    TreasureDef::new("rupees, 10", 0x28, 0x02, 0x535d, 0x38, 0x04, 0x03, 0x2a),
    TreasureDef::new("rupees, 20", 0x28, 0x03, 0x5361, 0x38, 0x05, 0x04, 0x2b),
    TreasureDef::new("rupees, 30", 0x28, 0x04, 0x5365, 0x38, 0x07, 0x05, 0x2b),
    TreasureDef::new("rupees, 50", 0x28, 0x05, 0x5369, 0x38, 0x0b, 0x06, 0x2c),
    TreasureDef::new("rupees, 100", 0x28, 0x06, 0x536d, 0x38, 0x0c, 0x07, 0x2d),
    TreasureDef::new("heart container", 0x2a, 0x00, 0x5399, 0x1a, 0x04, 0x16, 0x3b),
    TreasureDef::new("piece of heart", 0x2b, 0x01, 0x5391, 0x38, 0x01, 0x17, 0x3a),
    TreasureDef::new("rare peach stone", 0x2b, 0x02, 0x5395, 0x02, 0x01, 0x17, 0x4e),
    // rings
    TreasureDef::new("discovery ring", 0x2d, 0x04, 0x53c9, 0x38, 0x28, 0x54, 0x0e),
    TreasureDef::new("moblin ring", 0x2d, 0x05, 0x53cd, 0x38, 0x2b, 0x54, 0x0e),
    TreasureDef::new("steadfast ring", 0x2d, 0x06, 0x53d1, 0x38, 0x10, 0x54, 0x0e),
    TreasureDef::new("rang ring L-1", 0x2d, 0x07, 0x53d5, 0x38, 0x0c, 0x54, 0x0e),
    TreasureDef::new("blast ring", 0x2d, 0x08, 0x53d9, 0x38, 0x0d, 0x54, 0x0e),
    TreasureDef::new("octo ring", 0x2d, 0x09, 0x53dd, 0x38, 0x2a, 0x54, 0x0e),
    TreasureDef::new("quicksand ring", 0x2d, 0x0a, 0x53e1, 0x38, 0x23, 0x54, 0x0e),
    TreasureDef::new("armor ring L-2", 0x2d, 0x0b, 0x53e5, 0x38, 0x05, 0x54, 0x0e),
    TreasureDef::new("power ring L-1", 0x2d, 0x0e, 0x53f1, 0x38, 0x01, 0x54, 0x0e),
    TreasureDef::new("subrosian ring", 0x2d, 0x10, 0x53f9, 0x38, 0x2d, 0x54, 0x0e),
    // dungeon items; every boss key is the same record
    TreasureDef::new("small key", 0x30, 0x03, 0x5409, 0x38, 0x01, 0x1a, 0x42),
    TreasureDef::new("boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d1 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d2 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d3 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d6 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d7 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("d8 boss key", 0x31, 0x03, 0x5419, 0x38, 0x00, 0x1b, 0x43),
    TreasureDef::new("compass", 0x32, 0x02, 0x5425, 0x68, 0x00, 0x19, 0x41),
    TreasureDef::new("dungeon map", 0x33, 0x02, 0x5431, 0x68, 0x00, 0x18, 0x40),
    // collection items
    TreasureDef::new("ring box L-1", 0x2c, 0x00, 0x53a5, 0x02, 0x01, 0x57, 0x33),
    TreasureDef::new("ring box L-2", 0x2c, 0x01, 0x53a9, 0x02, 0x02, 0x34, 0x34),
    TreasureDef::new("flippers", 0x2e, 0x00, 0x51e1, 0x02, 0x00, 0x31, 0x31),
    TreasureDef::new("gasha seed", 0x34, 0x01, 0x5341, 0x38, 0x01, 0x4b, 0x0d),
    TreasureDef::new("gnarled key", 0x42, 0x00, 0x5465, 0x29, 0x00, 0x42, 0x44),
    TreasureDef::new("floodgate key", 0x43, 0x00, 0x5235, 0x09, 0x00, 0x43, 0x45),
    TreasureDef::new("dragon key", 0x44, 0x00, 0x5239, 0x09, 0x00, 0x44, 0x46),
    TreasureDef::new("star ore", 0x45, 0x00, 0x523d, 0x5a, 0x00, 0x40, 0x57),
    TreasureDef::new("ribbon", 0x46, 0x00, 0x5241, 0x0a, 0x00, 0x41, 0x4f),
    TreasureDef::new("spring banana", 0x47, 0x00, 0x5245, 0x0a, 0x00, 0x66, 0x54),
    TreasureDef::new("ricky's gloves", 0x48, 0x00, 0x5249, 0x09, 0x01, 0x67, 0x55),
    TreasureDef::new("rusty bell", 0x4a, 0x00, 0x546d, 0x0a, 0x00, 0x55, 0x5b),
    TreasureDef::new("treasure map", 0x4b, 0x00, 0x5255, 0x0a, 0x00, 0x6c, 0x49),
    TreasureDef::new("round jewel", 0x4c, 0x00, 0x5259, 0x0a, 0x00, 0x47, 0x36),
    TreasureDef::new("pyramid jewel", 0x4d, 0x00, 0x5479, 0x08, 0x00, 0x4a, 0x37),
    TreasureDef::new("square jewel", 0x4e, 0x00, 0x5261, 0x38, 0x00, 0x48, 0x38),
    TreasureDef::new("x-shaped jewel", 0x4f, 0x00, 0x5265, 0x38, 0x00, 0x49, 0x39),
    TreasureDef::new("red ore", 0x50, 0x00, 0x5269, 0x38, 0x00, 0x3f, 0x59),
    TreasureDef::new("blue ore", 0x51, 0x00, 0x526d, 0x38, 0x00, 0x3e, 0x58),
    TreasureDef::new("hard ore", 0x52, 0x00, 0x5271, 0x0a, 0x00, 0x3d, 0x5a),
    TreasureDef::new("member's card", 0x53, 0x00, 0x5275, 0x0a, 0x00, 0x45, 0x48),
    TreasureDef::new("master's plaque", 0x54, 0x00, 0x5279, 0x38, 0x00, 0x70, 0x26),
    // seed types growing on trees; the id is an index, not an item
    TreasureDef::placeholder("ember tree seeds", 0x00),
    TreasureDef::placeholder("mystery tree seeds", 0x01),
    TreasureDef::placeholder("scent tree seeds", 0x02),
    TreasureDef::placeholder("pegasus tree seeds", 0x03),
    TreasureDef::placeholder("gale tree seeds 1", 0x04),
    TreasureDef::placeholder("gale tree seeds 2", 0x05),
];

const fn slot(
    name: &'static str,
    treasure: &'static str,
    id_addrs: &'static [Addr],
    sub_id_addrs: &'static [Addr],
    collect_mode: u8,
) -> SlotDef {
    SlotDef {
        name,
        treasure,
        id_addrs,
        sub_id_addrs,
        collect_mode,
        sub_id_offset: 0,
    }
}

const fn biased(mut def: SlotDef, sub_id_offset: u8) -> SlotDef {
    def.sub_id_offset = sub_id_offset;
    def
}

const fn tree(name: &'static str, seeds: &'static str, id_addrs: &'static [Addr]) -> SlotDef {
    slot(name, seeds, id_addrs, &[], 0)
}

pub const SLOTS: &[SlotDef] = &[
    biased(
        slot("d0 sword chest", "sword 1", &[a!(0x0a, 0x7b86)], &[a!(0x0a, 0x7b88)], collect::CHEST),
        1,
    ),
    slot(
        "maku key fall",
        "gnarled key",
        &[a!(0x15, 0x657d), a!(0x09, 0x7dff), a!(0x09, 0x7de6)],
        &[a!(0x15, 0x6580), a!(0x09, 0x7e02)],
        collect::FALL,
    ),
    slot("boomerang gift", "boomerang 1", &[a!(0x0b, 0x6648)], &[a!(0x0b, 0x6649)], collect::FIND2),
    // the data says chest
    biased(slot("rod gift", "rod", &[a!(0x15, 0x7511)], &[a!(0x15, 0x750f)], collect::CHEST), 1),
    slot("shovel gift", "shovel", &[a!(0x0b, 0x6a6e)], &[a!(0x0b, 0x6a6f)], collect::FIND2),
    // id and sub id are in the opposite order from most slots
    slot("d1 satchel", "satchel 1", &[a!(0x09, 0x669b)], &[a!(0x09, 0x669a)], collect::FIND2),
    slot("d2 bracelet chest", "bracelet", &[a!(0x15, 0x5424)], &[a!(0x15, 0x5425)], collect::CHEST),
    slot("blaino gift", "ricky's gloves", &[a!(0x0b, 0x64ce)], &[a!(0x0b, 0x64cf)], collect::FIND1),
    slot("floodgate key gift", "floodgate key", &[a!(0x09, 0x626b)], &[a!(0x09, 0x626a)], collect::FIND1),
    slot("square jewel chest", "square jewel", &[a!(0x0b, 0x7397)], &[a!(0x0b, 0x739b)], collect::CHEST),
    slot("x-shaped jewel chest", "x-shaped jewel", &[a!(0x15, 0x53cd)], &[a!(0x15, 0x53ce)], collect::CHEST),
    // no sub id
    slot("star ore spot", "star ore", &[a!(0x08, 0x62f4), a!(0x08, 0x62fe)], &[], collect::DIG),
    slot("d3 feather chest", "feather 1", &[a!(0x15, 0x5458)], &[a!(0x15, 0x5459)], collect::CHEST),
    slot("master's plaque chest", "master's plaque", &[a!(0x15, 0x554d)], &[a!(0x15, 0x554e)], collect::CHEST),
    slot(
        "flippers gift",
        "flippers",
        &[a!(0x0b, 0x7310), a!(0x0b, 0x72f3)],
        &[a!(0x0b, 0x7311)],
        collect::FIND2,
    ),
    slot("spring banana tree", "spring banana", &[a!(0x09, 0x66b0)], &[a!(0x09, 0x66af)], collect::FIND2),
    slot("dragon key spot", "dragon key", &[a!(0x09, 0x628d)], &[a!(0x09, 0x628c)], collect::FIND1),
    slot("pyramid jewel spot", "pyramid jewel", &[a!(0x0b, 0x7350)], &[a!(0x0b, 0x7351)], collect::UNDERWATER),
    slot("d4 slingshot chest", "slingshot 1", &[a!(0x15, 0x5470)], &[a!(0x15, 0x5471)], collect::CHEST),
    slot("d5 magnet gloves chest", "magnet gloves", &[a!(0x15, 0x5480)], &[a!(0x15, 0x5481)], collect::CHEST),
    slot("round jewel gift", "round jewel", &[a!(0x0b, 0x7334)], &[a!(0x0b, 0x7335)], collect::FIND2),
    // two cases depending on which sword you enter with
    slot(
        "noble sword spot",
        "sword 2",
        &[a!(0x0b, 0x6417), a!(0x0b, 0x641e)],
        &[a!(0x0b, 0x6418), a!(0x0b, 0x641f)],
        collect::FIND1,
    ),
    slot("d6 boomerang chest", "boomerang 2", &[a!(0x15, 0x54c0)], &[a!(0x15, 0x54c1)], collect::CHEST),
    slot("rusty bell spot", "rusty bell", &[a!(0x09, 0x6476)], &[a!(0x09, 0x6475)], collect::FIND2),
    slot("d7 cape chest", "feather 2", &[a!(0x15, 0x54e1)], &[a!(0x15, 0x54e2)], collect::CHEST),
    slot("d8 HSS chest", "slingshot 2", &[a!(0x15, 0x551d)], &[a!(0x15, 0x551e)], collect::CHEST),
    // seed trees slot a seed type rather than a treasure
    tree("ember tree", "ember tree seeds", &[a!(0x11, 0x64cb)]),
    tree("mystery tree", "mystery tree seeds", &[a!(0x11, 0x67dd)]),
    tree("scent tree", "scent tree seeds", &[a!(0x11, 0x685c)]),
    tree("pegasus tree", "pegasus tree seeds", &[a!(0x11, 0x6870)]),
    tree("sunken gale tree", "gale tree seeds 1", &[a!(0x11, 0x69b0)]),
    tree("tarm gale tree", "gale tree seeds 2", &[a!(0x11, 0x6a46)]),
];

/// Edits applied to every patched ROM regardless of placement.
pub const FIXED_PATCHES: &[PatchDef] = &[
    // maku gate open from the start
    PatchDef::byte("maku gate check", a!(0x04, 0x61a3), 0x7e, 0x66),
    // horon shop stocks and sells everything from the start, and keeps the
    // flute until ricky's flute is actually obtained
    PatchDef::byte("horon shop stock check", a!(0x08, 0x4adb), 0x05, 0x02),
    PatchDef::byte("horon shop sell check", a!(0x08, 0x48d0), 0x05, 0x02),
    PatchDef::byte("horon shop flute check 1", a!(0x08, 0x4b02), 0xcb, 0xf6),
    PatchDef::byte("horon shop flute check 2", a!(0x08, 0x4afc), 0x6f, 0x7f),
    PatchDef::byte("dance hall flute check", a!(0x09, 0x5e21), 0x20, 0x80),
    // events that normally wait on essences
    PatchDef::byte("ricky spawn check", a!(0x09, 0x4e68), 0xcb, 0xf6),
    PatchDef::byte("dimitri essence check", a!(0x09, 0x4e36), 0xcb, 0xf6),
    PatchDef::byte("dimitri flipper check", a!(0x09, 0x4e4c), 0x2e, 0x04),
    PatchDef::byte("master essence check 1", a!(0x0a, 0x4bf5), 0x02, 0x00),
    PatchDef::byte("master essence check 2", a!(0x0a, 0x4bea), 0x40, 0x02),
    PatchDef::byte("master essence check 3", a!(0x08, 0x5887), 0x40, 0x02),
    PatchDef::byte("round jewel essence check", a!(0x0a, 0x4f8b), 0x05, 0x00),
    PatchDef::byte("pirate essence check", a!(0x08, 0x6c32), 0x20, 0x00),
    PatchDef::byte("eruption check 1", a!(0x08, 0x7c41), 0x07, 0x00),
    PatchDef::byte("eruption check 2", a!(0x08, 0x7cd3), 0x07, 0x00),
    // no rosa, portal active by default
    PatchDef::byte("rosa spawn check", a!(0x09, 0x678c), 0x40, 0x04),
    PatchDef::range("activate rosa portal", a!(0x04, 0x6016), &[0x40, 0x33, 0xc5], &[0x10, 0x33, 0xe6]),
    // count essences instead of taking the highest numbered one
    PatchDef::byte("maku seed check 1", a!(0x09, 0x7d8d), 0xea, 0x76),
    PatchDef::byte("maku seed check 2", a!(0x09, 0x7d8f), 0x30, 0x18),
    // feather game neither gives nor takes fool's ore
    PatchDef::byte("get fools ore 1", a!(0x14, 0x4111), 0xe0, 0xf0),
    PatchDef::byte("get fools ore 2", a!(0x14, 0x4112), 0x2e, 0xf0),
    PatchDef::byte("get fools ore 3", a!(0x14, 0x4113), 0x5d, 0xf0),
    // swap the "lose fool's ore" entry in the gain/lose tables for "get seeds
    // with the slingshot"
    PatchDef::byte("lose fools, get seeds from slingshot 1", a!(0x3f, 0x4543), 0x00, 0x13),
    PatchDef::range(
        "lose fools, get seeds from slingshot 2",
        a!(0x3f, 0x4545),
        &[0x45, 0x00, 0x52, 0x50, 0x51, 0x17, 0x1e, 0x00],
        &[0x20, 0x00, 0x46, 0x45, 0x00, 0x52, 0x50, 0x51],
    ),
    PatchDef::byte("lose fools, get seeds from slingshot 3", a!(0x3f, 0x44cf), 0x44, 0x47),
    // level zero seed capacity of 20, pointer moved up a byte
    PatchDef::range("satchel capacity", a!(0x3f, 0x4617), &[0x20, 0x50, 0x99], &[0x20, 0x20, 0x50]),
    PatchDef::byte("satchel capacity pointer", a!(0x3f, 0x460e), 0x16, 0x17),
    // no second wooden sword from the hero's cave
    PatchDef::byte("wooden sword second item", a!(0x0a, 0x7baf), 0x05, 0x10),
    // noble sword uses regular item animations
    PatchDef::word("noble sword anim 1", a!(0x14, 0x4c67), 0xe951, 0xa94f),
    PatchDef::word("noble sword anim 2", a!(0x14, 0x4e37), 0x8364, 0xdf60),
    // the lost woods swords give a second spin-slash item; make it a dummy
    PatchDef::byte("noble sword second item", a!(0x0b, 0x641a), 0x05, 0x10),
    PatchDef::byte("master sword second item", a!(0x0b, 0x6421), 0x05, 0x10),
    // spring in the sunken city cliff area, so the one-way cliff can be
    // climbed back up
    PatchDef::byte("cliff default season", a!(0x01, 0x7e43), 0x02, 0x00),
    // no snow piles in front of the shovel house
    PatchDef::byte("remove snow piles", a!(0x24, 0x5dfe), 0xd9, 0x04),
];

/// Edits recomputed from the placement; identity until the registry fills
/// them in.
pub const VARIABLE_PATCHES: &[PatchDef] = &[
    PatchDef::byte("tarm gale tree map icon", a!(0x02, 0x6cb3), 0x18, 0x18),
    PatchDef::byte("sunken gale tree map icon", a!(0x02, 0x6cb6), 0x18, 0x18),
    PatchDef::byte("scent tree map icon", a!(0x02, 0x6cb9), 0x16, 0x16),
    PatchDef::byte("pegasus tree map icon", a!(0x02, 0x6cbc), 0x17, 0x17),
    PatchDef::byte("mystery tree map icon", a!(0x02, 0x6cbf), 0x19, 0x19),
    PatchDef::byte("ember tree map icon", a!(0x02, 0x6cc2), 0x15, 0x15),
    // sprites used directly by cutscenes rather than through treasure data
    PatchDef::range("wooden sword graphics", a!(0x3f, 0x65f4), &[0x60, 0x00, 0x00], &[0x60, 0x00, 0x00]),
    PatchDef::range("rod graphics", a!(0x3f, 0x6ba3), &[0x60, 0x10, 0x21], &[0x60, 0x10, 0x21]),
    PatchDef::range("noble sword graphics", a!(0x3f, 0x6975), &[0x4e, 0x1a, 0x50], &[0x4e, 0x1a, 0x50]),
    PatchDef::range("master sword graphics", a!(0x3f, 0x6978), &[0x4e, 0x1a, 0x40], &[0x4e, 0x1a, 0x40]),
    // start with the seeds from the horon village tree
    PatchDef::byte("satchel initial seeds", a!(0x3f, 0x453b), 0x20, 0x20),
    PatchDef::byte("slingshot initial seeds", a!(0x3f, 0x4544), 0x46, 0x20),
    // select that seed type by default, via unimportant bytes in file setup
    PatchDef::word("satchel initial selection", a!(0x07, 0x418e), 0xa210, 0xbe00),
    PatchDef::word("slingshot initial selection", a!(0x07, 0x419a), 0x2e02, 0xbf00),
    // seed collection checks for the initial seed type
    PatchDef::byte("carry seeds in slingshot", a!(0x10, 0x4b19), 0x19, 0x20),
];

// Nothing in this image needs a placed routine yet.
pub const ROUTINES: &[RoutineDef] = &[];
pub const RELOCATIONS: &[Relocation] = &[];
pub const FREE_SPACE: &[(u8, u16)] = &[];

pub const SEED_TREES: &[&str] = &[
    "ember tree",
    "mystery tree",
    "scent tree",
    "pegasus tree",
    "sunken gale tree",
    "tarm gale tree",
];

pub const SEED_INDEX_BY_TREE_ID: &[u8] = &[0, 4, 1, 2, 3, 3];
pub const MAP_ICON_BY_TREE_ID: &[u8] = &[0x15, 0x19, 0x16, 0x17, 0x18, 0x18];

pub const INITIAL_SEED_PATCHES: &[&str] = &[
    "satchel initial seeds",
    "slingshot initial seeds",
    "carry seeds in slingshot",
];

pub const INITIAL_SELECTION_PATCHES: &[&str] =
    &["satchel initial selection", "slingshot initial selection"];

pub const UPDATE_PATCHES: &[&str] = &[
    "satchel initial seeds",
    "slingshot initial seeds",
    "satchel initial selection",
    "slingshot initial selection",
    "carry seeds in slingshot",
    "ember tree map icon",
    "mystery tree map icon",
    "scent tree map icon",
    "pegasus tree map icon",
    "sunken gale tree map icon",
    "tarm gale tree map icon",
];

pub const VERIFY_EXCEPTIONS: &[&str] = &[
    // flutes
    "ricky's flute",
    "moosh's flute",
    "dimitri's flute",
    "strange flute",
    // seed types
    "ember tree seeds",
    "mystery tree seeds",
    "scent tree seeds",
    "pegasus tree seeds",
    "gale tree seeds 1",
    "gale tree seeds 2",
    // progressive items
    "noble sword spot",
    "d6 boomerang chest",
    "d8 HSS chest",
    "d7 cape chest",
    "sword 2",
    "boomerang 2",
    "slingshot 2",
    "feather 2",
    "satchel 2",
    // misc.
    "fool's ore",
    "rod gift",
    "rare peach stone",
    "ribbon",
    "blaino gift",
    "star ore spot",
    "treasure map",
    "member's card",
];
