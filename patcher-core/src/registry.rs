use log::{debug, info};
use std::collections::{BTreeMap, HashMap};

use crate::addr::{Addr, BANK_SIZE};
use crate::patch::{Mutable, Patch, PatchError, RangePatch};
use crate::placement::Placement;
use crate::rom::Checksum;
use crate::slot::SlotPatch;
use crate::tables::RomTables;
use crate::treasure::SharedTreasure;
use crate::{PatcherError, Result};

/// Which part of the configuration a patch came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatchGroup {
    Fixed,
    Treasure,
    Slot,
    Variable,
    Routine,
}

/// Named patches from one part of the configuration.
pub struct PatchSet {
    pub group: PatchGroup,
    pub patches: Vec<(String, Patch)>,
}

impl PatchSet {
    pub fn new(group: PatchGroup) -> Self {
        Self {
            group,
            patches: Vec::new(),
        }
    }

    pub fn push(&mut self, name: &str, patch: Patch) {
        self.patches.push((name.to_string(), patch));
    }
}

struct Entry {
    group: PatchGroup,
    patch: Patch,
}

/// All patches for one run, under a single namespace.
pub struct Registry<'t> {
    tables: &'t RomTables,
    entries: HashMap<String, Entry>,
    overrides: BTreeMap<String, Vec<u8>>,
}

impl<'t> Registry<'t> {
    /// Build every patch the tables describe, with slots holding the
    /// treasures chosen by the placement.
    pub fn build(tables: &'t RomTables, placement: &Placement) -> Result<Self> {
        let sets = patch_sets(tables, placement)?;
        let mut registry = Self::from_sets(tables, sets)?;
        registry.overrides = placement.overrides.clone();
        Ok(registry)
    }

    /// Merge patch sets into one registry. Fails if a name appears twice.
    pub fn from_sets(tables: &'t RomTables, sets: Vec<PatchSet>) -> Result<Self> {
        let count = sets.iter().map(|set| set.patches.len()).sum();
        let mut entries = HashMap::with_capacity(count);

        for set in sets {
            for (name, patch) in set.patches {
                if entries.contains_key(&name) {
                    return Err(PatcherError::DuplicatePatch(name));
                }
                let group = set.group;
                entries.insert(name, Entry { group, patch });
            }
        }

        debug!("collated {} patches", entries.len());
        Ok(Self {
            tables,
            entries,
            overrides: BTreeMap::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Patch> {
        self.entries.get(name).map(|entry| &entry.patch)
    }

    pub fn group(&self, name: &str) -> Option<PatchGroup> {
        self.entries.get(name).map(|entry| entry.group)
    }

    /// Patch names in the order they are applied.
    pub fn ordered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn ordered_names_in(&self, group: PatchGroup) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.group == group)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn slot(&self, name: &str) -> Result<&SlotPatch> {
        match self.get(name) {
            Some(Patch::Slot(slot)) => Ok(slot),
            _ => Err(PatcherError::UnknownSlot(name.to_string())),
        }
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut SlotPatch> {
        match self.entries.get_mut(name).map(|entry| &mut entry.patch) {
            Some(Patch::Slot(slot)) => Ok(slot),
            _ => Err(PatcherError::UnknownSlot(name.to_string())),
        }
    }

    pub fn range(&self, name: &str) -> Result<&RangePatch> {
        match self.get(name) {
            Some(Patch::Range(range)) => Ok(range),
            Some(_) => Err(PatcherError::NotARange(name.to_string())),
            None => Err(PatcherError::UnknownPatch(name.to_string())),
        }
    }

    pub fn range_mut(&mut self, name: &str) -> Result<&mut RangePatch> {
        match self.entries.get_mut(name).map(|entry| &mut entry.patch) {
            Some(Patch::Range(range)) => Ok(range),
            Some(_) => Err(PatcherError::NotARange(name.to_string())),
            None => Err(PatcherError::UnknownPatch(name.to_string())),
        }
    }

    fn apply(&self, name: &str, rom: &mut [u8]) -> Result<()> {
        let patch = self
            .get(name)
            .ok_or_else(|| PatcherError::UnknownPatch(name.to_string()))?;
        patch.mutate(rom).map_err(|source| PatcherError::Apply {
            name: name.to_string(),
            source,
        })
    }

    /// Write the full configuration into the image and return its checksum.
    ///
    /// On error the image is left partly written and should be thrown away.
    pub fn mutate(&mut self, rom: &mut [u8]) -> Result<Checksum> {
        self.finalize()?;

        let names = self.ordered_names();
        debug!("applying {} patches", names.len());
        for name in names {
            self.apply(name, rom)?;
        }

        // routines are written over whatever the slots put in them above
        for relocation in self.tables.relocations {
            self.apply(relocation.slot, rom)?;
        }

        let checksum = Checksum::of(rom);
        info!("mutated ROM, sha1 {}", checksum);
        Ok(checksum)
    }

    /// Reapply the fixed patches and recompute the seed-dependent patches
    /// from the seed trees already in the image. Slot assignments are not
    /// touched, but overrides still apply, so a toggle set when the image
    /// was mutated survives the fixed patches being written again.
    pub fn update(&mut self, rom: &mut [u8]) -> Result<Checksum> {
        let tables = self.tables;

        let mut tree_ids = Vec::with_capacity(tables.seed_trees.len());
        for tree in tables.seed_trees {
            let addr = self.slot(tree)?.id_addrs.first().copied().ok_or_else(|| {
                PatcherError::Config(format!("seed tree {} has no id address", tree))
            })?;
            tree_ids.push(rom[addr.full_offset()]);
        }
        debug!("seed trees in image: {:02x?}", tree_ids);
        self.set_seed_data(&tree_ids)?;
        self.apply_overrides()?;

        for name in self.ordered_names_in(PatchGroup::Fixed) {
            self.apply(name, rom)?;
        }
        for name in tables.update_patches {
            self.apply(name, rom)?;
        }

        let checksum = Checksum::of(rom);
        info!("updated ROM, sha1 {}", checksum);
        Ok(checksum)
    }

    /// Fill in everything that depends on the placement or on where other
    /// patches ended up.
    fn finalize(&mut self) -> Result<()> {
        let tables = self.tables;

        let mut tree_ids = Vec::with_capacity(tables.seed_trees.len());
        for tree in tables.seed_trees {
            tree_ids.push(self.slot(tree)?.treasure.borrow().id);
        }
        self.set_seed_data(&tree_ids)?;
        self.apply_overrides()?;

        for relocation in tables.relocations {
            let base = self.range(relocation.routine)?.addr;
            let id_addr = base.advance(relocation.id_offset);
            let sub_id_addr = relocation.sub_id_offset.map(|offset| base.advance(offset));
            self.slot_mut(relocation.slot)?.relocate(id_addr, sub_id_addr);
        }

        Ok(())
    }

    fn apply_overrides(&mut self) -> Result<()> {
        let overrides = std::mem::take(&mut self.overrides);
        let result = overrides.iter().try_for_each(|(name, bytes)| {
            debug!("override {}: {:02x?}", name, bytes);
            self.range_mut(name).map(|range| range.new = bytes.clone())
        });
        self.overrides = overrides;
        result
    }

    /// Set one byte of a range's replacement. An override may have left the
    /// replacement shorter than the table entry.
    fn set_byte(&mut self, name: &str, index: usize, value: u8) -> Result<()> {
        let range = self.range_mut(name)?;
        let length_mismatch = PatchError::LengthMismatch {
            offset: range.addr.full_offset(),
            expected: range.old.len(),
            replacement: range.new.len(),
        };
        match range.new.get_mut(index) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(PatcherError::Apply {
                name: name.to_string(),
                source: length_mismatch,
            }),
        }
    }

    /// Set starting seeds, default seed selections and map icons from the
    /// seed tree ids. The first tree decides the starting seed type.
    fn set_seed_data(&mut self, tree_ids: &[u8]) -> Result<()> {
        let tables = self.tables;

        let Some(&horon) = tree_ids.first() else {
            return Ok(());
        };
        let seed_index = tables
            .seed_index_by_tree_id
            .get(horon as usize)
            .copied()
            .ok_or(PatcherError::InvalidSeedTree(horon))?;

        for name in tables.initial_seed_patches {
            self.set_byte(name, 0, 0x20 + seed_index)?;
        }
        for name in tables.initial_selection_patches {
            self.set_byte(name, 1, seed_index)?;
        }

        for (tree, &id) in tables.seed_trees.iter().zip(tree_ids) {
            let icon = tables
                .map_icon_by_tree_id
                .get(id as usize)
                .copied()
                .ok_or(PatcherError::InvalidSeedTree(id))?;
            self.set_byte(&format!("{} map icon", tree), 0, icon)?;
        }

        Ok(())
    }
}

/// Hands out space at the end of banks for placed routines.
struct EndOfBank {
    next: HashMap<u8, u16>,
}

impl EndOfBank {
    fn new(free_space: &[(u8, u16)]) -> Self {
        Self {
            next: free_space.iter().copied().collect(),
        }
    }

    fn alloc(&mut self, bank: u8, len: usize) -> Result<Addr> {
        let out_of_space = PatcherError::OutOfSpace { bank, len };
        let start = match self.next.get(&bank) {
            Some(&start) => start,
            None => return Err(out_of_space),
        };
        let bank_end = if bank == 0 { BANK_SIZE } else { 2 * BANK_SIZE };
        let end = start as usize + len;
        if end > bank_end {
            return Err(out_of_space);
        }
        self.next.insert(bank, end as u16);
        Ok(Addr::new(bank, start))
    }
}

fn patch_sets(tables: &RomTables, placement: &Placement) -> Result<Vec<PatchSet>> {
    for name in placement.slots.keys() {
        if tables.slot(name).is_none() {
            return Err(PatcherError::UnknownSlot(name.clone()));
        }
    }

    let mut fixed = PatchSet::new(PatchGroup::Fixed);
    for def in tables.fixed {
        fixed.push(def.name, Patch::Range(def.to_patch()));
    }

    let mut treasure_set = PatchSet::new(PatchGroup::Treasure);
    let mut treasures: HashMap<&str, SharedTreasure> = HashMap::new();
    for def in tables.treasures {
        let shared = def.to_treasure().shared();
        treasures.insert(def.name, shared.clone());
        treasure_set.push(def.name, Patch::Treasure(shared));
    }

    let mut slots = PatchSet::new(PatchGroup::Slot);
    for def in tables.slots {
        let name = placement.treasure_for(def);
        let treasure = treasures
            .get(name)
            .cloned()
            .ok_or_else(|| PatcherError::UnknownTreasure(name.to_string()))?;
        let slot = SlotPatch {
            treasure,
            id_addrs: def.id_addrs.to_vec(),
            sub_id_addrs: def.sub_id_addrs.to_vec(),
            collect_mode: def.collect_mode,
            sub_id_offset: def.sub_id_offset,
        };
        slots.push(def.name, Patch::Slot(slot));
    }

    let mut variable = PatchSet::new(PatchGroup::Variable);
    for def in tables.variable {
        variable.push(def.name, Patch::Range(def.to_patch()));
    }

    let mut routines = PatchSet::new(PatchGroup::Routine);
    let mut space = EndOfBank::new(tables.free_space);
    for def in tables.routines {
        let addr = space.alloc(def.bank, def.code.len())?;
        debug!("placing {} at {:02x}:{:04x}", def.name, addr.bank, addr.offset);
        let blank = vec![0u8; def.code.len()];
        routines.push(def.name, Patch::Range(RangePatch::new(addr, &blank, def.code)));
    }

    Ok(vec![fixed, treasure_set, slots, variable, routines])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::ROM_SIZE;
    use crate::tables::{Relocation, RoutineDef, SlotDef, FIXED_PATCHES};
    use crate::treasure::collect;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn offset_of(bank: u8, offset: u16) -> usize {
        Addr::new(bank, offset).full_offset()
    }

    #[test]
    fn builds_every_table_entry() {
        let tables = RomTables::seasons();
        let registry = Registry::build(&tables, &Placement::default()).unwrap();
        let expected = tables.fixed.len()
            + tables.treasures.len()
            + tables.slots.len()
            + tables.variable.len()
            + tables.routines.len();
        assert_eq!(registry.len(), expected);
        assert_eq!(registry.group("maku gate check"), Some(PatchGroup::Fixed));
        assert_eq!(registry.group("rod gift"), Some(PatchGroup::Slot));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let tables = RomTables::seasons();
        let def = FIXED_PATCHES[0];

        let mut fixed = PatchSet::new(PatchGroup::Fixed);
        fixed.push(def.name, Patch::Range(def.to_patch()));
        let mut variable = PatchSet::new(PatchGroup::Variable);
        variable.push(def.name, Patch::Range(def.to_patch()));

        match Registry::from_sets(&tables, vec![fixed, variable]) {
            Err(PatcherError::DuplicatePatch(name)) => assert_eq!(name, def.name),
            _ => panic!("duplicate name was accepted"),
        }
    }

    #[test]
    fn unknown_names_in_placement_are_rejected() {
        let tables = RomTables::seasons();

        let mut placement = Placement::default();
        placement.place("nowhere", "rod");
        assert!(matches!(
            Registry::build(&tables, &placement),
            Err(PatcherError::UnknownSlot(_))
        ));

        let mut placement = Placement::default();
        placement.place("rod gift", "nothing");
        assert!(matches!(
            Registry::build(&tables, &placement),
            Err(PatcherError::UnknownTreasure(_))
        ));
    }

    #[test]
    fn mutate_is_repeatable() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement.place("rod gift", "sword 1");
        placement.place("d0 sword chest", "rod");

        let mut first = vec![0u8; ROM_SIZE];
        let mut second = vec![0u8; ROM_SIZE];
        let a = Registry::build(&tables, &placement).unwrap().mutate(&mut first).unwrap();
        let b = Registry::build(&tables, &placement).unwrap().mutate(&mut second).unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn storage_order_does_not_change_result() {
        let tables = RomTables::seasons();
        let placement = Placement::default();

        let mut reference = vec![0u8; ROM_SIZE];
        let expected = Registry::build(&tables, &placement)
            .unwrap()
            .mutate(&mut reference)
            .unwrap();

        for seed in 0..3 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sets = patch_sets(&tables, &placement).unwrap();
            sets.shuffle(&mut rng);
            for set in &mut sets {
                set.patches.shuffle(&mut rng);
            }

            let mut rom = vec![0u8; ROM_SIZE];
            let checksum = Registry::from_sets(&tables, sets)
                .unwrap()
                .mutate(&mut rom)
                .unwrap();
            assert_eq!(checksum, expected);
        }
    }

    #[test]
    fn slots_write_assigned_treasure() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement.place("d0 sword chest", "rod");
        placement.place("shovel gift", "bombs, 10");

        let mut rom = vec![0u8; ROM_SIZE];
        Registry::build(&tables, &placement).unwrap().mutate(&mut rom).unwrap();

        // rod keeps its item id in place of the biased sub id
        assert_eq!(rom[offset_of(0x0a, 0x7b86)], 0x07);
        assert_eq!(rom[offset_of(0x0a, 0x7b88)], 0x07);

        assert_eq!(rom[offset_of(0x0b, 0x6a6e)], 0x03);
        assert_eq!(rom[offset_of(0x0b, 0x6a6f)], 0x00);
        let bombs = offset_of(0x15, 0x52c9);
        assert_eq!(&rom[bombs..bombs + 4], &[0x0a, 0x10, 0x4d, 0x05]);
    }

    #[test]
    fn star_ore_writes_both_id_bytes() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement.place("star ore spot", "rod");

        let mut rom = vec![0xaa; ROM_SIZE];
        Registry::build(&tables, &placement).unwrap().mutate(&mut rom).unwrap();

        assert_eq!(rom[offset_of(0x08, 0x62f4)], 0x07);
        assert_eq!(rom[offset_of(0x08, 0x62fe)], 0x07);
        // no routines are placed for this image
        let free = offset_of(0x08, 0x7ec0);
        assert!(rom[free..free + 8].iter().all(|&b| b == 0xaa));
    }

    const LOADER: &[u8] = &[0xf5, 0x3e, 0x00, 0x47, 0x0e, 0x00, 0xf1, 0xc9];

    const ORE_SLOTS: &[SlotDef] = &[SlotDef {
        name: "ore dig",
        treasure: "hard ore",
        id_addrs: &[Addr { bank: 0x08, offset: 0x6000 }, Addr { bank: 0x08, offset: 0x6010 }],
        sub_id_addrs: &[Addr { bank: 0x08, offset: 0x6001 }],
        collect_mode: collect::FIND2,
        sub_id_offset: 0,
    }];

    const ORE_ROUTINES: &[RoutineDef] = &[RoutineDef {
        name: "ore id func",
        bank: 0x08,
        code: LOADER,
    }];

    const ORE_RELOCATIONS: &[Relocation] = &[Relocation {
        slot: "ore dig",
        routine: "ore id func",
        id_offset: 2,
        sub_id_offset: Some(5),
    }];

    fn ore_tables() -> RomTables {
        RomTables {
            slots: ORE_SLOTS,
            fixed: &[],
            variable: &[],
            routines: ORE_ROUTINES,
            relocations: ORE_RELOCATIONS,
            free_space: &[(0x08, 0x7f00)],
            seed_trees: &[],
            update_patches: &[],
            ..RomTables::seasons()
        }
    }

    #[test]
    fn relocated_slots_land_in_their_routines() {
        let tables = ore_tables();
        let mut placement = Placement::default();
        placement.place("ore dig", "rod");

        let mut rom = vec![0xaa; ROM_SIZE];
        let mut registry = Registry::build(&tables, &placement).unwrap();
        registry.mutate(&mut rom).unwrap();

        let routine = registry.range("ore id func").unwrap().addr;
        assert_eq!(routine, Addr::new(0x08, 0x7f00));
        let slot = registry.slot("ore dig").unwrap();
        assert_eq!(slot.id_addrs, vec![routine.advance(2), Addr::new(0x08, 0x6010)]);
        assert_eq!(slot.sub_id_addrs, vec![routine.advance(5)]);

        // "ore id func" sorts after "ore dig", so only the second pass
        // leaves the id in the routine
        let at = routine.full_offset();
        assert_eq!(&rom[at..at + 8], &[0xf5, 0x3e, 0x07, 0x47, 0x0e, 0x00, 0xf1, 0xc9]);
        assert_eq!(rom[offset_of(0x08, 0x6010)], 0x07);
        assert_eq!(rom[offset_of(0x08, 0x6000)], 0xaa);
        assert_eq!(rom[offset_of(0x08, 0x6001)], 0xaa);
    }

    #[test]
    fn routines_need_free_space() {
        let tables = RomTables {
            free_space: &[(0x08, 0x7ffc)],
            ..ore_tables()
        };
        assert!(matches!(
            Registry::build(&tables, &Placement::default()),
            Err(PatcherError::OutOfSpace { bank: 0x08, len: 8 })
        ));
    }

    #[test]
    fn seed_data_follows_horon_tree() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement.place("ember tree", "scent tree seeds");
        placement.place("scent tree", "ember tree seeds");

        let mut rom = vec![0u8; ROM_SIZE];
        Registry::build(&tables, &placement).unwrap().mutate(&mut rom).unwrap();

        // scent seeds have seed index 1
        assert_eq!(rom[offset_of(0x3f, 0x453b)], 0x21);
        assert_eq!(rom[offset_of(0x3f, 0x4544)], 0x21);
        assert_eq!(rom[offset_of(0x10, 0x4b19)], 0x21);
        assert_eq!(&rom[offset_of(0x07, 0x418e)..offset_of(0x07, 0x4190)], &[0xbe, 0x01]);
        assert_eq!(rom[offset_of(0x02, 0x6cc2)], 0x16);
        assert_eq!(rom[offset_of(0x02, 0x6cb9)], 0x15);
        assert_eq!(rom[offset_of(0x11, 0x64cb)], 0x02);
    }

    #[test]
    fn overrides_replace_bytes() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement
            .overrides
            .insert("cliff default season".to_string(), vec![0x03]);

        let mut rom = vec![0u8; ROM_SIZE];
        Registry::build(&tables, &placement).unwrap().mutate(&mut rom).unwrap();
        assert_eq!(rom[offset_of(0x01, 0x7e43)], 0x03);
    }

    #[test]
    fn bad_override_aborts_mutation() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement
            .overrides
            .insert("cliff default season".to_string(), vec![0x03, 0x00]);

        let mut rom = vec![0u8; ROM_SIZE];
        let err = Registry::build(&tables, &placement)
            .unwrap()
            .mutate(&mut rom)
            .unwrap_err();
        match err {
            PatcherError::Apply { name, source } => {
                assert_eq!(name, "cliff default season");
                assert!(matches!(source, PatchError::LengthMismatch { .. }));
            }
            other => panic!("unexpected error: {}", other),
        }

        placement.overrides.clear();
        placement.overrides.insert("rod".to_string(), vec![0x00]);
        let err = Registry::build(&tables, &placement)
            .unwrap()
            .mutate(&mut rom)
            .unwrap_err();
        assert!(matches!(err, PatcherError::NotARange(_)));
    }

    #[test]
    fn update_reads_trees_from_image() {
        let tables = RomTables::seasons();
        let mut rom = vec![0u8; ROM_SIZE];
        // mystery seeds on the horon tree
        rom[offset_of(0x11, 0x64cb)] = 0x01;
        rom[offset_of(0x11, 0x67dd)] = 0x00;

        let mut registry = Registry::build(&tables, &Placement::default()).unwrap();
        registry.update(&mut rom).unwrap();

        assert_eq!(rom[offset_of(0x04, 0x61a3)], 0x66);
        assert_eq!(rom[offset_of(0x3f, 0x453b)], 0x24);
        assert_eq!(rom[offset_of(0x02, 0x6cc2)], 0x19);
        assert_eq!(rom[offset_of(0x02, 0x6cbf)], 0x15);
        // neither slots nor treasures are rewritten
        assert_eq!(rom[offset_of(0x15, 0x7511)], 0x00);
        let rod = offset_of(0x15, 0x52f9);
        assert_eq!(&rom[rod..rod + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn update_keeps_overrides() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement
            .overrides
            .insert("cliff default season".to_string(), vec![0x03]);

        let mut rom = vec![0u8; ROM_SIZE];
        Registry::build(&tables, &placement).unwrap().update(&mut rom).unwrap();
        assert_eq!(rom[offset_of(0x01, 0x7e43)], 0x03);
        assert_eq!(rom[offset_of(0x04, 0x61a3)], 0x66);
    }

    #[test]
    fn short_override_stays_an_error_on_reuse() {
        let tables = RomTables::seasons();
        let mut placement = Placement::default();
        placement
            .overrides
            .insert("satchel initial selection".to_string(), vec![0xbe]);

        let mut registry = Registry::build(&tables, &placement).unwrap();
        let mut rom = vec![0u8; ROM_SIZE];
        assert!(matches!(
            registry.mutate(&mut rom),
            Err(PatcherError::Apply { .. })
        ));

        for result in [registry.update(&mut rom), registry.mutate(&mut rom)] {
            match result {
                Err(PatcherError::Apply { name, source }) => {
                    assert_eq!(name, "satchel initial selection");
                    assert!(matches!(
                        source,
                        PatchError::LengthMismatch {
                            expected: 2,
                            replacement: 1,
                            ..
                        }
                    ));
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn update_rejects_unknown_tree() {
        let tables = RomTables::seasons();
        let mut rom = vec![0u8; ROM_SIZE];
        rom[offset_of(0x11, 0x64cb)] = 0x09;

        let mut registry = Registry::build(&tables, &Placement::default()).unwrap();
        assert!(matches!(
            registry.update(&mut rom),
            Err(PatcherError::InvalidSeedTree(0x09))
        ));
    }

    #[test]
    fn applied_patches_check_clean() {
        let tables = RomTables::seasons();
        let mut registry = Registry::build(&tables, &Placement::default()).unwrap();
        let mut rom = vec![0u8; ROM_SIZE];
        registry.mutate(&mut rom).unwrap();

        for name in registry.ordered_names() {
            let patch = registry.get(name).unwrap();
            patch.mutate(&mut rom).unwrap();
            if patch.check(&rom).is_err() {
                // ranges check against the unmodified bytes
                match patch {
                    Patch::Range(range) => assert_ne!(range.old, range.new, "{}", name),
                    _ => panic!("{} does not check clean after being applied", name),
                }
            }
        }
    }

    #[test]
    fn allocator_respects_bank_end() {
        let mut space = EndOfBank::new(&[(0x08, 0x7ffc)]);
        assert_eq!(space.alloc(0x08, 4).unwrap(), Addr::new(0x08, 0x7ffc));
        assert!(matches!(
            space.alloc(0x08, 1),
            Err(PatcherError::OutOfSpace { bank: 0x08, len: 1 })
        ));
        assert!(matches!(space.alloc(0x09, 1), Err(PatcherError::OutOfSpace { .. })));
    }
}
