use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::tables::{RomTables, SlotDef};
use crate::Result;

/// A decided configuration handed over by the placement logic: which
/// treasure goes in which slot, plus raw replacement bytes for named patches.
///
/// Slots that are not listed keep the treasure they hold in an unmodified
/// game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub slots: BTreeMap<String, String>,
    pub overrides: BTreeMap<String, Vec<u8>>,
}

impl Placement {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn place(&mut self, slot: &str, treasure: &str) {
        self.slots.insert(slot.to_string(), treasure.to_string());
    }

    /// Name of the treasure that ends up in the given slot.
    pub fn treasure_for<'a>(&'a self, slot: &'a SlotDef) -> &'a str {
        self.slots
            .get(slot.name)
            .map(String::as_str)
            .unwrap_or(slot.treasure)
    }

    /// Every slot paired with its treasure, in table order.
    pub fn assignments<'a>(&'a self, tables: &'a RomTables) -> Vec<(&'a str, &'a str)> {
        tables
            .slots
            .iter()
            .map(|slot| (slot.name, self.treasure_for(slot)))
            .collect()
    }

    /// The slot holding the named treasure. Only meaningful for treasures
    /// that are placed once.
    pub fn slot_holding<'a>(&'a self, tables: &'a RomTables, treasure: &str) -> Option<&'a str> {
        tables
            .slots
            .iter()
            .find(|slot| self.treasure_for(slot) == treasure)
            .map(|slot| slot.name)
    }

    /// Treasures that should be obtainable once but are held by more than
    /// one slot, with the number of slots holding each.
    pub fn repeated_unique(&self, tables: &RomTables) -> Vec<(&'static str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, treasure) in self.assignments(tables) {
            *counts.entry(treasure).or_insert(0) += 1;
        }
        unique_treasures(tables)
            .into_iter()
            .filter_map(|name| match counts.get(name) {
                Some(&count) if count > 1 => Some((name, count)),
                _ => None,
            })
            .collect()
    }
}

/// Treasures that can only be obtained once: those held by exactly one slot
/// in the unmodified game, plus the animal flutes. Per-dungeon boss keys are
/// never unique.
pub fn unique_treasures(tables: &RomTables) -> BTreeSet<&'static str> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for slot in tables.slots {
        *counts.entry(slot.treasure).or_insert(0) += 1;
    }

    let mut unique: BTreeSet<&'static str> = counts
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|(name, _)| name)
        .collect();

    unique.extend(["ricky's flute", "dimitri's flute", "moosh's flute"]);
    for name in [
        "d1 boss key",
        "d2 boss key",
        "d3 boss key",
        "d6 boss key",
        "d7 boss key",
        "d8 boss key",
    ] {
        unique.remove(name);
    }
    unique
}

/// Whether a treasure can be lost for good outside of hide and seek.
pub fn treasure_can_be_lost(name: &str) -> bool {
    matches!(
        name,
        "shop shield L-1"
            | "shield L-2"
            | "star ore"
            | "ribbon"
            | "spring banana"
            | "ricky's gloves"
            | "round jewel"
            | "pyramid jewel"
            | "square jewel"
            | "x-shaped jewel"
            | "red ore"
            | "blue ore"
            | "hard ore"
    )
}
