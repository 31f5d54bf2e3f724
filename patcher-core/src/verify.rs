use log::debug;
use std::collections::HashSet;
use std::fmt;

use crate::patch::{Mismatch, Mutable};
use crate::registry::Registry;

/// One patch whose bytes do not match the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub name: String,
    pub mismatch: Mismatch,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.mismatch)
    }
}

/// Check every patch in the registry against the image, skipping the named
/// exceptions. Returns every mismatch, ordered by patch name; an empty list
/// means the image is consistent.
pub fn verify(registry: &Registry<'_>, rom: &[u8], exceptions: &[&str]) -> Vec<Diagnostic> {
    let skip: HashSet<&str> = exceptions.iter().copied().collect();
    let mut diagnostics = Vec::new();

    for name in registry.ordered_names() {
        if skip.contains(name) {
            continue;
        }
        let Some(patch) = registry.get(name) else {
            continue;
        };
        if let Err(mismatch) = patch.check(rom) {
            diagnostics.push(Diagnostic {
                name: name.to_string(),
                mismatch,
            });
        }
    }

    debug!(
        "checked {} patches, {} skipped, {} mismatched",
        registry.len(),
        skip.len(),
        diagnostics.len()
    );
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::Addr;
    use crate::patch::{Patch, RangePatch};
    use crate::placement::Placement;
    use crate::registry::{PatchGroup, PatchSet};
    use crate::rom::ROM_SIZE;
    use crate::tables::RomTables;

    fn small_registry(tables: &RomTables) -> Registry<'_> {
        let mut set = PatchSet::new(PatchGroup::Fixed);
        set.push("b", Patch::Range(RangePatch::byte(Addr::new(0, 0x20), 0x11, 0x22)));
        set.push("a", Patch::Range(RangePatch::byte(Addr::new(0, 0x10), 0x33, 0x44)));
        set.push("c", Patch::Range(RangePatch::byte(Addr::new(0, 0x30), 0x00, 0x55)));
        Registry::from_sets(tables, vec![set]).unwrap()
    }

    #[test]
    fn collects_every_mismatch_in_name_order() {
        let tables = RomTables::seasons();
        let registry = small_registry(&tables);
        let rom = vec![0u8; 0x100];

        let diagnostics = verify(&registry, &rom, &[]);
        let names: Vec<_> = diagnostics.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(
            diagnostics[1].mismatch,
            Mismatch::Byte {
                offset: 0x20,
                expected: 0x11,
                found: 0x00,
            }
        );
        assert_eq!(diagnostics[0].to_string(), "a: expected 33 at 10; found 00");
    }

    #[test]
    fn exceptions_are_skipped() {
        let tables = RomTables::seasons();
        let registry = small_registry(&tables);
        let rom = vec![0u8; 0x100];

        let diagnostics = verify(&registry, &rom, &["a"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, "b");
    }

    #[test]
    fn consistent_image_has_no_diagnostics() {
        let tables = RomTables::seasons();
        let registry = small_registry(&tables);
        let mut rom = vec![0u8; 0x100];
        rom[0x10] = 0x33;
        rom[0x20] = 0x11;
        assert!(verify(&registry, &rom, &[]).is_empty());
    }

    #[test]
    fn reports_slot_and_treasure_deviations() {
        let tables = RomTables::seasons();
        let mut registry = Registry::build(&tables, &Placement::default()).unwrap();
        let mut rom = vec![0u8; ROM_SIZE];
        registry.mutate(&mut rom).unwrap();

        let shovel = Addr::new(0x0b, 0x6a6e).full_offset();
        rom[shovel] = 0x07;
        let ribbon = Addr::new(0x15, 0x5241).full_offset();
        rom[ribbon + 2] = 0xff;

        let diagnostics = verify(&registry, &rom, tables.verify_exceptions);
        let shovel_gift = diagnostics
            .iter()
            .find(|d| d.name == "shovel gift")
            .unwrap();
        assert_eq!(
            shovel_gift.mismatch,
            Mismatch::ItemId {
                offset: shovel,
                expected: 0x15,
                found: 0x07,
            }
        );

        // ribbon is an exception and never reported
        assert!(diagnostics.iter().all(|d| d.name != "ribbon"));
        // the fixed patches are written, so they no longer match the
        // unmodified bytes
        assert!(diagnostics.iter().any(|d| d.name == "maku gate check"));
    }
}
