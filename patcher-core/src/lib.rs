use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod addr;
pub mod patch;
pub mod placement;
pub mod registry;
pub mod rom;
pub mod slot;
pub mod tables;
pub mod treasure;
pub mod verify;

pub use addr::Addr;
pub use patch::{Mismatch, Mutable, Patch, PatchError, RangePatch};
pub use placement::{treasure_can_be_lost, unique_treasures, Placement};
pub use registry::Registry;
pub use rom::Checksum;
pub use tables::RomTables;
pub use verify::{verify, Diagnostic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Write the full configuration from a placement.
    Mutate,
    /// Reapply fixed patches and rederive seed data from the image.
    Update,
    /// Report every patch that does not match the image.
    Verify,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatcherSettings {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub placement_path: Option<PathBuf>,
    pub mode: Mode,
    pub debug: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Patched {
        checksum: Checksum,
        output_path: PathBuf,
    },
    Verified(Vec<Diagnostic>),
}

#[derive(Debug, Error)]
pub enum PatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("placement file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("duplicate patch name: {0}")]
    DuplicatePatch(String),
    #[error("no patch named {0}")]
    UnknownPatch(String),
    #[error("patch {0} is not a byte range")]
    NotARange(String),
    #[error("no slot named {0}")]
    UnknownSlot(String),
    #[error("no treasure named {0}")]
    UnknownTreasure(String),
    #[error("no room for {len} bytes at the end of bank {bank:02x}")]
    OutOfSpace { bank: u8, len: usize },
    #[error("invalid seed tree id {0:02x}")]
    InvalidSeedTree(u8),
    #[error("applying {name}: {source}")]
    Apply {
        name: String,
        #[source]
        source: PatchError,
    },
    #[error("not an Oracle of Seasons ROM")]
    NotSeasons,
    #[error("US ROMs are not supported")]
    UnsupportedRegion,
    #[error("ROM is {found:#x} bytes, expected {expected:#x}")]
    RomSize { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, PatcherError>;

pub fn run(settings: &PatcherSettings) -> Result<Outcome> {
    if !settings.input_path.exists() {
        return Err(PatcherError::Config(format!(
            "Input path does not exist: {}",
            settings.input_path.display()
        )));
    }

    let mut rom = fs::read(&settings.input_path)?;
    rom::validate(&rom)?;
    if !rom::is_vanilla(&rom) {
        warn!("{} is not an unmodified ROM", settings.input_path.display());
    }

    let placement = match &settings.placement_path {
        Some(path) => Placement::load(path)?,
        None => Placement::default(),
    };

    let tables = RomTables::seasons();
    if settings.mode == Mode::Mutate {
        for (name, count) in placement.repeated_unique(&tables) {
            warn!("{} is placed in {} slots", name, count);
        }
    }
    let mut registry = Registry::build(&tables, &placement)?;

    let checksum = match settings.mode {
        Mode::Verify => {
            let diagnostics = verify(&registry, &rom, tables.verify_exceptions);
            info!("{} mismatched patches", diagnostics.len());
            return Ok(Outcome::Verified(diagnostics));
        }
        Mode::Mutate => registry.mutate(&mut rom)?,
        Mode::Update => registry.update(&mut rom)?,
    };

    let output_path = settings.output_path.clone().ok_or_else(|| {
        PatcherError::Config("an output path is required to write the ROM".to_string())
    })?;
    fs::write(&output_path, &rom)?;
    info!("wrote {}", output_path.display());

    if settings.debug {
        write_log(&output_path, settings.mode, &tables, &placement, checksum)?;
    }

    Ok(Outcome::Patched {
        checksum,
        output_path,
    })
}

fn log_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.as_os_str().to_owned();
    name.push(".log.txt");
    PathBuf::from(name)
}

fn write_log(
    output_path: &Path,
    mode: Mode,
    tables: &RomTables,
    placement: &Placement,
    checksum: Checksum,
) -> Result<()> {
    fs::write(
        log_path(output_path),
        placement_log(mode, tables, placement, checksum),
    )?;
    Ok(())
}

fn placement_log(
    mode: Mode,
    tables: &RomTables,
    placement: &Placement,
    checksum: Checksum,
) -> String {
    let mut log = String::new();
    log.push_str(&format!("sha1: {}\n", checksum));

    if !placement.overrides.is_empty() {
        log.push_str("overrides:\n");
        for (name, bytes) in &placement.overrides {
            log.push_str(&format!("  {}: {:02x?}\n", name, bytes));
        }
    }

    if mode != Mode::Mutate {
        return log;
    }

    log.push_str("slots:\n");
    for (slot, treasure) in placement.assignments(tables) {
        log.push_str(&format!("  {} <- {}\n", slot, treasure));
    }

    let repeated = placement.repeated_unique(tables);
    if !repeated.is_empty() {
        log.push_str("unique treasures placed more than once:\n");
        for (name, count) in repeated {
            log.push_str(&format!("  {} x{}\n", name, count));
        }
    }

    log.push_str("treasures that can be lost:\n");
    for def in tables.treasures {
        if !treasure_can_be_lost(def.name) {
            continue;
        }
        if let Some(slot) = placement.slot_holding(tables, def.name) {
            log.push_str(&format!("  {} in {}\n", def.name, slot));
        }
    }

    log
}
