use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use patcher_core::{run, Mode, Outcome, PatcherSettings};

#[derive(Debug, Parser)]
#[command(name = "seasons-patcher", version, about = "Oracle of Seasons ROM patcher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply every patch, with slots holding the treasures from a placement file.
    Mutate(PatchArgs),
    /// Reapply fixed patches and rederive seed data from the ROM's seed trees.
    Update(PatchArgs),
    /// Check an image against the patch tables and print every mismatch.
    Verify {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        placement: Option<PathBuf>,

        #[arg(long, default_value_t = false)]
        debug: bool,
    },
}

#[derive(Debug, Args)]
struct PatchArgs {
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    output: PathBuf,

    /// JSON file of slot assignments and patch overrides.
    #[arg(long)]
    placement: Option<PathBuf>,

    /// Log every phase and write a placement log next to the output.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Command {
    fn into_settings(self) -> PatcherSettings {
        match self {
            Command::Mutate(args) => args.into_settings(Mode::Mutate),
            Command::Update(args) => args.into_settings(Mode::Update),
            Command::Verify {
                input,
                placement,
                debug,
            } => PatcherSettings {
                input_path: input,
                output_path: None,
                placement_path: placement,
                mode: Mode::Verify,
                debug,
            },
        }
    }
}

impl PatchArgs {
    fn into_settings(self, mode: Mode) -> PatcherSettings {
        PatcherSettings {
            input_path: self.input,
            output_path: Some(self.output),
            placement_path: self.placement,
            mode,
            debug: self.debug,
        }
    }
}

fn setup_logging(debug: bool) -> Result<(), fern::InitError> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let settings = cli.command.into_settings();

    if let Err(err) = setup_logging(settings.debug) {
        eprintln!("Failed to set up logging: {err}");
    }

    match run(&settings) {
        Ok(Outcome::Patched {
            checksum,
            output_path,
        }) => {
            println!("{}", checksum);
            log::info!("patched ROM written to {}", output_path.display());
        }
        Ok(Outcome::Verified(diagnostics)) => {
            for diagnostic in &diagnostics {
                println!("{}", diagnostic);
            }
            if !diagnostics.is_empty() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_takes_no_output() {
        let cli = Cli::parse_from(["seasons-patcher", "verify", "--input", "rom.gbc"]);
        let settings = cli.command.into_settings();
        assert_eq!(settings.mode, Mode::Verify);
        assert!(settings.output_path.is_none());
    }

    #[test]
    fn mutate_requires_output() {
        assert!(Cli::try_parse_from(["seasons-patcher", "mutate", "--input", "rom.gbc"]).is_err());

        let cli = Cli::parse_from([
            "seasons-patcher",
            "mutate",
            "--input",
            "rom.gbc",
            "--output",
            "out.gbc",
            "--placement",
            "placement.json",
            "--debug",
        ]);
        let settings = cli.command.into_settings();
        assert_eq!(settings.mode, Mode::Mutate);
        assert_eq!(settings.output_path, Some(PathBuf::from("out.gbc")));
        assert_eq!(settings.placement_path, Some(PathBuf::from("placement.json")));
        assert!(settings.debug);
    }
}
