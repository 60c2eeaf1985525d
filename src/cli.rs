//! Command-line front end: `generate(tokens) -> exit code`.

use crate::error::{Error, Result};
use crate::manifest::{Manifest, Mode};
use crate::rng::{Flavor, GlibcRand, MsvcRand};
use crate::schedule::{RANDOM, SEQUENTIAL};
use crate::workload::{run_sequential, Workload};
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};

pub const USAGE: &str = "Usage: gen [-s <student-id>] [-t <size-of-subset>] [-b] [-l]";

pub const DEFAULT_SEED: u32 = 42;
pub const MIN_SUBSET_SIZE: i32 = 10;
pub const MAX_SUBSET_SIZE: i32 = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "gen",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Student identifier, seeds the generator
    #[arg(short = 's', value_name = "student-id", allow_negative_numbers = true)]
    pub student_id: Option<i32>,
    /// Size of the searched subset, selects the random workload
    #[arg(short = 't', value_name = "size-of-subset", allow_negative_numbers = true)]
    pub subset_size: Option<i32>,
    /// Sequential workload
    #[arg(short = 'b')]
    pub sequential: bool,
    /// Sample finds from the carved array instead of reshuffling first
    #[arg(short = 'l')]
    pub last: bool,
    /// Which C runtime rand() to reproduce
    #[arg(long = "rng", value_enum, default_value_t = Flavor::Msvc)]
    pub flavor: Flavor,
    /// Write tokens to a file instead of standard output
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Write a JSON summary of the run
    #[arg(long = "manifest")]
    pub manifest: Option<PathBuf>,
}

/// A validated invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub output: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl Settings {
    /// Parses and validates `tokens`, the first being the program name.
    ///
    /// Nothing is written anywhere on failure, apart from diagnostics.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Settings>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
        if tokens.get(1).map_or(false, |t| t == "--help") {
            return Err(Error::Help);
        }

        let cli = Cli::try_parse_from(&tokens)?;
        // A negative size counts as not given at all.
        let subset_size = cli.subset_size.filter(|&t| t >= 0);
        if cli.sequential == subset_size.is_some() {
            return Err(Error::ConflictingModes);
        }

        let mode = match subset_size {
            None => Mode::Sequential,
            Some(subset_size) => {
                let seed = match cli.student_id.filter(|&s| s >= 0) {
                    Some(seed) => seed as u32,
                    None => {
                        warn!("Student ID not given, defaulting to {}.", DEFAULT_SEED);
                        DEFAULT_SEED
                    }
                };
                if !(MIN_SUBSET_SIZE..=MAX_SUBSET_SIZE).contains(&subset_size) {
                    return Err(Error::SubsetSizeOutOfRange(subset_size));
                }
                Mode::Random {
                    seed,
                    flavor: cli.flavor,
                    subset_size: subset_size as usize,
                    last: cli.last,
                }
            }
        };

        Ok(Settings {
            mode,
            output: cli.output,
            manifest: cli.manifest,
        })
    }
}

/// Emits the whole workload described by `mode` into `out`.
pub fn execute<W: Write>(mode: &Mode, out: &mut W) -> Result<Manifest> {
    let blocks = match *mode {
        Mode::Sequential => run_sequential(out, &SEQUENTIAL)?,
        Mode::Random { seed, flavor, subset_size, last } => {
            let capacity = RANDOM.max_len();
            match flavor {
                Flavor::Msvc => Workload::new(MsvcRand::new(seed), capacity)
                    .run(out, &RANDOM, subset_size, last)?,
                Flavor::Glibc => Workload::new(GlibcRand::new(seed), capacity)
                    .run(out, &RANDOM, subset_size, last)?,
            }
        }
    };
    out.flush()?;
    Ok(Manifest { mode: mode.clone(), blocks })
}

/// Parses `tokens` and writes the workload into `out`, ignoring `--output`.
pub fn generate_to<I, T, W>(tokens: I, out: &mut W) -> Result<Manifest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let settings = Settings::from_tokens(tokens)?;
    let manifest = execute(&settings.mode, out)?;
    if let Some(path) = &settings.manifest {
        manifest.save(path)?;
    }
    Ok(manifest)
}

fn run(settings: &Settings) -> Result<Manifest> {
    info!(mode = ?settings.mode, "generating workload");
    let manifest = match &settings.output {
        Some(path) => execute(&settings.mode, &mut BufWriter::new(File::create(path)?))?,
        None => {
            let stdout = io::stdout();
            execute(&settings.mode, &mut BufWriter::new(stdout.lock()))?
        }
    };
    if let Some(path) = &settings.manifest {
        manifest.save(path)?;
        info!("manifest written to `{}`", path.display());
    }
    info!(blocks = manifest.blocks.len(), finds = manifest.total_finds(), "done");
    Ok(manifest)
}

/// Entry point for hosts that hand over already-decoded argument strings.
/// Returns the process exit status.
pub fn generate<I, T>(tokens: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let outcome = Settings::from_tokens(tokens).and_then(|settings| run(&settings));
    match outcome {
        Ok(_) => 0,
        Err(e) => {
            // Hosts may not install a subscriber, so diagnostics bypass tracing.
            eprintln!("{}", e);
            if e.wants_usage() {
                eprintln!("{}", USAGE);
            }
            e.exit_code()
        }
    }
}
