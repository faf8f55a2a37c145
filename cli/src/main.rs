mod common;
mod generate;
mod keyspace;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use generate::generate;
use keyspace::keyspace;

/// Deterministic PRINCE candidate generator.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Enables verbose (debug-level) logging. Overridden by `RUST_LOG` if set.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Generate(Generate),
    Keyspace(Keyspace),
}

/// Dictionary and chain-shape bounds shared by `generate` and `keyspace`.
#[derive(Args, Clone)]
pub struct PrinceArgs {
    /// The dictionary file to load elements from, one per line.
    #[clap(value_parser)]
    pub dictionary: PathBuf,

    /// The minimum target password length.
    #[clap(long, value_parser = check_length, default_value_t = 1)]
    pub pw_min: u8,

    /// The maximum target password length.
    #[clap(long, value_parser = check_length, default_value_t = 16)]
    pub pw_max: u8,

    /// The minimum number of elements a candidate may be composed of.
    #[clap(long, value_parser = check_length, default_value_t = 1)]
    pub elem_cnt_min: u8,

    /// The maximum number of elements a candidate may be composed of.
    #[clap(long, value_parser = check_length, default_value_t = 8)]
    pub elem_cnt_max: u8,

    /// Derives the length distribution from the dictionary's bag sizes instead of the
    /// baked-in default table.
    #[clap(long, value_parser)]
    pub wl_dist_len: bool,
}

/// Generate password candidates and write them to stdout or a file.
#[derive(Args)]
pub struct Generate {
    #[clap(flatten)]
    pub common: PrinceArgs,

    /// Global keyspace position to skip up to (exclusive).
    #[clap(long, value_parser, default_value_t = 0)]
    pub skip: u128,

    /// Maximum number of candidates to emit. `0` means unlimited.
    #[clap(long, value_parser, default_value_t = 0)]
    pub limit: u128,

    /// Writes candidates to this file instead of stdout.
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Resumes from a cursor saved by a previous `--save-state` run, overriding `--skip`.
    #[clap(long, value_parser)]
    pub resume_from: Option<PathBuf>,

    /// Saves the final cursor to this file once generation completes or is interrupted.
    #[clap(long, value_parser)]
    pub save_state: Option<PathBuf>,
}

/// Print the total keyspace size without generating any candidate.
#[derive(Args)]
pub struct Keyspace {
    #[clap(flatten)]
    pub common: PrinceArgs,
}

/// Checks that a length-like argument (password length, element count) is in `[1, 16]`.
fn check_length(raw: &str) -> Result<u8> {
    let value: u8 = raw.parse()?;
    if !(1..=16).contains(&value) {
        bail!("value must be between 1 and 16, got {value}");
    }

    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.commands {
        Commands::Generate(args) => generate(args)?,
        Commands::Keyspace(args) => keyspace(args)?,
    }

    Ok(())
}
