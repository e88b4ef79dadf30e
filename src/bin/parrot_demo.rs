//! Runs a recital and prints what everyone said.
//!
//! Usage:
//!   parrot-demo --species dog --times 2
//!   parrot-demo --species mynah --word hello --word polly --format json
//!   PARROT_SPECIES=cat parrot-demo --report
//!
//! Utterances go to stdout, one per line. Diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use parrot::{
    ENV_FORMAT, ENV_SPECIES, ENV_WORDS, Format, LineStage, Species, env_non_empty, recite,
    split_list,
};
use std::io::{self, BufWriter};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parrot-demo")]
#[command(about = "Let a parrot mimic an animal and cast it back")]
struct Cli {
    /// Species to mimic: dog, cat or mynah. Falls back to PARROT_SPECIES, then dog.
    #[arg(long)]
    species: Option<String>,
    /// Base repetition count for every performance.
    #[arg(long, default_value_t = 2)]
    times: usize,
    /// Output format: text or json. Falls back to PARROT_FORMAT, then text.
    #[arg(long)]
    format: Option<String>,
    /// Word taught to a mynah before it performs; repeatable. Falls back to PARROT_WORDS.
    #[arg(long = "word")]
    words: Vec<String>,
    /// Print the cast report as JSON on stderr when done.
    #[arg(long)]
    report: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let species_raw = cli
        .species
        .or_else(|| env_non_empty(ENV_SPECIES))
        .unwrap_or_else(|| Species::Dog.as_str().to_string());
    let species = Species::try_from(species_raw.as_str())?;

    let format_raw = cli
        .format
        .or_else(|| env_non_empty(ENV_FORMAT))
        .unwrap_or_else(|| Format::default().as_str().to_string());
    let format = Format::try_from(format_raw.as_str())?;

    let words = if cli.words.is_empty() {
        env_non_empty(ENV_WORDS)
            .map(|raw| split_list(&raw))
            .unwrap_or_default()
    } else {
        cli.words
    };
    if !words.is_empty() && species != Species::Mynah {
        tracing::warn!(species = species.as_str(), "only a mynah learns words; ignoring them");
    }

    let stdout = io::stdout();
    let mut stage = LineStage::new(BufWriter::new(stdout.lock()), format);
    let report = recite(species, cli.times, &words, &mut stage);
    stage.finish().context("writing utterances to stdout")?;

    if cli.report {
        eprintln!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
