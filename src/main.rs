use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use keigo::{Config, Conjugations, Converter, Format, PatternDictionary, Processor};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    about = "Changes the formality of the main verb in a tagged Japanese input sentence"
)]
struct Args {
    /// Path to input file. Defaults to reading from stdin.
    #[arg(long, short)]
    infile: Option<PathBuf>,
    /// Output verb conjugation format, one of informal, polite or formal.
    /// Defaults to polite.
    #[arg(long, short)]
    format: Option<Format>,
    /// Path to the verb pattern dictionary. Defaults to `verb_dict.kytea`.
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Load configuration from the given TOML file. Command line arguments
    /// take precedence over it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let format = args.format.or(config.format).unwrap_or_default();
    tracing::debug!(%format, "Converting");

    let dictionary_path = args
        .dictionary
        .or(config.dictionary)
        .unwrap_or_else(|| PathBuf::from(keigo::DEFAULT_DICTIONARY));

    let start = Instant::now();
    let conjugations = Conjugations::new()?;
    let dictionary = PatternDictionary::open(&dictionary_path)?;
    let duration = Instant::now().duration_since(start);
    tracing::debug!(?duration, entries = dictionary.len());

    let processor = Processor::new(Converter::new(&conjugations, &dictionary, format));

    let input: Box<dyn BufRead> = match &args.infile {
        Some(path) => {
            let file = File::open(path).with_context(|| anyhow!("{}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut out = BufWriter::new(io::stdout().lock());

    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", processor.process(&line))?;
    }

    out.flush()?;
    Ok(())
}
