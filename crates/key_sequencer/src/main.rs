use anyhow::Result;
use clap::Parser;
use key_sequencer::{Config, MoveTable, enumerate_sequences, total_count};
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Count chess-piece key sequences on a keypad layout", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();

    let config = if args.config.exists() {
        let config = Config::load_from_file(&args.config)?;
        info!("Loaded configuration from {}", args.config.display());
        config
    } else {
        warn!("Config file {} not found", args.config.display());
        warn!("Using the built-in reference keypad instead.");
        Config::default()
    };

    let layout = config.layout()?;
    let piece = config.piece()?;
    info!(
        "Keypad: {} x {}, {} live keys, sentinel '{}'",
        layout.rows(),
        layout.cols(),
        layout.live_key_count(),
        layout.sentinel()
    );
    info!(
        "Piece: {}, sequence length: {}, max vowels: {}",
        piece, config.search.sequence_length, config.search.max_vowels
    );

    let policy = piece.policy(&layout);
    let table = MoveTable::build(&layout, policy.as_ref());
    debug!("Move table holds {} keys", table.len());

    let collection = enumerate_sequences(&layout, &table, &config.search_options())?;

    let mut per_start: Vec<_> = collection
        .iter()
        .map(|(key, seqs)| (*key, seqs.len()))
        .collect();
    per_start.sort_unstable();
    for (key, count) in per_start {
        debug!("key {} -> {} sequences", key, count);
    }

    let total = total_count(&collection)?;
    println!("Total number of sequences: {total}");

    Ok(())
}
