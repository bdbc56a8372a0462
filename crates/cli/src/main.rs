use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use tarot_core::{deal, PhysicalShuffler, RngState};
use tarot_data::{find_spread, load_catalog, load_shuffle_config, load_spreads};

mod render;

use render::{spread_list, ReadingView};

#[derive(Debug, Parser)]
#[command(name = "tarot", author, version, about = "Shuffle a tarot deck and lay out a spread", long_about = None)]
struct Args {
    /// Directory holding deck.json, spreads.json and shuffle.json.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    #[arg(long, default_value = "Three Card")]
    spread: String,
    /// Seed the shuffle for a reproducible reading.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    list_spreads: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let spreads = load_spreads(&args.assets)?;
    if args.list_spreads {
        print!("{}", spread_list(&spreads));
        return Ok(());
    }

    let spread = find_spread(&spreads, &args.spread)
        .ok_or_else(|| anyhow!("unknown spread {:?}", args.spread))?;
    let catalog = load_catalog(&args.assets)?;
    let config = load_shuffle_config(&args.assets)?;
    let mut shuffler = match args.seed {
        Some(seed) => PhysicalShuffler::with_rng(config, RngState::from_seed(seed)),
        None => PhysicalShuffler::from_entropy(config),
    };
    log::debug!("shuffle settings: {:?}", shuffler.config());
    log::info!(
        "dealing {} from {} ({} cards)",
        spread.name,
        catalog.name,
        catalog.len()
    );

    let placements = deal(spread, catalog.ids(), &mut shuffler)
        .with_context(|| format!("deal {} from {}", spread.name, catalog.name))?;

    let view = ReadingView::new(&catalog, spread, &placements, args.seed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    run(args)
}
