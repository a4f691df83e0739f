use std::path::PathBuf;

use clap::Parser;
use stellar_x::{PageId, Tour, TourConfig, TourError, init_file_logging};
use tokio::time::Instant;

/// Divisor applied to every delay with `--fast`.
const FAST_FACTOR: u64 = 10;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// JSON file with timings and score thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file (RUST_LOG overrides the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Shorten every delay, for demos
    #[arg(long)]
    fast: bool,

    /// Page index to open once the tour has loaded
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    start_page: Option<u8>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), TourError> {
    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let mut config = match &args.config {
        Some(path) => TourConfig::from_json_file(path)?,
        None => TourConfig::default(),
    };
    if args.questions.is_some() {
        config.questions = args.questions;
    }
    if args.fast {
        config.timings = config.timings.scaled_down(FAST_FACTOR);
    }

    let mut tour = Tour::from_config(&config)?;
    if let Some(index) = args.start_page {
        let page = PageId::resolve(index as usize);
        // The transition runs behind the loading screen.
        tour.app_mut().jump_to(page.index(), Instant::now());
    }

    tour.run().await
}
