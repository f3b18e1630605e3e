use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use streamtube::player::{StdinPrompt, VideoPlayer};
use streamtube::{catalog, shell};

#[derive(Parser, Debug)]
#[command(name = "streamtube")]
#[command(about = "Command-driven video streaming simulator", long_about = None)]
struct Args {
    /// Path to the video catalog file
    #[arg(short = 'c', long, default_value = "data/videos.txt")]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog_path = shellexpand::tilde(&args.catalog);
    let catalog = catalog::load_catalog(PathBuf::from(catalog_path.as_ref()).as_path())?;
    log::info!("Catalog loaded: {} videos", catalog.len());

    let mut player = VideoPlayer::new(catalog, StdinPrompt::new(), io::stdout());
    shell::run(&mut player)
}
