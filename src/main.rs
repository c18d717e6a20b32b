mod render;
mod ui;

use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use wordgrove::{GameConfig, GameMode};

/// Tap drifting words to collect them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding the default game settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a reproducible session.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = ModeArg::Mixed)]
    mode: ModeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    English,
    Kanji,
    Hiragana,
    Mixed,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::English => GameMode::English,
            ModeArg::Kanji => GameMode::Kanji,
            ModeArg::Hiragana => GameMode::Hiragana,
            ModeArg::Mixed => GameMode::Mixed,
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!("starting wordgrove: mode={:?} seed={:?}", args.mode, config.seed);
    ui::run(config, args.mode.into())
}
