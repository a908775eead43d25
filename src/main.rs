use anyhow::Result;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::logging;
use torus_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON file with board size, speed and colours
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks per second, overrides the config file
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "torus_snake.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup(&cli.log_file, cli.debug)?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    info!("Starting with {:?}", config);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut play_mode = PlayMode::new(&config, rng)?;
    play_mode.run().await?;

    Ok(())
}
