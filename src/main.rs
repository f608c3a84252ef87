use anyhow::{Context, Result};
use canvas_snake::game::{GameConfig, SnakeColor, SnakeSize, TickRate};
use canvas_snake::modes::HumanMode;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "canvas_snake")]
#[command(version, about = "Snake on a continuous terminal canvas")]
struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick interval preset
    #[arg(long, value_enum)]
    speed: Option<TickRate>,

    /// Snake thickness
    #[arg(long, value_enum)]
    size: Option<SnakeSize>,

    /// Snake color
    #[arg(long, value_enum)]
    color: Option<SnakeColor>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(speed) = self.speed {
            config.tick_rate = speed;
        }
        if let Some(size) = self.size {
            config.snake_size = size;
        }
        if let Some(color) = self.color {
            config.snake_color = color;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// The terminal belongs to the game, so logs only go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    log::info!(
        "Starting with {:?} ticks, {:?} snake, seed {:?}",
        config.tick_rate,
        config.snake_size,
        cli.seed
    );

    let mut human_mode = HumanMode::new(config, cli.seed);
    if let Some(notice) = human_mode.run().await? {
        println!("{}", notice.message());
    }

    Ok(())
}
