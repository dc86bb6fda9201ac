//! # Delve Command-Line Entry Point
//!
//! Generates a single dungeon for a fresh player and prints it.

use clap::Parser;
use delve::{
    CircleBounds, DelveError, DelveResult, DungeonGenerator, GenerationConfig, Player, Position,
};
use log::{error, info};
use rand::Rng;
use std::path::PathBuf;

/// Command line arguments for the dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Procedural room-and-corridor dungeon generator")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map width in tiles
    #[arg(long)]
    width: Option<u32>,

    /// Map height in tiles
    #[arg(long)]
    height: Option<u32>,

    /// Number of rectangular room slots
    #[arg(long)]
    rect_rooms: Option<u32>,

    /// Circular room slots attempted after each rectangular room
    #[arg(long)]
    circ_rooms: Option<u32>,

    /// Minimum rectangular room size
    #[arg(long)]
    room_min_size: Option<u32>,

    /// Maximum rectangular room size
    #[arg(long)]
    room_max_size: Option<u32>,

    /// Minimum circular room radius
    #[arg(long)]
    min_radius: Option<u32>,

    /// Maximum circular room radius
    #[arg(long)]
    max_radius: Option<u32>,

    /// Candidates sampled per room slot
    #[arg(long)]
    attempts: Option<u32>,

    /// How circle centers are bounded (previous-room, radius)
    #[arg(long)]
    circle_bounds: Option<CircleBounds>,

    /// Print the dungeon as JSON instead of a tile dump
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> DelveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Delve v{}", delve::VERSION);

    if let Err(e) = run(&args) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> DelveResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            return Err(DelveError::InvalidConfig(format!(
                "unknown log level '{}'",
                other
            )))
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();

    Ok(())
}

/// Builds the configuration from the optional file and the flag overrides.
fn build_config(args: &Args) -> DelveResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::default(),
    };

    config.seed = match args.seed {
        Some(seed) => seed,
        None if args.config.is_some() => config.seed,
        None => rand::thread_rng().gen(),
    };

    let overrides = [
        (args.width, &mut config.map_width),
        (args.height, &mut config.map_height),
        (args.rect_rooms, &mut config.rect_rooms),
        (args.circ_rooms, &mut config.circ_rooms),
        (args.room_min_size, &mut config.room_min_size),
        (args.room_max_size, &mut config.room_max_size),
        (args.min_radius, &mut config.min_radius),
        (args.max_radius, &mut config.max_radius),
        (args.attempts, &mut config.placement_attempts),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    if let Some(bounds) = args.circle_bounds {
        config.circle_bounds = bounds;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> DelveResult<()> {
    let config = build_config(args)?;
    info!("Generating dungeon with seed: {}", config.seed);

    let mut rng = delve::generation::utils::create_rng(&config);
    let mut player = Player::new("Player".to_string(), Position::origin());

    let dungeon = DungeonGenerator::new().assemble(&config, &mut rng, &mut player)?;

    match dungeon.spawn {
        Some(spawn) => info!("Player placed at {:?}", spawn),
        None => info!("No rooms placed; player left at {:?}", player.position()),
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon)?);
    } else {
        print!("{}", dungeon.map);
    }

    Ok(())
}
