use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rover::config;
use rover::logging;
use rover::{Direction, Planet, Position, Rover, parse_commands};
use std::error::Error;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command string to send to the rover, e.g. "ffrff" (f = forward, r = turn right)
    commands: String,

    /// Declared planet width
    #[arg(long, default_value_t = config::DEFAULT_PLANET_WIDTH)]
    width: i32,

    /// Declared planet height
    #[arg(long, default_value_t = config::DEFAULT_PLANET_HEIGHT)]
    height: i32,

    /// Obstacle position as X,Y (repeatable)
    #[arg(long = "obstacle", value_name = "X,Y", allow_hyphen_values = true)]
    obstacles: Vec<Position>,

    /// Fraction of cells to fill with random obstacles (0.0 - 1.0)
    #[arg(long)]
    obstacle_density: Option<f64>,

    /// Seed for random obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Starting X coordinate
    #[arg(long, default_value_t = config::DEFAULT_START_X, allow_hyphen_values = true)]
    x: i32,

    /// Starting Y coordinate
    #[arg(long, default_value_t = config::DEFAULT_START_Y, allow_hyphen_values = true)]
    y: i32,

    /// Starting direction (north, east, south, west)
    #[arg(long, default_value_t = Direction::North)]
    direction: Direction,

    /// Debug filter to specify log topics (e.g., "drive,planet")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = config::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn build_planet(args: &Args) -> Result<Planet, Box<dyn Error>> {
    let planet = Planet::with_obstacles(args.width, args.height, args.obstacles.clone())?;
    info!(
        "Planet created with {}x{} bounds and {} fixed obstacles.",
        planet.max_x(),
        planet.max_y(),
        planet.obstacles().len()
    );

    let Some(density) = args.obstacle_density else {
        return Ok(planet);
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(planet.scatter_obstacles(density, &mut rng)?)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let commands = parse_commands(&args.commands)?;
    let planet = build_planet(args)?;
    let rover = Rover::new(Position::new(args.x, args.y), args.direction, planet);

    info!("Rover starting at {} with {} commands.", rover, commands.len());
    let traverse = rover.drive(&commands);

    println!("{}", traverse.rover);
    if let Some(obstacle) = traverse.blocked_by {
        println!(
            "Blocked by obstacle at {} after {} of {} commands",
            obstacle,
            traverse.executed,
            commands.len()
        );
    }
    Ok(())
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logger with debug filters if provided
    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
