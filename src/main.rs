use botsim::command::{self, Command};
use botsim::config::{self, SimConfig, UI_PANEL_WIDTH, WINDOW_TITLE};
use botsim::game::Game;
use botsim::logging;
use botsim::render::Renderer;
use clap::Parser;
use log::{error, info};
use macroquad::prelude::Conf;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pixels moved per forward step.
    #[arg(long, default_value_t = config::STEP_SIZE)]
    step_size: f64,

    /// Robot body width when facing north.
    #[arg(long, default_value_t = config::ROBOT_WIDTH)]
    robot_width: f64,

    /// Robot body height when facing north.
    #[arg(long, default_value_t = config::ROBOT_HEIGHT)]
    robot_height: f64,

    /// Left edge of the starting box.
    #[arg(long, default_value_t = config::ROBOT_START_X, allow_negative_numbers = true)]
    start_x: f64,

    /// Top edge of the starting box.
    #[arg(long, default_value_t = config::ROBOT_START_Y, allow_negative_numbers = true)]
    start_y: f64,

    /// Arena width in pixels.
    #[arg(long, default_value_t = config::CANVAS_WIDTH)]
    arena_width: f64,

    /// Arena height in pixels.
    #[arg(long, default_value_t = config::CANVAS_HEIGHT)]
    arena_height: f64,

    /// Smallest x1/y1 that still counts as inside the arena.
    #[arg(long, default_value_t = config::LOWER_MARGIN, allow_negative_numbers = true)]
    lower_margin: f64,

    /// Comma-separated commands applied at startup (left, right, forward).
    #[arg(long)]
    script: Option<String>,

    /// Debug filter to specify log topics (e.g., "turn,drive,input")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            start_x: self.start_x,
            start_y: self.start_y,
            robot_width: self.robot_width,
            robot_height: self.robot_height,
            step_size: self.step_size,
            arena_width: self.arena_width,
            arena_height: self.arena_height,
            lower_margin: self.lower_margin,
        }
    }
}

fn window_conf(config: &SimConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.arena_width.ceil() as i32 + UI_PANEL_WIDTH,
        window_height: config.arena_height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging(args: &Args) {
    // RUST_LOG takes over when set, so env_logger filter syntax works
    if std::env::var_os("RUST_LOG").is_some() {
        if let Err(e) = env_logger::try_init() {
            eprintln!("Warning: Failed to initialize logger: {}", e);
        }
        return;
    }

    let level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(level, args.debug_filter.as_deref()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
}

async fn run(mut game: Game) {
    info!("Initializing macroquad rendering system");
    let mut renderer = Renderer::new();
    game.run(&mut renderer).await;
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    info!("Initializing robot simulator...");

    let script: Vec<Command> = match args.script.as_deref().map(command::parse_script) {
        Some(Ok(commands)) => commands,
        Some(Err(e)) => {
            error!("Invalid --script: {}", e);
            process::exit(2);
        }
        None => Vec::new(),
    };

    let sim_config = args.sim_config();
    let game = match Game::new(&sim_config, script) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    macroquad::Window::from_config(window_conf(&sim_config), run(game));
}
