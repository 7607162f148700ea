mod colors;
mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SnakeGame, SnakeSettings};
use snake_common::{log, logger};
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use offline::spawn_snake_session;
use state::SharedState;
use ui::{SIDE_PANEL_WIDTH, SnakeApp};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// YAML config file, created with defaults when missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for candy and start positions. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the board size from the config file.
    #[arg(long)]
    board_size: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = match config_manager.get_or_create_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config from {}, using defaults: {}", args.config, e);
            Config::default()
        }
    };
    if let Some(board_size) = args.board_size {
        config.game.board_size = board_size;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = SnakeGame::new(SnakeSettings::from(&config.game), rng)?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let session_thread = spawn_snake_session(game, command_rx, shared_state.clone());
    let command_sender = CommandSender::new(command_tx);

    let board_side = (config.display.pixel_size * config.game.board_size) as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_side + SIDE_PANEL_WIDTH + 60.0, board_side + 140.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_sender,
                config_manager,
                config,
            )))
        }),
    )?;

    if session_thread.join().is_err() {
        log!("Game session thread panicked");
    }

    Ok(())
}
