mod config;
mod input;
mod render;

use clap::Parser;
use engine::config::FileContentConfigProvider;
use engine::logger;
use engine::{GameRng, GameSession, GameState, HighScoreStore, log};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "snake_game")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("SnakeGame".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(&args.config).get_config()?;
    let settings = config.game_settings();

    let store = HighScoreStore::load(FileContentConfigProvider::new(
        config.high_score_file.clone(),
    ));

    let mut rng = GameRng::from_random();
    let game = GameState::new(&settings, &mut rng);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let view = render::TerminalView::new();

    render::setup_terminal()?;

    let input_handle = tokio::task::spawn_blocking(move || input::run_input_loop(command_tx));

    GameSession::run(game, rng, settings.tick_interval, store, command_rx, view).await;

    render::restore_terminal()?;

    if let Err(e) = input_handle.await? {
        log!("Input loop failed: {}", e);
    }

    Ok(())
}
