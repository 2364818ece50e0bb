mod collision;
mod food;
mod rng;
mod settings;
mod snake;
mod state;
mod types;

pub use collision::detect_collision;
pub use food::place_food;
pub use rng::GameRng;
pub use settings::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_INTERVAL, FOOD_SCORE, GameSettings,
};
pub use snake::Snake;
pub use state::{GameState, TickOutcome};
pub use types::{Axis, BoardSize, Direction, GameOverCause, PlayState, Point};
