pub mod config;
pub mod events;
pub mod game;
pub mod logger;
pub mod score;
pub mod session;

pub use events::{GameEvent, GameObserver, GameSnapshot};
pub use game::{
    BoardSize, Direction, GameOverCause, GameRng, GameSettings, GameState, PlayState, Point,
    Snake, TickOutcome,
};
pub use score::HighScoreStore;
pub use session::{GameCommand, GameSession};
