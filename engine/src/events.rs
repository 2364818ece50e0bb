use std::future::Future;

use crate::game::{BoardSize, Direction, GameOverCause, PlayState, Point};

/// Read-only copy of the game state, published to observers on every
/// change. Mutating it has no effect on the game.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub snake: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub board: BoardSize,
    pub play_state: PlayState,
    pub game_over: bool,
    pub game_over_cause: Option<GameOverCause>,
    pub score: u32,
    pub high_score: u32,
}

impl GameSnapshot {
    /// True when the just-finished game set the persisted high score.
    pub fn is_new_high_score(&self) -> bool {
        self.game_over && self.score == self.high_score && self.score > 0
    }
}

/// Ephemeral, fire-and-forget notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { score: u32 },
    GameOver { cause: GameOverCause, final_score: u32 },
    NewHighScore { score: u32 },
}

/// Presentation seam: the session pushes snapshots and events out through
/// this trait and never calls back into any UI machinery.
pub trait GameObserver: Send + Sync + Clone + 'static {
    fn state_changed(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn notify(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}
