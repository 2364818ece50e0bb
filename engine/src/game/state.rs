use crate::events::GameSnapshot;

use super::collision::detect_collision;
use super::food::place_food;
use super::rng::GameRng;
use super::settings::{FOOD_SCORE, GameSettings};
use super::snake::Snake;
use super::types::{BoardSize, Direction, GameOverCause, PlayState, Point};

const INITIAL_DIRECTION: Direction = Direction::Up;

/// What a single tick did, so the session loop can notify observers and
/// report terminal scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while not in the Playing state.
    Skipped,
    Moved,
    AteFood { score: u32 },
    GameOver { cause: GameOverCause, final_score: u32 },
}

/// The single aggregate of the game. All mutation goes through
/// `tick`/`start`/`pause`/`toggle_pause`/`reset`/`set_direction`.
pub struct GameState {
    snake: Snake,
    food: Point,
    direction: Direction,
    board: BoardSize,
    score: u32,
    play_state: PlayState,
    game_over_cause: Option<GameOverCause>,
}

impl GameState {
    pub fn new(settings: &GameSettings, rng: &mut GameRng) -> Self {
        let snake = Snake::new(settings.board.center());
        let food = place_food(rng, &snake, settings.board);
        Self {
            snake,
            food,
            direction: INITIAL_DIRECTION,
            board: settings.board,
            score: 0,
            play_state: PlayState::Idle,
            game_over_cause: None,
        }
    }

    /// Back to Idle with a fresh single-cell snake at the board center,
    /// the initial direction, score 0 and freshly placed food.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.snake = Snake::new(self.board.center());
        self.food = place_food(rng, &self.snake, self.board);
        self.direction = INITIAL_DIRECTION;
        self.score = 0;
        self.play_state = PlayState::Idle;
        self.game_over_cause = None;
    }

    /// Idle/Paused -> Playing. From GameOver an implicit reset runs first.
    /// Returns whether the state changed.
    pub fn start(&mut self, rng: &mut GameRng) -> bool {
        match self.play_state {
            PlayState::Playing => false,
            PlayState::GameOver => {
                self.reset(rng);
                self.play_state = PlayState::Playing;
                true
            }
            PlayState::Idle | PlayState::Paused => {
                self.play_state = PlayState::Playing;
                true
            }
        }
    }

    /// Playing -> Paused; no-op otherwise.
    pub fn pause(&mut self) -> bool {
        if self.play_state == PlayState::Playing {
            self.play_state = PlayState::Paused;
            true
        } else {
            false
        }
    }

    /// Flips between running and not running; ignored while GameOver.
    pub fn toggle_pause(&mut self) -> bool {
        match self.play_state {
            PlayState::GameOver => false,
            PlayState::Playing => {
                self.play_state = PlayState::Paused;
                true
            }
            PlayState::Idle | PlayState::Paused => {
                self.play_state = PlayState::Playing;
                true
            }
        }
    }

    /// Applies a direction intent. An intent on the same axis as the
    /// current direction (a reversal or a repeat) is silently ignored, as
    /// is any intent while GameOver. Returns whether the direction changed.
    pub fn set_direction(&mut self, intent: Direction) -> bool {
        if self.play_state == PlayState::GameOver {
            return false;
        }
        if intent.axis() == self.direction.axis() {
            return false;
        }
        self.direction = intent;
        true
    }

    /// Advances the snake by one cell. Only has effect while Playing.
    pub fn tick(&mut self, rng: &mut GameRng) -> TickOutcome {
        if self.play_state != PlayState::Playing {
            return TickOutcome::Skipped;
        }

        let candidate = self.snake.head().step(self.direction);

        if let Some(cause) = detect_collision(candidate, &self.snake, self.board) {
            self.play_state = PlayState::GameOver;
            self.game_over_cause = Some(cause);
            return TickOutcome::GameOver {
                cause,
                final_score: self.score,
            };
        }

        if candidate == self.food {
            self.snake.grow(candidate);
            self.score += FOOD_SCORE;
            self.food = place_food(rng, &self.snake, self.board);
            TickOutcome::AteFood { score: self.score }
        } else {
            self.snake.advance(candidate);
            TickOutcome::Moved
        }
    }

    pub fn snapshot(&self, high_score: u32) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.segments().collect(),
            food: self.food,
            direction: self.direction,
            board: self.board,
            play_state: self.play_state,
            game_over: self.play_state == PlayState::GameOver,
            game_over_cause: self.game_over_cause,
            score: self.score,
            high_score,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over_cause
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn set_snake_for_test(&mut self, cells: &[Point]) {
        let mut snake = Snake::new(cells[cells.len() - 1]);
        for cell in cells.iter().rev().skip(1) {
            snake.grow(*cell);
        }
        self.snake = snake;
    }

    pub(crate) fn set_food_for_test(&mut self, food: Point) {
        self.food = food;
    }

    pub(crate) fn set_direction_for_test(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
