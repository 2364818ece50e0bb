use std::collections::HashSet;
use std::io::{Write, stdout};
use std::sync::{Arc, Mutex};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use engine::log;
use engine::{GameEvent, GameObserver, GameOverCause, GameSnapshot, PlayState, Point};

pub fn setup_terminal() -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), Hide, Clear(ClearType::All))
}

pub fn restore_terminal() -> std::io::Result<()> {
    execute!(stdout(), Show, MoveTo(0, 0), Clear(ClearType::All))?;
    terminal::disable_raw_mode()
}

/// Terminal presentation collaborator: redraws the whole board from each
/// snapshot and keeps the most recent event as a one-line message.
#[derive(Clone)]
pub struct TerminalView {
    last_message: Arc<Mutex<Option<String>>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            last_message: Arc::new(Mutex::new(None)),
        }
    }

    fn draw(&self, snapshot: &GameSnapshot) -> std::io::Result<()> {
        let mut out = stdout();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        let width = snapshot.board.width as usize;
        let head = snapshot.snake[0];
        let body: HashSet<Point> = snapshot.snake.iter().skip(1).copied().collect();

        let border: String = "#".repeat(width + 2);
        queue!(out, MoveTo(0, 0), Print(&border))?;

        for y in 0..snapshot.board.height {
            let mut row = String::with_capacity(width + 2);
            row.push('#');
            for x in 0..snapshot.board.width {
                let cell = Point::new(x, y);
                if cell == head {
                    row.push('@');
                } else if body.contains(&cell) {
                    row.push('o');
                } else if cell == snapshot.food {
                    row.push('*');
                } else {
                    row.push(' ');
                }
            }
            row.push('#');
            queue!(out, MoveTo(0, (y + 1) as u16), Print(&row))?;
        }

        let mut line = snapshot.board.height as u16 + 1;
        queue!(out, MoveTo(0, line), Print(&border))?;

        line += 1;
        queue!(
            out,
            MoveTo(0, line),
            Print(format!(
                "Score: {}   High score: {}",
                snapshot.score, snapshot.high_score
            ))
        )?;

        line += 1;
        let status = match snapshot.play_state {
            PlayState::Idle => "Press S to start",
            PlayState::Playing => "Arrows to steer, space to pause, Q to quit",
            PlayState::Paused => "Paused. Space to resume",
            PlayState::GameOver => "Game over! S to restart, R to reset, Q to quit",
        };
        queue!(out, MoveTo(0, line), Print(status))?;

        if snapshot.game_over {
            line += 1;
            queue!(
                out,
                MoveTo(0, line),
                Print(format!("Final score: {}", snapshot.score))
            )?;
            if snapshot.is_new_high_score() {
                line += 1;
                queue!(out, MoveTo(0, line), Print("NEW HIGH SCORE!"))?;
            }
        }

        if let Some(ref message) = *self.last_message.lock().unwrap() {
            line += 1;
            queue!(out, MoveTo(0, line), Print(message))?;
        }

        out.flush()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for TerminalView {
    async fn state_changed(&self, snapshot: GameSnapshot) {
        if let Err(e) = self.draw(&snapshot) {
            log!("Failed to draw frame: {}", e);
        }
    }

    async fn notify(&self, event: GameEvent) {
        let message = match event {
            GameEvent::FoodEaten { score } => format!("Yummy! Score: {}", score),
            GameEvent::GameOver {
                cause: GameOverCause::WallCollision,
                final_score,
            } => format!("You hit the wall! Final score: {}", final_score),
            GameEvent::GameOver {
                cause: GameOverCause::SelfCollision,
                final_score,
            } => format!("You hit yourself! Final score: {}", final_score),
            GameEvent::NewHighScore { score } => {
                format!("Congratulations! New high score: {} points!", score)
            }
        };
        *self.last_message.lock().unwrap() = Some(message);
    }
}
