use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use engine::{Direction, GameCommand};
use tokio::sync::mpsc::UnboundedSender;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Blocking key-reader loop. Returns on Q/Esc or when the session side of
/// the channel is gone; dropping the sender tears the session down.
pub fn run_input_loop(tx: UnboundedSender<GameCommand>) -> std::io::Result<()> {
    loop {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let command = match key.code {
            KeyCode::Up => GameCommand::Turn(Direction::Up),
            KeyCode::Down => GameCommand::Turn(Direction::Down),
            KeyCode::Left => GameCommand::Turn(Direction::Left),
            KeyCode::Right => GameCommand::Turn(Direction::Right),
            KeyCode::Char(' ') => GameCommand::TogglePause,
            KeyCode::Char('s') | KeyCode::Char('S') => GameCommand::Start,
            KeyCode::Char('p') | KeyCode::Char('P') => GameCommand::Pause,
            KeyCode::Char('r') | KeyCode::Char('R') => GameCommand::Reset,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
            _ => continue,
        };

        if tx.send(command).is_err() {
            return Ok(());
        }
    }
}
