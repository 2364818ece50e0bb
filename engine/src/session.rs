use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::config::ConfigContentProvider;
use crate::events::{GameEvent, GameObserver};
use crate::game::{Direction, GameRng, GameState, PlayState, TickOutcome};
use crate::log;
use crate::score::HighScoreStore;

/// User intents, delivered asynchronously relative to ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Pause,
    TogglePause,
    Reset,
    Turn(Direction),
}

pub struct GameSession;

impl GameSession {
    /// Runs the game until the command channel closes.
    ///
    /// A single task owns the state, so ticks never overlap. While Playing
    /// the loop selects between the command channel and the tick interval,
    /// biased toward commands: an intent queued between ticks is applied
    /// before the next tick reads the direction. While not Playing only the
    /// channel is polled, so pause/reset/game-over stop the tick driver at
    /// the current await point and no queued tick fires afterwards.
    pub async fn run<TProvider, TObserver>(
        mut game: GameState,
        mut rng: GameRng,
        tick_interval: Duration,
        store: HighScoreStore<TProvider>,
        mut command_rx: mpsc::UnboundedReceiver<GameCommand>,
        observer: TObserver,
    ) where
        TProvider: ConfigContentProvider + Send,
        TObserver: GameObserver,
    {
        log!(
            "Session started: {}x{} board, {}ms ticks, seed {}, high score {}",
            game.board().width,
            game.board().height,
            tick_interval.as_millis(),
            rng.seed(),
            store.high_score()
        );

        observer.state_changed(game.snapshot(store.high_score())).await;

        let mut ticker = new_ticker(tick_interval);

        loop {
            let command = if game.play_state() == PlayState::Playing {
                tokio::select! {
                    biased;

                    command = command_rx.recv() => {
                        let Some(command) = command else { break };
                        Some(command)
                    }

                    _ = ticker.tick() => {
                        Self::run_tick(&mut game, &mut rng, &store, &observer).await;
                        None
                    }
                }
            } else {
                let Some(command) = command_rx.recv().await else { break };
                Some(command)
            };

            if let Some(command) = command {
                Self::handle_command(
                    command, &mut game, &mut rng, &mut ticker, tick_interval, &store, &observer,
                )
                .await;
            }
        }

        log!("Session ended with score {}", game.score());
    }

    async fn handle_command<TProvider, TObserver>(
        command: GameCommand,
        game: &mut GameState,
        rng: &mut GameRng,
        ticker: &mut Interval,
        tick_interval: Duration,
        store: &HighScoreStore<TProvider>,
        observer: &TObserver,
    ) where
        TProvider: ConfigContentProvider + Send,
        TObserver: GameObserver,
    {
        let was_playing = game.play_state() == PlayState::Playing;

        let changed = match command {
            GameCommand::Start => game.start(rng),
            GameCommand::Pause => game.pause(),
            GameCommand::TogglePause => game.toggle_pause(),
            GameCommand::Reset => {
                game.reset(rng);
                true
            }
            GameCommand::Turn(direction) => game.set_direction(direction),
        };

        // Entering Playing restarts the cadence from a full period and
        // discards anything the old interval had queued.
        if !was_playing && game.play_state() == PlayState::Playing {
            *ticker = new_ticker(tick_interval);
        }

        if changed {
            observer.state_changed(game.snapshot(store.high_score())).await;
        }
    }

    async fn run_tick<TProvider, TObserver>(
        game: &mut GameState,
        rng: &mut GameRng,
        store: &HighScoreStore<TProvider>,
        observer: &TObserver,
    ) where
        TProvider: ConfigContentProvider + Send,
        TObserver: GameObserver,
    {
        match game.tick(rng) {
            TickOutcome::Skipped => return,
            TickOutcome::Moved => {}
            TickOutcome::AteFood { score } => {
                log!("Food eaten at ({}, {}). Score: {}", game.snake().head().x, game.snake().head().y, score);
                observer.notify(GameEvent::FoodEaten { score }).await;
            }
            TickOutcome::GameOver { cause, final_score } => {
                log!("Game over ({:?}) with score {}", cause, final_score);
                observer.notify(GameEvent::GameOver { cause, final_score }).await;
                if store.report_game_end(final_score) {
                    log!("New high score: {}", final_score);
                    observer.notify(GameEvent::NewHighScore { score: final_score }).await;
                }
            }
        }

        observer.state_changed(game.snapshot(store.high_score())).await;
    }
}

fn new_ticker(tick_interval: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
