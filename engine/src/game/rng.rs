use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{BoardSize, Point};

/// Seeded RNG so a game (and every test) can be replayed deterministically.
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_point(&mut self, board: BoardSize) -> Point {
        let x = self.rng.random_range(0..board.width);
        let y = self.rng.random_range(0..board.height);
        Point::new(x, y)
    }
}
