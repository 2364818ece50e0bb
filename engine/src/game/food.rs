use super::rng::GameRng;
use super::snake::Snake;
use super::types::{BoardSize, Point};

/// Draws uniformly random cells until one is free of the snake.
///
/// Terminates whenever the snake leaves at least one free cell. The snake
/// filling the entire board is out of scope: boards are large relative to
/// any reachable snake length.
pub fn place_food(rng: &mut GameRng, snake: &Snake, board: BoardSize) -> Point {
    loop {
        let candidate = rng.random_point(board);
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_never_lands_on_snake() {
        let mut rng = GameRng::new(42);
        let board = BoardSize::new(20, 20);
        let mut snake = Snake::new(Point::new(10, 10));
        snake.grow(Point::new(10, 9));
        snake.grow(Point::new(10, 8));

        for _ in 0..500 {
            let food = place_food(&mut rng, &snake, board);
            assert!(!snake.occupies(food));
            assert!(board.contains(food));
        }
    }

    #[test]
    fn test_terminates_with_one_free_cell() {
        let mut rng = GameRng::new(7);
        let board = BoardSize::new(2, 2);
        let mut snake = Snake::new(Point::new(0, 0));
        snake.grow(Point::new(1, 0));
        snake.grow(Point::new(1, 1));

        let food = place_food(&mut rng, &snake, board);
        assert_eq!(food, Point::new(0, 1));
    }
}
