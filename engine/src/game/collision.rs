use super::snake::Snake;
use super::types::{BoardSize, GameOverCause, Point};

/// Checks a candidate head cell against the pre-move snake. The wall check
/// runs first so an out-of-range candidate always reports `WallCollision`.
///
/// The current tail cell is excluded from the self check: whenever the
/// candidate is not food the tail is vacated in the same step, and the
/// candidate can never equal both the tail and the food because food is
/// never placed on the snake. A length-1 snake therefore never collides
/// with itself (its head is also its tail).
pub fn detect_collision(
    candidate: Point,
    snake: &Snake,
    board: BoardSize,
) -> Option<GameOverCause> {
    if !board.contains(candidate) {
        return Some(GameOverCause::WallCollision);
    }

    if snake.occupies(candidate) && candidate != snake.tail() {
        return Some(GameOverCause::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardSize {
        BoardSize::new(20, 20)
    }

    #[test]
    fn test_out_of_range_candidate_is_wall_collision() {
        let snake = Snake::new(Point::new(0, 0));
        assert_eq!(
            detect_collision(Point::new(0, -1), &snake, board()),
            Some(GameOverCause::WallCollision)
        );
        assert_eq!(
            detect_collision(Point::new(20, 0), &snake, board()),
            Some(GameOverCause::WallCollision)
        );
    }

    #[test]
    fn test_wall_check_precedes_self_check() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.grow(Point::new(0, 1));
        // Candidate is both out of range and "on" no body cell; an
        // out-of-range cell must never be reported as a self collision.
        assert_eq!(
            detect_collision(Point::new(-1, 1), &snake, board()),
            Some(GameOverCause::WallCollision)
        );
    }

    #[test]
    fn test_body_candidate_is_self_collision() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.grow(Point::new(5, 4));
        snake.grow(Point::new(6, 4));
        snake.grow(Point::new(6, 5));
        // Candidate hits the segment at (5, 4), which is not the tail.
        assert_eq!(
            detect_collision(Point::new(5, 4), &snake, board()),
            Some(GameOverCause::SelfCollision)
        );
    }

    #[test]
    fn test_current_head_counts_as_body() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.grow(Point::new(5, 4));
        assert_eq!(
            detect_collision(Point::new(5, 4), &snake, board()),
            Some(GameOverCause::SelfCollision)
        );
    }

    #[test]
    fn test_vacated_tail_is_not_a_collision() {
        // Length-2 snake steering into its own tail cell on the same tick
        // the tail is vacated: must survive.
        let mut snake = Snake::new(Point::new(5, 6));
        snake.grow(Point::new(5, 5));
        assert_eq!(detect_collision(Point::new(5, 6), &snake, board()), None);
    }

    #[test]
    fn test_length_one_snake_never_self_collides() {
        let snake = Snake::new(Point::new(5, 5));
        assert_eq!(detect_collision(Point::new(5, 5), &snake, board()), None);
    }

    #[test]
    fn test_free_cell_is_no_collision() {
        let snake = Snake::new(Point::new(5, 5));
        assert_eq!(detect_collision(Point::new(5, 4), &snake, board()), None);
    }
}
