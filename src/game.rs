use crate::{Cell, GridInt};
use crate::snake::{Snake, Direction};
use crate::term::TermManager;

use crossterm::style::Color;
use rand::Rng;

/// Cells per side of the square board.
pub const GRID_SIZE: GridInt = 30;

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;

pub struct Game {
    snake: Snake,
    food: Cell,
    score: u32,
    is_over: bool,
}

impl Game {
    pub fn new() -> Self {
        let snake = Snake::new((GRID_SIZE / 2, GRID_SIZE / 2));
        let food = generate_food(&snake);
        Game { snake, food, score: 0, is_over: false }
    }

    /// One tick of game logic: advance the snake, handle the crash or the
    /// meal. Does nothing once the game is over; only a fresh Game revives it.
    pub fn update(&mut self) {
        if self.is_over {
            return;
        }

        if !self.snake.move_step(GRID_SIZE) {
            self.is_over = true;
            return;
        }

        if self.snake.head() == self.food {
            self.snake.grow();
            self.food = generate_food(&self.snake);
            self.score += 1;
        }
    }

    pub fn change_direction(&mut self, direction: Direction) {
        self.snake.change_direction(direction);
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Renders the full frame through the terminal surface. Read-only with
    /// respect to the game state.
    pub fn draw(&self, term: &mut TermManager) {
        term.clear_frame();
        term.draw_board_frame();

        for cell in self.snake.segments() {
            term.print_cell(*cell, SNAKE_COLOR);
        }
        term.print_cell(self.food, FOOD_COLOR);

        term.print_score(self.score);

        if self.is_over {
            term.print_centered(&[
                "Game over!",
                &*format!("Score: {}", self.score),
                "",
                "Press R to restart,",
                "or Q to quit."
            ]);
        }

        term.flush();
    }
}

// Rejection-samples a free cell. Spins forever if the snake ever occupies
// the entire board; with 900 cells that state is unreachable in practice.
fn generate_food(snake: &Snake) -> Cell {
    let mut rng = rand::thread_rng();

    loop {
        let cell = (rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if !snake.segments().contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(snake: Snake, food: Cell) -> Game {
        Game { snake, food, score: 0, is_over: false }
    }

    #[test]
    fn new_game_starts_centered_and_running() {
        let game = Game::new();
        assert_eq!(game.snake.segments(), &[(15, 15)]);
        assert_eq!(game.score, 0);
        assert!(!game.is_over());
        assert!(!game.snake.segments().contains(&game.food));
    }

    #[test]
    fn eating_scores_and_grows() {
        let mut game = game_with(Snake::new((15, 15)), (16, 15));

        game.update();
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.head(), (16, 15));
        assert!(!game.snake.segments().contains(&game.food));

        // Growth lands on the following move
        assert_eq!(game.snake.segments().len(), 1);
        game.update();
        assert_eq!(game.snake.segments().len(), 2);
    }

    #[test]
    fn missing_the_food_leaves_the_score_alone() {
        let mut game = game_with(Snake::new((15, 15)), (0, 0));
        game.update();
        assert_eq!(game.score, 0);
        assert_eq!(game.snake.segments(), &[(16, 15)]);
    }

    #[test]
    fn wall_crash_ends_the_game() {
        let mut game = game_with(Snake::new((29, 15)), (0, 0));
        game.update();
        assert!(game.is_over());
        assert_eq!(game.snake.segments(), &[(29, 15)]);
    }

    #[test]
    fn update_after_game_over_is_inert() {
        let mut game = game_with(Snake::new((29, 15)), (0, 0));
        game.update();
        assert!(game.is_over());

        game.update();
        game.update();
        assert_eq!(game.snake.segments(), &[(29, 15)]);
        assert_eq!(game.score, 0);
        assert!(game.is_over());
    }

    #[test]
    fn food_never_lands_on_the_snake() {
        // Grow a body across half a row so occupied samples are common
        let mut snake = Snake::new((0, 15));
        for _ in 0..14 {
            snake.grow();
            assert!(snake.move_step(GRID_SIZE));
        }

        for _ in 0..100 {
            let food = generate_food(&snake);
            assert!(!snake.segments().contains(&food));
        }
    }
}
