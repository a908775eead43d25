use log::{debug, info, warn};
use rand::rngs::StdRng;
use thiserror::Error;

use super::{
    apple::{Apple, PlacementError},
    config::GameConfig,
    direction::Direction,
    grid::{Grid, GridError},
    state::{Cell, Snake},
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The head landed on the apple and the snake will grow
    pub ate_apple: bool,
    /// The head ran into the body and the snake was reset
    pub collided: bool,
    /// The apple had nowhere to go and stayed put
    pub board_full: bool,
}

/// Drives one snake and one apple on a shared grid
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
}

impl GameEngine {
    /// Start a game with a fresh snake and an apple off its body
    pub fn new(config: &GameConfig, mut rng: StdRng) -> Result<Self, EngineError> {
        let grid = config.grid()?;
        let snake = Snake::new(grid, &mut rng);
        let apple = Apple::new(grid, &snake.occupied_set(), &mut rng)?;

        info!(
            "New game on a {}x{} grid, snake at {:?} heading {:?}, apple at {:?}",
            grid.width(),
            grid.height(),
            snake.head(),
            snake.direction(),
            apple.position()
        );

        Ok(Self {
            grid,
            snake,
            apple,
            rng,
        })
    }

    /// Assemble an engine from prepared pieces
    pub fn from_parts(grid: Grid, snake: Snake, apple: Apple, rng: StdRng) -> Self {
        Self {
            grid,
            snake,
            apple,
            rng,
        }
    }

    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Execute one tick: move, then handle collision, then the apple
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.snake.advance();

        if self.snake.has_self_collided() {
            info!(
                "Snake of length {} ran into itself at {:?}",
                self.snake.len(),
                self.snake.head()
            );
            outcome.collided = true;
            self.snake.reset(&mut self.rng);
            outcome.board_full |= !self.relocate_apple();
        }

        if self.snake.head() == self.apple.position() {
            outcome.ate_apple = true;
            self.snake.grow();
            debug!(
                "Apple eaten at {:?}, target length now {}",
                self.snake.head(),
                self.snake.target_length()
            );
            outcome.board_full |= !self.relocate_apple();
        }

        outcome
    }

    /// Start over without a collision
    pub fn restart(&mut self) -> TickOutcome {
        info!("Restarting at length {}", self.snake.len());
        self.snake.reset(&mut self.rng);

        TickOutcome {
            board_full: !self.relocate_apple(),
            ..Default::default()
        }
    }

    /// Returns false if the board had no room for the apple
    fn relocate_apple(&mut self) -> bool {
        match self.apple.relocate(&self.snake.occupied_set(), &mut self.rng) {
            Ok(cell) => {
                debug!("Apple placed at {:?}", cell);
                true
            }
            Err(err) => {
                warn!("{err}; apple stays at {:?}", self.apple.position());
                false
            }
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }
}
