use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::{grid::Grid, state::Cell};

/// Random probes per grid cell before falling back to a full scan
const SAMPLES_PER_CELL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell left for the apple on a board of {cells} cells")]
    BoardFull { cells: usize },
}

/// The apple the snake is chasing
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    grid: Grid,
    position: Cell,
}

impl Apple {
    /// Place a new apple on a random cell outside `occupied`
    pub fn new<R: Rng + ?Sized>(
        grid: Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        let mut apple = Self::at(grid, Cell::new(0, 0));
        apple.relocate(occupied, rng)?;
        Ok(apple)
    }

    /// An apple at a fixed cell
    pub fn at(grid: Grid, position: Cell) -> Self {
        Self { grid, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to a uniformly random cell outside `occupied`
    ///
    /// Rejection sampling is tried first and capped at a few probes per cell.
    /// If every probe lands on the snake the free cells are listed and one is
    /// picked from those, so a nearly full board still terminates. On a full
    /// board the apple stays where it was and [`PlacementError::BoardFull`] is
    /// returned.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Cell, PlacementError> {
        let attempts = self.grid.area().saturating_mul(SAMPLES_PER_CELL);

        for _ in 0..attempts {
            let cell = self.grid.random_cell(rng);
            if !occupied.contains(&cell) {
                self.position = cell;
                return Ok(cell);
            }
        }

        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        let cell = *free.choose(rng).ok_or(PlacementError::BoardFull {
            cells: self.grid.area(),
        })?;
        self.position = cell;
        Ok(cell)
    }
}
