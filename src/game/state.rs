use std::collections::{HashSet, VecDeque};

use rand::Rng;
use thiserror::Error;

use super::{direction::Direction, grid::Grid};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("a snake needs at least one cell")]
    NoCells,
    #[error("cell ({}, {}) lies outside the grid", .0.x, .0.y)]
    OutOfBounds(Cell),
}

/// The snake in the game
///
/// `positions` holds the body with the head at the front. `length` is the
/// target size: it runs ahead of `positions` after [`Snake::grow`] and the
/// next [`Snake::advance`] catches up by keeping the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    positions: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    last: Option<Cell>,
}

impl Snake {
    /// Create a one-cell snake at the centre of the grid, heading somewhere random
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let mut snake = Self {
            grid,
            positions: VecDeque::new(),
            length: 1,
            direction: Direction::Right,
            next_direction: None,
            last: None,
        };
        snake.reset(rng);
        snake
    }

    /// Build a snake from an explicit body, head first
    pub fn from_cells(
        grid: Grid,
        cells: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Result<Self, SnakeError> {
        let positions: VecDeque<Cell> = cells.into_iter().collect();

        if positions.is_empty() {
            return Err(SnakeError::NoCells);
        }
        if let Some(&cell) = positions.iter().find(|&&cell| !grid.contains(cell)) {
            return Err(SnakeError::OutOfBounds(cell));
        }

        Ok(Self {
            grid,
            length: positions.len(),
            positions,
            direction,
            next_direction: None,
            last: None,
        })
    }

    /// Queue a turn for the next move; a reversal is dropped
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    /// Move one cell, keeping the tail if growth is owed
    pub fn advance(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }

        let new_head = self.grid.step(self.head(), self.direction);

        self.last = if self.positions.len() >= self.length {
            self.positions.pop_back()
        } else {
            None
        };

        self.positions.push_front(new_head);
    }

    /// Check if the head overlaps any other segment
    pub fn has_self_collided(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|&cell| cell == head)
    }

    /// Owe one more segment; it appears on the next advance
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single centre cell with a random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(self.grid.center());
        self.direction = Direction::random(rng);
        self.next_direction = None;
        self.last = None;
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        // positions is never empty: every constructor and reset leaves one cell
        self.positions[0]
    }

    /// Body cells, head first
    pub fn occupied_cells(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    pub fn occupied_set(&self) -> HashSet<Cell> {
        self.positions.iter().copied().collect()
    }

    /// The cell the tail left on the last move, if any
    pub fn vacated_cell(&self) -> Option<Cell> {
        self.last
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Get the current number of segments
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }
}
