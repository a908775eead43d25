//! Toroidal grid geometry
//!
//! The board is a fixed rectangle of cells whose opposite edges are
//! adjacent: leaving through the right edge re-enters on the left, and so on.

use rand::Rng;
use thiserror::Error;

use super::{direction::Direction, state::Cell};

/// Reasons a screen/cell-size combination cannot form a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("screen of {width}x{height} pixels holds no cells")]
    Empty { width: u32, height: u32 },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: u32, height: u32 },
    #[error("{axis} extent of {extent} pixels is not a multiple of the {cell_size} pixel cell size")]
    NotDivisible {
        axis: &'static str,
        extent: u32,
        cell_size: u32,
    },
}

/// Wrap a coordinate into `[0, axis_size)`
pub fn wrap(coord: i32, axis_size: i32) -> i32 {
    coord.rem_euclid(axis_size)
}

/// Dimensions of the board, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }

        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(GridError::TooLarge { width, height }),
        }
    }

    /// Derive the grid from a pixel screen and a square cell size
    pub fn from_screen(
        screen_width: u32,
        screen_height: u32,
        cell_size: u32,
    ) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }

        for (axis, extent) in [("horizontal", screen_width), ("vertical", screen_height)] {
            if extent % cell_size != 0 {
                return Err(GridError::NotDivisible {
                    axis,
                    extent,
                    cell_size,
                });
            }
        }

        Self::new(screen_width / cell_size, screen_height / cell_size).map_err(|err| match err {
            GridError::Empty { .. } => GridError::Empty {
                width: screen_width,
                height: screen_height,
            },
            other => other,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Where a fresh snake spawns
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// The neighbour of `cell` in `direction`, wrapped around the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let moved = cell.moved_in_direction(direction);
        Cell::new(wrap(moved.x, self.width), wrap(moved.y, self.height))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn default_grid() -> Grid {
        Grid::from_screen(640, 480, 20).unwrap()
    }

    #[test]
    fn test_from_screen() {
        let grid = default_grid();
        assert_eq!(grid.width(), 32);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.area(), 768);
        assert_eq!(grid.center(), Cell::new(16, 12));
    }

    #[test]
    fn test_invalid_screens() {
        assert_eq!(Grid::from_screen(640, 480, 0), Err(GridError::ZeroCellSize));
        assert_eq!(
            Grid::from_screen(650, 480, 20),
            Err(GridError::NotDivisible {
                axis: "horizontal",
                extent: 650,
                cell_size: 20
            })
        );
        assert_eq!(
            Grid::from_screen(640, 0, 20),
            Err(GridError::Empty {
                width: 640,
                height: 0
            })
        );
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        assert_eq!(
            Grid::from_screen(4_000_000_000, 1, 1),
            Err(GridError::TooLarge {
                width: 4_000_000_000,
                height: 1
            })
        );
        assert_eq!(
            Grid::new(3, u32::MAX),
            Err(GridError::TooLarge {
                width: 3,
                height: u32::MAX
            })
        );
        let widest = Grid::new(i32::MAX as u32, 1).unwrap();
        assert_eq!(widest.width(), i32::MAX);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(32, 32), 0);
        assert_eq!(wrap(-1, 32), 31);
        assert_eq!(wrap(5, 32), 5);
        assert_eq!(wrap(-33, 32), 31);
    }

    #[test]
    fn test_step_wraps_every_edge() {
        let grid = default_grid();
        assert_eq!(grid.step(Cell::new(31, 4), Direction::Right), Cell::new(0, 4));
        assert_eq!(grid.step(Cell::new(0, 4), Direction::Left), Cell::new(31, 4));
        assert_eq!(grid.step(Cell::new(7, 23), Direction::Down), Cell::new(7, 0));
        assert_eq!(grid.step(Cell::new(7, 0), Direction::Up), Cell::new(7, 23));
        assert_eq!(grid.step(Cell::new(7, 7), Direction::Up), Cell::new(7, 6));
    }

    #[test]
    fn test_cells_and_random_cell_stay_in_bounds() {
        let grid = Grid::new(3, 2).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }
}
