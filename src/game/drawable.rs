//! What the renderer is allowed to know about game objects

use super::{apple::Apple, state::Cell, state::Snake};

/// Role of a painted cell; the palette turns it into a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    SnakeHead,
    SnakeBody,
    Apple,
}

pub trait Drawable {
    /// Cells to paint, in painting order (later entries win)
    fn cells(&self) -> Vec<(Cell, Paint)>;
}

impl Drawable for Apple {
    fn cells(&self) -> Vec<(Cell, Paint)> {
        vec![(self.position(), Paint::Apple)]
    }
}

impl Drawable for Snake {
    fn cells(&self) -> Vec<(Cell, Paint)> {
        // Tail first so the head is painted last
        self.occupied_cells()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, &cell)| {
                let paint = if index == 0 {
                    Paint::SnakeHead
                } else {
                    Paint::SnakeBody
                };
                (cell, paint)
            })
            .collect()
    }
}
