use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places an apple on a uniformly random cell.
    ///
    /// Cells under the snake are not excluded, so an apple can land on the
    /// body and stays there until the head reaches it.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(random_cell(rng, bounds))
    }
}

/// Draws a cell uniformly from the whole board.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
