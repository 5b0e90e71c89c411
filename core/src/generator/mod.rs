use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of fresh gems for board creation and refills.
pub trait CellGenerator {
    fn next_gem(&mut self) -> Gem;

    fn palette(&self) -> Palette;

    fn next_cell(&mut self) -> Cell {
        Cell::Gem(self.next_gem())
    }
}
