//! Helpers for front ends that drive the engine with a pointer: mapping
//! pixels to cells and pairing a press with a release into a swap request.
//!
//! None of this is engine state; a front end owns its own [`SwapGesture`].

use crate::{Coord, Coord2};

/// Side length of one square cell, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 50;

/// Cell under the pixel `(x, y)`, or `None` when the pixel lies outside the board.
pub fn cell_at_pixel((x, y): (i32, i32), tile_size: u32, size: Coord2) -> Option<Coord2> {
    if tile_size == 0 {
        return None;
    }
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;

    let row = Coord::try_from(y / tile_size).ok()?;
    let col = Coord::try_from(x / tile_size).ok()?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// Press-then-release selection: the press picks the first cell and the
/// release names the cell to swap it with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapGesture {
    pressed: Option<Coord2>,
}

impl SwapGesture {
    pub const fn new() -> Self {
        Self { pressed: None }
    }

    pub const fn pressed(&self) -> Option<Coord2> {
        self.pressed
    }

    /// Starts a gesture at `coords`, replacing any pending one.
    pub fn press(&mut self, coords: Coord2) {
        log::trace!("press {:?}", coords);
        self.pressed = Some(coords);
    }

    /// Completes the gesture, yielding the pair to hand to
    /// [`MatchEngine::attempt_swap`](crate::MatchEngine::attempt_swap).
    pub fn release(&mut self, coords: Coord2) -> Option<(Coord2, Coord2)> {
        let first = self.pressed.take()?;
        log::trace!("release {:?} after press {:?}", coords, first);
        Some((first, coords))
    }

    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}
