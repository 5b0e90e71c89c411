use rand::prelude::*;

use super::*;

/// Uniform draw over the palette from a seeded small RNG, so the same seed
/// always replays the same boards and refills.
#[derive(Clone, Debug)]
pub struct RandomCellGenerator {
    rng: SmallRng,
    palette: Palette,
}

impl RandomCellGenerator {
    pub fn new(seed: u64, palette: Palette) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            palette,
        }
    }
}

impl CellGenerator for RandomCellGenerator {
    fn next_gem(&mut self) -> Gem {
        Gem(self.rng.random_range(0..self.palette.size()))
    }

    fn palette(&self) -> Palette {
        self.palette
    }
}
