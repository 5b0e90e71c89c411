use alloc::vec::Vec;

use super::*;

/// Replays a fixed gem sequence, wrapping around at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedCellGenerator {
    script: Vec<Gem>,
    cursor: usize,
    palette: Palette,
}

impl ScriptedCellGenerator {
    pub fn new(script: impl IntoIterator<Item = Gem>) -> Self {
        let script: Vec<Gem> = script.into_iter().collect();
        let widest = script.iter().map(|gem| gem.index().saturating_add(1)).max().unwrap_or(0);
        Self {
            script,
            cursor: 0,
            palette: Palette::new(widest.max(Palette::CLASSIC.size())),
        }
    }

    /// Number of gems handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl CellGenerator for ScriptedCellGenerator {
    fn next_gem(&mut self) -> Gem {
        if self.script.is_empty() {
            return Gem(0);
        }
        let gem = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        gem
    }

    fn palette(&self) -> Palette {
        self.palette
    }
}
