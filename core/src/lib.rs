#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use matcher::*;
pub use tile::*;
pub use types::*;

pub mod pointer;

mod board;
mod engine;
mod error;
mod generator;
mod matcher;
mod tile;
mod types;

pub const DEFAULT_SIZE: Coord2 = (8, 8);

/// Points awarded for every cell removed by a cascade.
pub const TILE_REWARD: Score = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub size: Coord2,
    pub palette: Palette,
    pub tile_reward: Score,
    pub seed: u64,
}

impl EngineConfig {
    pub const fn new_unchecked(size: Coord2, palette: Palette, seed: u64) -> Self {
        Self {
            size,
            palette,
            tile_reward: TILE_REWARD,
            seed,
        }
    }

    pub fn new((rows, cols): Coord2, palette_size: u8, seed: u64) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        Self::new_unchecked((rows, cols), Palette::new(palette_size), seed)
    }

    /// 8x8 board with five gems.
    pub const fn classic(seed: u64) -> Self {
        Self::new_unchecked(DEFAULT_SIZE, Palette::CLASSIC, seed)
    }

    pub const fn with_tile_reward(mut self, tile_reward: Score) -> Self {
        self.tile_reward = tile_reward;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// `size` with each dimension raised to at least one cell.
    pub fn board_size(&self) -> Coord2 {
        (self.size.0.max(1), self.size.1.max(1))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic(0)
    }
}

/// Totals for one whole cascade, summed over every pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub passes: u32,
    pub cleared: u32,
    pub points: Score,
}

impl CascadeReport {
    pub const fn has_update(&self) -> bool {
        self.passes > 0
    }

    fn record_pass(&mut self, cleared: CellCount, points: Score) {
        self.passes = self.passes.saturating_add(1);
        self.cleared = self.cleared.saturating_add(u32::from(cleared));
        self.points = self.points.saturating_add(points);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The positions were not neighbours; nothing changed.
    Rejected,
    /// The swap was applied and the following cascade ran to completion.
    Committed(CascadeReport),
}

impl SwapOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub const fn report(self) -> Option<CascadeReport> {
        match self {
            Self::Rejected => None,
            Self::Committed(report) => Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_degenerate_sizes() {
        let config = EngineConfig::new((0, 12), 1, 9);

        assert_eq!(config.size, (1, 12));
        assert_eq!(config.palette.size(), MIN_PALETTE);
        assert_eq!(config.tile_reward, TILE_REWARD);
        assert_eq!(config.total_cells(), 12);
        assert_eq!(config.board_size(), (1, 12));
        assert_eq!(
            EngineConfig::new_unchecked((0, 0), Palette::CLASSIC, 0).board_size(),
            (1, 1)
        );
    }

    #[test]
    fn default_config_is_classic() {
        let config = EngineConfig::default();

        assert_eq!(config.size, (8, 8));
        assert_eq!(config.palette, Palette::CLASSIC);
        assert_eq!(config.with_tile_reward(25).tile_reward, 25);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig::new((6, 9), 4, 1234).with_tile_reward(5);

        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), config);
    }

    #[test]
    fn swap_outcome_reports_acceptance() {
        let report = CascadeReport {
            passes: 1,
            cleared: 3,
            points: 30,
        };

        assert!(!SwapOutcome::Rejected.is_accepted());
        assert_eq!(SwapOutcome::Rejected.report(), None);
        assert!(SwapOutcome::Committed(report).is_accepted());
        assert_eq!(SwapOutcome::Committed(report).report(), Some(report));
        assert!(!CascadeReport::default().has_update());
    }
}
