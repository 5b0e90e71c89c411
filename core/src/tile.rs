use serde::{Deserialize, Serialize};

/// A non-empty cell kind, stored as an index into the active palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gem(pub u8);

impl Gem {
    pub const RED: Gem = Gem(0);
    pub const GREEN: Gem = Gem(1);
    pub const BLUE: Gem = Gem(2);
    pub const YELLOW: Gem = Gem(3);
    pub const ORANGE: Gem = Gem(4);

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Content of one board slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Gem(Gem),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn gem(self) -> Option<Gem> {
        match self {
            Self::Empty => None,
            Self::Gem(gem) => Some(gem),
        }
    }

    /// Whether both cells hold the same gem; empty cells never match anything.
    pub fn matches(self, other: Cell) -> bool {
        match (self, other) {
            (Self::Gem(a), Self::Gem(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Gem> for Cell {
    fn from(gem: Gem) -> Self {
        Self::Gem(gem)
    }
}

pub const MIN_PALETTE: u8 = 3;
pub const MAX_PALETTE: u8 = 16;

/// The finite set of gems in play, `Gem(0)..Gem(size)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPalette")]
pub struct Palette {
    size: u8,
}

#[derive(Deserialize)]
struct RawPalette {
    size: u8,
}

impl From<RawPalette> for Palette {
    fn from(raw: RawPalette) -> Self {
        Self::new(raw.size)
    }
}

impl Palette {
    /// Red, green, blue, yellow, orange.
    pub const CLASSIC: Palette = Palette { size: 5 };

    pub fn new(size: u8) -> Self {
        Self {
            size: size.clamp(MIN_PALETTE, MAX_PALETTE),
        }
    }

    pub const fn size(self) -> u8 {
        self.size
    }

    pub fn contains(self, gem: Gem) -> bool {
        gem.0 < self.size
    }

    pub fn gems(self) -> impl Iterator<Item = Gem> {
        (0..self.size).map(Gem)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
