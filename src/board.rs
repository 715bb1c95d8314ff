use std::fmt;
use std::str::FromStr;

use crate::types::{xy_to_idx, GameError, Side};

/// The authoritative game state: two bitboards laid out row-major
/// (idx = x + 8*y). `taken` marks occupied squares; `black` marks the
/// subset owned by Black. Squares outside `taken` carry no meaning in
/// `black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    taken: u64,
    black: u64,
}

#[inline]
fn bit(idx: u8) -> u64 {
    1u64 << idx
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: the four center squares occupied with
    /// the diagonal 2-2 split (d4/e5 White, e4/d5 Black).
    pub fn new() -> Self {
        let taken = bit(27) | bit(28) | bit(35) | bit(36);
        let black = bit(28) | bit(35);
        Self { taken, black }
    }

    /// Bulk load of the full 64-square state, bypassing move application.
    /// Intended for seeding scenario tests, never for normal play.
    pub fn from_grid(cells: [Option<Side>; 64]) -> Self {
        let mut taken = 0u64;
        let mut black = 0u64;
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(side) = cell {
                taken |= bit(idx as u8);
                if *side == Side::Black {
                    black |= bit(idx as u8);
                }
            }
        }
        Self { taken, black }
    }

    #[inline]
    pub(crate) fn disc_at(&self, idx: u8) -> Option<Side> {
        if self.taken & bit(idx) == 0 {
            None
        } else if self.black & bit(idx) != 0 {
            Some(Side::Black)
        } else {
            Some(Side::White)
        }
    }

    #[inline]
    pub(crate) fn place(&mut self, idx: u8, side: Side) {
        self.taken |= bit(idx);
        match side {
            Side::Black => self.black |= bit(idx),
            Side::White => self.black &= !bit(idx),
        }
    }

    /// True iff a disc is present at (x, y).
    #[inline]
    pub fn occupied(&self, x: u8, y: u8) -> Result<bool, GameError> {
        let idx = xy_to_idx(x, y).ok_or(GameError::OutOfRange { x, y })?;
        Ok(self.disc_at(idx).is_some())
    }

    /// True iff (x, y) is occupied and owned by `side`.
    #[inline]
    pub fn owner_at(&self, side: Side, x: u8, y: u8) -> Result<bool, GameError> {
        let idx = xy_to_idx(x, y).ok_or(GameError::OutOfRange { x, y })?;
        Ok(self.disc_at(idx) == Some(side))
    }

    /// Unconditionally marks (x, y) occupied and owned by `side`. Used by
    /// move application and board-construction paths; capture logic never
    /// goes through here directly.
    #[inline]
    pub fn set_disc(&mut self, side: Side, x: u8, y: u8) -> Result<(), GameError> {
        let idx = xy_to_idx(x, y).ok_or(GameError::OutOfRange { x, y })?;
        self.place(idx, side);
        Ok(())
    }

    /// Number of discs owned by `side`.
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black.count_ones(),
            Side::White => (self.taken & !self.black).count_ones(),
        }
    }

    #[inline]
    pub fn filled_count(&self) -> u32 {
        self.taken.count_ones()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8u8 {
            for x in 0..8u8 {
                let c = match self.disc_at(x + 8 * y) {
                    None => '.',
                    Some(Side::Black) => 'B',
                    Some(Side::White) => 'W',
                };
                f.write_fmt(format_args!("{c}"))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses the grid format produced by `Display`: 64 cells of
    /// '.', 'B' or 'W' in row-major order, whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 64];
        let mut n = 0usize;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' => None,
                'B' => Some(Side::Black),
                'W' => Some(Side::White),
                other => return Err(GameError::InvalidCell(other)),
            };
            if n >= 64 {
                return Err(GameError::InvalidGridLen(n + 1));
            }
            cells[n] = cell;
            n += 1;
        }
        if n != 64 {
            return Err(GameError::InvalidGridLen(n));
        }
        Ok(Self::from_grid(cells))
    }
}
