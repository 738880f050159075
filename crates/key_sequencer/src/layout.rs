use crate::error::{KeySeqError, Result};
use itertools::Itertools;

/// Key position (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPos {
    pub row: usize,
    pub col: usize,
}

impl KeyPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a relative move, returning `None` when the destination falls
    /// outside a `rows` x `cols` grid.
    pub fn offset_by(self, off: Offset, rows: usize, cols: usize) -> Option<KeyPos> {
        let row = self.row as i64 + off.drow as i64;
        let col = self.col as i64 + off.dcol as i64;
        if row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols {
            Some(KeyPos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

/// Relative move (row delta, col delta), independent of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub drow: i32,
    pub dcol: i32,
}

impl Offset {
    pub const fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }
}

/// Rectangular arrangement of key symbols. Positions holding the sentinel
/// symbol are dead keys: they cannot start or appear in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    sentinel: char,
    rows: Vec<Vec<char>>,
}

impl KeypadLayout {
    /// Builds a layout, rejecting empty grids, ragged rows, and grids
    /// without a single live key.
    pub fn new(sentinel: char, rows: Vec<Vec<char>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(KeySeqError::Config(
                "Keypad dimensions must be non-zero".to_string(),
            ));
        }
        let cols = rows[0].len();
        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != cols) {
            return Err(KeySeqError::Config(format!(
                "Keypad rows must have equal length: row {} has {} keys, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        if rows.iter().flatten().all(|&key| key == sentinel) {
            return Err(KeySeqError::Config(
                "Keypad must contain at least one live key".to_string(),
            ));
        }
        Ok(Self { sentinel, rows })
    }

    /// Builds a layout from one string per row, as found in config files.
    pub fn from_rows(sentinel: char, rows: &[String]) -> Result<Self> {
        Self::new(sentinel, rows.iter().map(|row| row.chars().collect()).collect())
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Symbol at a position, `None` when out of bounds.
    pub fn at(&self, pos: KeyPos) -> Option<char> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Symbol at a position, `None` when out of bounds or a dead key.
    pub fn live_key(&self, pos: KeyPos) -> Option<char> {
        self.at(pos).filter(|&key| key != self.sentinel)
    }

    pub fn is_live(&self, pos: KeyPos) -> bool {
        self.live_key(pos).is_some()
    }

    /// Iterates all live positions with their symbols, row-major.
    pub fn live_keys(&self) -> impl Iterator<Item = (KeyPos, char)> + '_ {
        (0..self.rows())
            .cartesian_product(0..self.cols())
            .filter_map(|(row, col)| {
                let pos = KeyPos::new(row, col);
                self.live_key(pos).map(|key| (pos, key))
            })
    }

    pub fn live_key_count(&self) -> usize {
        self.live_keys().count()
    }
}
