use crate::constants::{
    DEFAULT_KEYPAD_ROWS, DEFAULT_MAX_VOWELS, DEFAULT_PIECE, DEFAULT_SENTINEL,
    DEFAULT_SEQUENCE_LENGTH, DEFAULT_VOWELS,
};
use crate::enumerate::SearchOptions;
use crate::error::{KeySeqError, Result};
use crate::layout::KeypadLayout;
use crate::piece::PieceName;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use strum::IntoEnumIterator;

/// Run configuration, loaded from a TOML file or defaulted to the
/// reference keypad scenario.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub keypad: KeypadConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeypadConfig {
    /// One string per keypad row; all rows must have equal length.
    pub rows: Vec<String>,
    #[serde(default = "default_sentinel")]
    pub sentinel: char,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Piece whose moves connect keys ("knight", "king", "bishop", "rook").
    pub piece: String,
    pub sequence_length: usize,
    pub max_vowels: usize,
    #[serde(default = "default_vowels")]
    pub vowels: String,
}

fn default_sentinel() -> char {
    DEFAULT_SENTINEL
}

fn default_vowels() -> String {
    DEFAULT_VOWELS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keypad: KeypadConfig {
                rows: DEFAULT_KEYPAD_ROWS.iter().map(|r| r.to_string()).collect(),
                sentinel: DEFAULT_SENTINEL,
            },
            search: SearchConfig {
                piece: DEFAULT_PIECE.to_string(),
                sequence_length: DEFAULT_SEQUENCE_LENGTH,
                max_vowels: DEFAULT_MAX_VOWELS,
                vowels: DEFAULT_VOWELS.to_string(),
            },
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KeySeqError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            KeySeqError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// All configuration checks run here, before any table is built or any
    /// traversal starts.
    pub fn validate(&self) -> Result<()> {
        if self.keypad.rows.is_empty() || self.keypad.rows[0].is_empty() {
            return Err(KeySeqError::Config(
                "Keypad dimensions must be non-zero".to_string(),
            ));
        }

        let cols = self.keypad.rows[0].chars().count();
        for (i, row) in self.keypad.rows.iter().enumerate() {
            let got = row.chars().count();
            if got != cols {
                return Err(KeySeqError::Config(format!(
                    "Keypad rows must have equal length: row {} has {} keys, expected {}",
                    i, got, cols
                )));
            }
        }

        if self
            .keypad
            .rows
            .iter()
            .flat_map(|row| row.chars())
            .all(|key| key == self.keypad.sentinel)
        {
            return Err(KeySeqError::Config(
                "Keypad must contain at least one live key".to_string(),
            ));
        }

        if self.search.sequence_length == 0 {
            return Err(KeySeqError::Config(
                "sequence_length must be at least 1".to_string(),
            ));
        }

        self.piece()?;

        Ok(())
    }

    pub fn piece(&self) -> Result<PieceName> {
        PieceName::from_str(&self.search.piece).map_err(|_| {
            KeySeqError::Config(format!(
                "Unknown piece '{}'. Must be one of: {}",
                self.search.piece,
                PieceName::iter().join(", ")
            ))
        })
    }

    pub fn layout(&self) -> Result<KeypadLayout> {
        KeypadLayout::from_rows(self.keypad.sentinel, &self.keypad.rows)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new(
            self.search.sequence_length,
            self.search.max_vowels,
            &self.search.vowels,
        )
    }
}
