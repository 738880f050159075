pub mod config;
pub mod constants;
pub mod enumerate;
pub mod error;
pub mod layout;
pub mod moves;
pub mod piece;

pub use config::Config;
pub use constants::{
    DEFAULT_KEYPAD_ROWS, DEFAULT_MAX_VOWELS, DEFAULT_PIECE, DEFAULT_SENTINEL,
    DEFAULT_SEQUENCE_LENGTH, DEFAULT_VOWELS,
};
pub use enumerate::{SearchOptions, SequenceCollection, enumerate_sequences, total_count};
pub use error::KeySeqError;
pub use layout::{KeyPos, KeypadLayout, Offset};
pub use moves::MoveTable;
pub use piece::{MovePolicy, PieceName};
