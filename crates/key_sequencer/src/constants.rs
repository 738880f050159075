/// Reference keypad: three letter rows plus a digit row whose outer
/// positions are dead keys.
pub const DEFAULT_KEYPAD_ROWS: [&str; 4] = ["ABCDE", "FGHIJ", "KLMNO", "_123_"];

/// Marker for positions that hold no key.
pub const DEFAULT_SENTINEL: char = '_';

pub const DEFAULT_PIECE: &str = "knight";
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;
pub const DEFAULT_MAX_VOWELS: usize = 2;
pub const DEFAULT_VOWELS: &str = "AEIOU";
