use crate::error::{KeySeqError, Result};
use crate::layout::{KeypadLayout, Offset};
use crate::piece::MovePolicy;
use std::collections::HashMap;

/// Legal moves per key symbol, precomputed once so traversal never re-runs
/// the legality predicate.
///
/// The table is keyed by symbol, not by position. When the same symbol
/// occupies several cells the entry of the last-processed cell wins, so a
/// layout that repeats a symbol at positions with different surroundings
/// keeps only one of the legality sets. The enumerator re-validates every
/// destination against the layout, which keeps this a precision limitation
/// rather than an out-of-bounds hazard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveTable {
    moves: HashMap<char, Vec<Offset>>,
}

impl MoveTable {
    /// Evaluates the policy's full move shape at every live cell.
    /// O(rows x cols x |offsets|), runs once per enumeration.
    pub fn build(layout: &KeypadLayout, policy: &dyn MovePolicy) -> Self {
        let shape = policy.offsets();
        let mut moves = HashMap::new();
        for (pos, key) in layout.live_keys() {
            let legal = shape
                .iter()
                .copied()
                .filter(|&off| policy.is_legal(pos, off, layout))
                .collect();
            moves.insert(key, legal);
        }
        Self { moves }
    }

    /// Legal offsets for a key. Unknown symbols (the sentinel included) are
    /// an integration defect between table and layout, reported as an error.
    pub fn moves_for(&self, key: char) -> Result<&[Offset]> {
        self.moves
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(KeySeqError::UnknownKey { key })
    }

    pub fn contains(&self, key: char) -> bool {
        self.moves.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Knight;

    fn reference_layout() -> KeypadLayout {
        let rows = ["ABCDE", "FGHIJ", "KLMNO", "_123_"]
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        KeypadLayout::from_rows('_', &rows).unwrap()
    }

    #[test]
    fn test_build_covers_live_keys_only() {
        let layout = reference_layout();
        let table = MoveTable::build(&layout, &Knight);
        assert_eq!(table.len(), 18);
        assert!(!table.contains('_'));
        for (_, key) in layout.live_keys() {
            assert!(table.contains(key));
        }
    }

    #[test]
    fn test_corner_key_moves() {
        let layout = reference_layout();
        let table = MoveTable::build(&layout, &Knight);
        let mut moves = table.moves_for('A').unwrap().to_vec();
        moves.sort_unstable_by_key(|off| (off.drow, off.dcol));
        assert_eq!(moves, vec![Offset::new(1, 2), Offset::new(2, 1)]);
    }

    #[test]
    fn test_moves_near_dead_keys() {
        let layout = reference_layout();
        let table = MoveTable::build(&layout, &Knight);
        // 'G' could reach (3,0) with (2,-1), but that cell is dead.
        let moves = table.moves_for('G').unwrap();
        assert_eq!(moves.len(), 3);
        assert!(!moves.contains(&Offset::new(2, -1)));
    }

    #[test]
    fn test_moves_for_unknown_key_errors() {
        let layout = reference_layout();
        let table = MoveTable::build(&layout, &Knight);
        assert!(matches!(
            table.moves_for('_'),
            Err(KeySeqError::UnknownKey { key: '_' })
        ));
        assert!(table.moves_for('Z').is_err());
    }

    #[test]
    fn test_build_is_idempotent() {
        let layout = reference_layout();
        let first = MoveTable::build(&layout, &Knight);
        let second = MoveTable::build(&layout, &Knight);
        assert_eq!(first, second);
    }
}
