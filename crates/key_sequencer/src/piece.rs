use crate::layout::{KeyPos, KeypadLayout, Offset};
use strum_macros::{Display, EnumIter, EnumString};

/// Selectable piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PieceName {
    Knight,
    King,
    Bishop,
    Rook,
}

impl PieceName {
    /// Constructs the movement policy for this piece. Ray pieces take the
    /// grid extent so their offset sets cover every reachable distance.
    pub fn policy(self, layout: &KeypadLayout) -> Box<dyn MovePolicy> {
        match self {
            PieceName::Knight => Box::new(Knight),
            PieceName::King => Box::new(King),
            PieceName::Bishop => Box::new(Bishop::spanning(layout)),
            PieceName::Rook => Box::new(Rook::spanning(layout)),
        }
    }
}

/// Movement capability of a single piece.
///
/// `offsets` is the full translation-invariant move shape; `is_legal`
/// decides whether one of those offsets, taken from a concrete position,
/// lands on a live in-bounds key.
pub trait MovePolicy {
    fn offsets(&self) -> Vec<Offset>;
    fn is_legal(&self, from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool;
}

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
    Offset::new(1, -2),
    Offset::new(1, 2),
    Offset::new(2, -1),
    Offset::new(2, 1),
];

pub struct Knight;

impl MovePolicy for Knight {
    fn offsets(&self) -> Vec<Offset> {
        KNIGHT_OFFSETS.to_vec()
    }

    fn is_legal(&self, from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
        let (ar, ac) = (off.drow.abs(), off.dcol.abs());
        let l_shaped = (ar == 1 && ac == 2) || (ar == 2 && ac == 1);
        l_shaped && destination_is_live(from, off, layout)
    }
}

pub struct King;

impl MovePolicy for King {
    fn offsets(&self) -> Vec<Offset> {
        let mut offs = Vec::with_capacity(8);
        for drow in -1..=1 {
            for dcol in -1..=1 {
                if (drow, dcol) != (0, 0) {
                    offs.push(Offset::new(drow, dcol));
                }
            }
        }
        offs
    }

    fn is_legal(&self, from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
        let (ar, ac) = (off.drow.abs(), off.dcol.abs());
        let adjacent = ar <= 1 && ac <= 1 && (ar, ac) != (0, 0);
        adjacent && destination_is_live(from, off, layout)
    }
}

/// Diagonal rays, blocked by dead keys and the grid edge.
pub struct Bishop {
    max_range: i32,
}

impl Bishop {
    pub fn spanning(layout: &KeypadLayout) -> Self {
        Self {
            max_range: max_range(layout),
        }
    }
}

impl MovePolicy for Bishop {
    fn offsets(&self) -> Vec<Offset> {
        let mut offs = Vec::new();
        for dist in 1..=self.max_range {
            for (sr, sc) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
                offs.push(Offset::new(sr * dist, sc * dist));
            }
        }
        offs
    }

    fn is_legal(&self, from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
        let (ar, ac) = (off.drow.abs(), off.dcol.abs());
        ar == ac && ar >= 1 && ray_is_clear(from, off, layout)
    }
}

/// Orthogonal rays, blocked by dead keys and the grid edge.
pub struct Rook {
    max_range: i32,
}

impl Rook {
    pub fn spanning(layout: &KeypadLayout) -> Self {
        Self {
            max_range: max_range(layout),
        }
    }
}

impl MovePolicy for Rook {
    fn offsets(&self) -> Vec<Offset> {
        let mut offs = Vec::new();
        for dist in 1..=self.max_range {
            for (sr, sc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                offs.push(Offset::new(sr * dist, sc * dist));
            }
        }
        offs
    }

    fn is_legal(&self, from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
        let (ar, ac) = (off.drow.abs(), off.dcol.abs());
        ((ar == 0) != (ac == 0)) && ray_is_clear(from, off, layout)
    }
}

fn max_range(layout: &KeypadLayout) -> i32 {
    layout.rows().max(layout.cols()).saturating_sub(1) as i32
}

fn destination_is_live(from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
    from.offset_by(off, layout.rows(), layout.cols())
        .is_some_and(|dest| layout.is_live(dest))
}

/// Walks the ray one step at a time; every visited key, destination
/// included, must be live.
fn ray_is_clear(from: KeyPos, off: Offset, layout: &KeypadLayout) -> bool {
    let steps = off.drow.abs().max(off.dcol.abs());
    let unit = Offset::new(off.drow.signum(), off.dcol.signum());
    (1..=steps).all(|k| {
        let step = Offset::new(unit.drow * k, unit.dcol * k);
        destination_is_live(from, step, layout)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn layout(rows: &[&str]) -> KeypadLayout {
        let rows = rows.iter().map(|r| r.to_string()).collect::<Vec<_>>();
        KeypadLayout::from_rows('_', &rows).unwrap()
    }

    fn reference_layout() -> KeypadLayout {
        layout(&["ABCDE", "FGHIJ", "KLMNO", "_123_"])
    }

    #[test]
    fn test_piece_name_parsing() {
        assert_eq!(PieceName::from_str("knight").unwrap(), PieceName::Knight);
        assert_eq!(PieceName::from_str("rook").unwrap(), PieceName::Rook);
        assert!(PieceName::from_str("pawn").is_err());
    }

    #[test]
    fn test_knight_offsets_are_l_shaped() {
        let offs = Knight.offsets();
        assert_eq!(offs.len(), 8);
        for off in offs {
            let (ar, ac) = (off.drow.abs(), off.dcol.abs());
            assert!((ar == 1 && ac == 2) || (ar == 2 && ac == 1));
        }
    }

    #[test]
    fn test_knight_move_rejected_on_sentinel() {
        let layout = reference_layout();
        // From 'G' at (1,1): (2,-1) lands on the dead key at (3,0).
        assert!(!Knight.is_legal(KeyPos::new(1, 1), Offset::new(2, -1), &layout));
        // (2,1) lands on '2' at (3,2).
        assert!(Knight.is_legal(KeyPos::new(1, 1), Offset::new(2, 1), &layout));
    }

    #[test]
    fn test_knight_move_rejected_off_board() {
        let layout = reference_layout();
        assert!(!Knight.is_legal(KeyPos::new(0, 0), Offset::new(-2, 1), &layout));
        assert!(Knight.is_legal(KeyPos::new(0, 0), Offset::new(1, 2), &layout));
    }

    #[test]
    fn test_knight_rejects_non_l_offset() {
        let layout = reference_layout();
        assert!(!Knight.is_legal(KeyPos::new(0, 0), Offset::new(1, 1), &layout));
    }

    #[test]
    fn test_king_moves_to_adjacent_keys() {
        let layout = layout(&["AB", "CD"]);
        assert_eq!(King.offsets().len(), 8);
        assert!(King.is_legal(KeyPos::new(0, 0), Offset::new(1, 1), &layout));
        assert!(!King.is_legal(KeyPos::new(0, 0), Offset::new(0, 0), &layout));
        assert!(!King.is_legal(KeyPos::new(0, 0), Offset::new(0, 2), &layout));
    }

    #[test]
    fn test_rook_blocked_by_dead_key() {
        let blocked = layout(&["A_B"]);
        assert!(!Rook::spanning(&blocked).is_legal(
            KeyPos::new(0, 0),
            Offset::new(0, 2),
            &blocked
        ));

        let open = layout(&["ACB"]);
        assert!(Rook::spanning(&open).is_legal(KeyPos::new(0, 0), Offset::new(0, 2), &open));
    }

    #[test]
    fn test_rook_rejects_diagonal_offset() {
        let l = layout(&["AB", "CD"]);
        assert!(!Rook::spanning(&l).is_legal(KeyPos::new(0, 0), Offset::new(1, 1), &l));
    }

    #[test]
    fn test_bishop_walks_diagonals_only() {
        let l = layout(&["AXC", "XBX", "DXE"]);
        let bishop = Bishop::spanning(&l);
        assert!(bishop.is_legal(KeyPos::new(0, 0), Offset::new(1, 1), &l));
        assert!(bishop.is_legal(KeyPos::new(0, 0), Offset::new(2, 2), &l));
        assert!(!bishop.is_legal(KeyPos::new(0, 0), Offset::new(0, 2), &l));
    }

    #[test]
    fn test_bishop_blocked_by_dead_key() {
        let l = layout(&["A_C", "___", "__E"]);
        let bishop = Bishop::spanning(&l);
        // (1,1) is dead, so the long diagonal to (2,2) is blocked.
        assert!(!bishop.is_legal(KeyPos::new(0, 0), Offset::new(2, 2), &l));
    }
}
