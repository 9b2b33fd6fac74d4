//! Line-of-three detection
//!
//! The scan reports every 3-cell window of same-owner, same-kind pieces:
//! a run of four identical pieces yields two overlapping windows, and both
//! are reported. Consumers (promotion, victory) treat each window as an
//! independent event, so deduplication happens only through cells becoming
//! empty once a window is consumed.

use crate::board::{Board, Color, Piece, PieceKind, Pos};

/// Direction vectors for line scanning (4 axes)
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Three collinear, adjacent board positions
pub type Line = [Pos; 3];

/// Find every 3-window of `color` pieces of `kind`.
///
/// Cells are scanned in row-major order and directions in the
/// [`LINE_DIRECTIONS`] order, so the result order is deterministic; the
/// promotion pass depends on consuming windows in exactly this order.
pub fn find_lines(board: &Board, color: Color, kind: PieceKind) -> Vec<Line> {
    let mut lines = Vec::new();
    let target = Piece::new(color, kind);

    for (pos, piece) in board.occupied() {
        if piece != target {
            continue;
        }
        for &(dr, dc) in &LINE_DIRECTIONS {
            let second = pos.offset(dr, dc);
            let third = pos.offset(dr * 2, dc * 2);
            if let (Some(second), Some(third)) = (second, third) {
                if board.get(second) == Some(target) && board.get(third) == Some(target) {
                    lines.push([pos, second, third]);
                }
            }
        }
    }

    lines
}

/// Check whether any 3-window of `color` pieces of `kind` exists.
/// Early-exit variant of [`find_lines`] for the search's terminal checks.
pub fn has_line(board: &Board, color: Color, kind: PieceKind) -> bool {
    let target = Piece::new(color, kind);

    for (pos, piece) in board.occupied() {
        if piece != target {
            continue;
        }
        for &(dr, dc) in &LINE_DIRECTIONS {
            if let (Some(second), Some(third)) = (pos.offset(dr, dc), pos.offset(dr * 2, dc * 2)) {
                if board.get(second) == Some(target) && board.get(third) == Some(target) {
                    return true;
                }
            }
        }
    }

    false
}

/// Check whether a piece of `color`/`kind` at `pos` would sit in a run of at
/// least `needed` identical pieces along any of the 4 axes.
///
/// Counts both directions from `pos`, which itself counts as one regardless
/// of what currently occupies it, so this works both for pieces already on
/// the board and for hypothetical destinations (the heuristic's
/// would-this-boop-complete-a-line probe).
pub fn aligns_at(board: &Board, pos: Pos, color: Color, kind: PieceKind, needed: u32) -> bool {
    let target = Piece::new(color, kind);

    for &(dr, dc) in &LINE_DIRECTIONS {
        let mut total = 1u32;

        let mut cursor = pos.offset(dr, dc);
        while let Some(p) = cursor {
            if board.get(p) != Some(target) {
                break;
            }
            total += 1;
            cursor = p.offset(dr, dc);
        }

        let mut cursor = pos.offset(-dr, -dc);
        while let Some(p) = cursor {
            if board.get(p) != Some(target) {
                break;
            }
            total += 1;
            cursor = p.offset(-dr, -dc);
        }

        if total >= needed {
            return true;
        }
    }

    false
}
