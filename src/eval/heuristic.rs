//! Placement heuristic and static board evaluation
//!
//! Both functions score from a fixed "me" perspective. The placement
//! heuristic simulates only the immediate boop consequences of a candidate
//! move without committing it; the board evaluation is the leaf score for
//! the minimax search.

use crate::board::{Board, Color, PieceKind, Pos};
use crate::game::Game;
use crate::rules::{aligns_at, NEIGHBOR_OFFSETS};

use super::weights::Score;

/// Center cell used for the positional bonus
const CENTER: (i32, i32) = (2, 2);

/// Score the immediate boop consequences of placing a piece of `kind` at
/// the empty cell `pos`, without mutating the board.
///
/// Each of the 8 neighbors that the placement would push contributes:
/// ejection of an opponent piece, ejection of an own piece, a push landing
/// on a line-completing cell (for either side), or a plain push. Blocked
/// pushes contribute nothing.
pub fn evaluate_placement(board: &Board, pos: Pos, kind: PieceKind, me: Color) -> i32 {
    let mut score = 0;

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let neighbor_pos = match pos.offset(dr, dc) {
            Some(p) => p,
            None => continue,
        };
        let neighbor = match board.get(neighbor_pos) {
            Some(piece) => piece,
            None => continue,
        };
        // Too heavy to push
        if neighbor.kind.weight() > kind.weight() {
            continue;
        }

        let dest = match neighbor_pos.offset(dr, dc) {
            None => {
                score += if neighbor.color == me {
                    Score::BOOP_SELF_OFF
                } else {
                    Score::BOOP_OPPONENT_OFF
                };
                continue;
            }
            Some(dest) => dest,
        };
        // Blocked push, no effect
        if !board.is_empty(dest) {
            continue;
        }

        if aligns_at(board, dest, neighbor.color, neighbor.kind, 3) {
            score += if neighbor.color == me {
                Score::BOOP_SELF_TO_LINE
            } else {
                Score::BOOP_OPPONENT_TO_LINE
            };
        } else {
            score += Score::BOOP_PLAIN;
        }
    }

    score
}

/// Static evaluation of the whole position from `me`'s perspective.
///
/// Sums center proximity and cat presence per piece, the on-board piece
/// count difference, reserve values, and a bonus for every piece sitting in
/// a run of 2+ of its own kind (one step from completing a line). The
/// result is antisymmetric: `evaluate_board(g, me) == -evaluate_board(g,
/// opponent)`.
pub fn evaluate_board(game: &Game, me: Color) -> i32 {
    let opponent = me.opponent();
    let mut score = 0;
    let mut my_pieces = 0i32;
    let mut opp_pieces = 0i32;

    for (pos, piece) in game.board.occupied() {
        let dist = (pos.row as i32 - CENTER.0).abs() + (pos.col as i32 - CENTER.1).abs();
        let mut value = (6 - dist) * Score::CENTER_WEIGHT;
        if piece.kind == PieceKind::Cat {
            value += Score::CAT_PRESENCE;
        }
        if piece.color == me {
            my_pieces += 1;
            score += value;
        } else {
            opp_pieces += 1;
            score -= value;
        }
    }

    score += (my_pieces - opp_pieces) * Score::PIECE_DIFF;

    score += game.player(me).kittens as i32 * Score::KITTEN_RESERVE;
    score += game.player(me).cats as i32 * Score::CAT_RESERVE;
    score -= game.player(opponent).kittens as i32 * Score::KITTEN_RESERVE;
    score -= game.player(opponent).cats as i32 * Score::CAT_RESERVE;

    for (pos, piece) in game.board.occupied() {
        if aligns_at(&game.board, pos, piece.color, piece.kind, 2) {
            score += if piece.color == me {
                Score::PAIR_ALIGNMENT
            } else {
                -Score::PAIR_ALIGNMENT
            };
        }
    }

    score
}
