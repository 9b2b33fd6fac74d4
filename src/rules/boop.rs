//! Boop propagation
//!
//! Placing a piece pushes each adjacent piece of equal or lesser weight one
//! step further along the same direction. A pushed piece whose destination
//! is off the board is ejected (its owner gets the placement right back);
//! a pushed piece whose destination is occupied stays put. Only the 8
//! neighbors of the placed cell are considered, exactly once — boops do not
//! cascade.

use crate::board::{Board, Piece, PieceKind, Pos};

/// The 8 neighbor offsets in fixed compass order. Evaluation order is part
/// of the engine's observable behavior (search reproducibility), so it is
/// never permuted.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Resolve the boops caused by a piece of `placed` kind just placed at
/// `origin`. Mutates the board (pushed pieces move, ejected pieces are
/// removed) and returns the ejected pieces so the caller can return their
/// placement rights.
pub fn execute_boops(board: &mut Board, origin: Pos, placed: PieceKind) -> Vec<Piece> {
    let mut ejected = Vec::new();

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let neighbor_pos = match origin.offset(dr, dc) {
            Some(pos) => pos,
            None => continue,
        };
        let neighbor = match board.get(neighbor_pos) {
            Some(piece) => piece,
            None => continue,
        };
        // Equal weight still boops: a cat pushes a cat.
        if neighbor.kind.weight() > placed.weight() {
            continue;
        }

        match neighbor_pos.offset(dr, dc) {
            None => {
                // Pushed off the board
                board.remove(neighbor_pos);
                ejected.push(neighbor);
            }
            Some(dest) if board.is_empty(dest) => {
                board.remove(neighbor_pos);
                board.place(dest, neighbor);
            }
            // Destination occupied: the neighbor stays in place
            Some(_) => {}
        }
    }

    ejected
}
