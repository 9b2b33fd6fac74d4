//! Zobrist hashing for search node identification
//!
//! A node is identified by the full board occupancy (owner and weight class
//! per cell), both players' reserve counts, and whose turn it is — two
//! positions that differ in any of these never share a table entry.
//!
//! # Example
//!
//! ```
//! use boop::{Color, Game, PieceKind, ZobristTable};
//!
//! let zt = ZobristTable::new();
//! let mut game = Game::new();
//!
//! let before = zt.hash(&game, Color::Orange);
//! game.place_piece(2, 2, PieceKind::Kitten);
//! let after = zt.hash(&game, Color::Gray);
//!
//! assert_ne!(before, after);
//! ```

use crate::board::{Color, PieceKind, TOTAL_CELLS};
use crate::game::Game;

/// Key-table width for reserve counts. Kitten reserves never exceed the
/// starting eight; cat reserves grow by three per promotion and are clamped
/// into the last key.
const RESERVE_KEYS: usize = 16;

/// Zobrist key table.
///
/// Keys are generated with a fixed-seed LCG, so every table instance hashes
/// identically — reproducible searches across runs.
pub struct ZobristTable {
    /// Keys per (cell, owner, weight class)
    pieces: [[[u64; 2]; 2]; TOTAL_CELLS],
    /// Keys per (owner, weight class, clamped reserve count)
    reserves: [[[u64; RESERVE_KEYS]; 2]; 2],
    /// Key XORed in when the first player is to move
    orange_to_move: u64,
}

impl ZobristTable {
    /// Create a table with deterministic pseudo-random keys.
    #[must_use]
    pub fn new() -> Self {
        // Knuth's MMIX LCG with a fixed seed
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            seed
        };

        let mut pieces = [[[0u64; 2]; 2]; TOTAL_CELLS];
        for cell in pieces.iter_mut() {
            for owner in cell.iter_mut() {
                for key in owner.iter_mut() {
                    *key = next_rand();
                }
            }
        }

        let mut reserves = [[[0u64; RESERVE_KEYS]; 2]; 2];
        for owner in reserves.iter_mut() {
            for kind in owner.iter_mut() {
                for key in kind.iter_mut() {
                    *key = next_rand();
                }
            }
        }

        Self {
            pieces,
            reserves,
            orange_to_move: next_rand(),
        }
    }

    /// Hash the full game state for the given side to move.
    ///
    /// The search recomputes this per node; a full scan of 36 cells is
    /// cheap, and the boop resolution moves too many cells for incremental
    /// updates to pay off.
    #[must_use]
    pub fn hash(&self, game: &Game, to_move: Color) -> u64 {
        let mut h = 0u64;

        for (pos, piece) in game.board.occupied() {
            h ^= self.pieces[pos.to_index()][piece.color.index()][piece.kind.index()];
        }

        for color in [Color::Orange, Color::Gray] {
            let player = game.player(color);
            h ^= self.reserves[color.index()][PieceKind::Kitten.index()]
                [(player.kittens as usize).min(RESERVE_KEYS - 1)];
            h ^= self.reserves[color.index()][PieceKind::Cat.index()]
                [(player.cats as usize).min(RESERVE_KEYS - 1)];
        }

        if to_move == Color::Orange {
            h ^= self.orange_to_move;
        }

        h
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};

    #[test]
    fn test_deterministic_across_instances() {
        let zt1 = ZobristTable::new();
        let zt2 = ZobristTable::new();
        let game = Game::new();

        assert_eq!(
            zt1.hash(&game, Color::Orange),
            zt2.hash(&game, Color::Orange)
        );
    }

    #[test]
    fn test_side_to_move_distinguishes() {
        let zt = ZobristTable::new();
        let game = Game::new();

        assert_ne!(zt.hash(&game, Color::Orange), zt.hash(&game, Color::Gray));
    }

    #[test]
    fn test_kind_distinguishes_same_cell() {
        let zt = ZobristTable::new();
        let pos = Pos::new(2, 2);

        let mut kitten_game = Game::new();
        kitten_game
            .board
            .place(pos, Piece::new(Color::Orange, PieceKind::Kitten));

        let mut cat_game = Game::new();
        cat_game
            .board
            .place(pos, Piece::new(Color::Orange, PieceKind::Cat));

        assert_ne!(
            zt.hash(&kitten_game, Color::Gray),
            zt.hash(&cat_game, Color::Gray)
        );
    }

    #[test]
    fn test_owner_distinguishes_same_cell() {
        let zt = ZobristTable::new();
        let pos = Pos::new(2, 2);

        let mut orange_game = Game::new();
        orange_game
            .board
            .place(pos, Piece::new(Color::Orange, PieceKind::Kitten));

        let mut gray_game = Game::new();
        gray_game
            .board
            .place(pos, Piece::new(Color::Gray, PieceKind::Kitten));

        assert_ne!(
            zt.hash(&orange_game, Color::Gray),
            zt.hash(&gray_game, Color::Gray)
        );
    }

    #[test]
    fn test_reserves_distinguish() {
        let zt = ZobristTable::new();
        let base = Game::new();

        let mut spent = Game::new();
        spent.player_mut(Color::Orange).kittens = 7;

        let mut minted = Game::new();
        minted.player_mut(Color::Orange).cats = 3;

        let h0 = zt.hash(&base, Color::Orange);
        assert_ne!(h0, zt.hash(&spent, Color::Orange));
        assert_ne!(h0, zt.hash(&minted, Color::Orange));
    }

    #[test]
    fn test_path_independent() {
        let zt = ZobristTable::new();

        let mut game1 = Game::new();
        game1
            .board
            .place(Pos::new(1, 1), Piece::new(Color::Orange, PieceKind::Kitten));
        game1
            .board
            .place(Pos::new(4, 4), Piece::new(Color::Gray, PieceKind::Kitten));

        let mut game2 = Game::new();
        game2
            .board
            .place(Pos::new(4, 4), Piece::new(Color::Gray, PieceKind::Kitten));
        game2
            .board
            .place(Pos::new(1, 1), Piece::new(Color::Orange, PieceKind::Kitten));

        assert_eq!(zt.hash(&game1, Color::Orange), zt.hash(&game2, Color::Orange));
    }

    #[test]
    fn test_place_and_remove_roundtrip() {
        let zt = ZobristTable::new();
        let mut game = Game::new();
        let h0 = zt.hash(&game, Color::Orange);

        let pos = Pos::new(3, 3);
        game.board.place(pos, Piece::new(Color::Gray, PieceKind::Cat));
        assert_ne!(zt.hash(&game, Color::Orange), h0);

        game.board.remove(pos);
        assert_eq!(zt.hash(&game, Color::Orange), h0);
    }
}
