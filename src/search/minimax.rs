//! Minimax search agent
//!
//! The agent plays one seat against the other by direct mutation of the
//! shared [`Game`]: every candidate move is applied in place, searched one
//! ply deeper, and unwound through an explicit snapshot — no game tree is
//! ever materialized. A snapshot is a flat copy of the 36-cell grid, the
//! four reserve counters, and the turn pointer, so save and restore are
//! O(1)-sized and exact.
//!
//! Lookahead models placement, booping, and the resource returns of ejected
//! pieces, but intentionally not the promotion pass; the real rule engine
//! runs promotions when the chosen move is played.
//!
//! # Example
//!
//! ```
//! use boop::{Agent, Color, Game, PieceKind};
//!
//! let mut game = Game::new();
//! game.place_piece(2, 2, PieceKind::Kitten);
//!
//! let mut agent = Agent::new(Color::Gray);
//! let best = agent.find_best_move(&mut game, 2).unwrap();
//! assert!(game.place_piece(best.pos.row as i32, best.pos.col as i32, best.kind));
//! ```

use crate::board::{Color, Piece, PieceKind, Pos, TOTAL_CELLS};
use crate::eval::{evaluate_board, evaluate_placement, Score};
use crate::game::Game;
use crate::rules::{execute_boops, has_line};

use super::tt::{EntryType, TranspositionTable};
use super::zobrist::ZobristTable;

/// A recommended move and its search score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub pos: Pos,
    pub kind: PieceKind,
    pub score: i32,
}

/// Saved game state for the in-place backtracking protocol.
///
/// Restore is a pure overwrite of the captured fields; after it, the game
/// compares equal to the pre-capture state in every observable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cells: [Option<Piece>; TOTAL_CELLS],
    reserves: [[u8; 2]; 2],
    current: Color,
}

impl Snapshot {
    /// Capture the full mutable state of the game
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        let mut reserves = [[0u8; 2]; 2];
        for color in [Color::Orange, Color::Gray] {
            let player = game.player(color);
            reserves[color.index()] = [player.kittens, player.cats];
        }
        Self {
            cells: *game.board.cells(),
            reserves,
            current: game.current,
        }
    }

    /// Write the captured state back
    pub fn restore(&self, game: &mut Game) {
        game.board.set_cells(self.cells);
        for color in [Color::Orange, Color::Gray] {
            let [kittens, cats] = self.reserves[color.index()];
            let player = game.player_mut(color);
            player.kittens = kittens;
            player.cats = cats;
        }
        game.current = self.current;
    }
}

/// Apply a placement the way the search models it: consume the reserve,
/// place, resolve boops, return ejected pieces to their owners. No
/// promotion pass, no victory pass, no turn switch.
fn apply_move(game: &mut Game, pos: Pos, kind: PieceKind, color: Color) {
    game.player_mut(color).take(kind);
    game.board.place(pos, Piece::new(color, kind));

    let ejected = execute_boops(&mut game.board, pos, kind);
    for piece in ejected {
        game.player_mut(piece.color).give(piece.kind);
    }
}

/// Score every empty cell for a hypothetical placement of `kind` by `me`,
/// sorted best first. Exposed so a driver can show the heuristic's top
/// candidates.
#[must_use]
pub fn ranked_placements(game: &Game, kind: PieceKind, me: Color) -> Vec<(i32, Pos)> {
    let mut result = Vec::new();
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if game.board.is_empty(pos) {
            result.push((evaluate_placement(&game.board, pos, kind, me), pos));
        }
    }
    result.sort_by(|a, b| b.0.cmp(&a.0));
    result
}

/// Adversarial search agent for one seat.
///
/// Owns the transposition table and Zobrist keys; operates on a `Game`
/// passed in per call. The caller must not touch the game while a search is
/// in flight (single-threaded by design), and must not share one agent
/// across matches without [`clear_cache`].
///
/// [`clear_cache`]: Agent::clear_cache
pub struct Agent {
    me: Color,
    zobrist: ZobristTable,
    tt: TranspositionTable,
    nodes: u64,
}

impl Agent {
    /// Default transposition table size in megabytes
    pub const DEFAULT_TT_MB: usize = 16;

    #[must_use]
    pub fn new(me: Color) -> Self {
        Self::with_table_size(me, Self::DEFAULT_TT_MB)
    }

    #[must_use]
    pub fn with_table_size(me: Color, tt_size_mb: usize) -> Self {
        Self {
            me,
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(tt_size_mb),
            nodes: 0,
        }
    }

    /// The seat this agent plays
    #[inline]
    pub fn me(&self) -> Color {
        self.me
    }

    /// Nodes visited by the most recent [`find_best_move`] call
    ///
    /// [`find_best_move`]: Agent::find_best_move
    #[inline]
    pub fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    /// Occupied transposition-table slots
    #[inline]
    pub fn cache_size(&self) -> usize {
        self.tt.len()
    }

    /// Drop every cached search result
    pub fn clear_cache(&mut self) {
        self.tt.clear();
    }

    /// Search to `max_depth` plies (minimum 1) and return the best move for
    /// this agent's seat, or `None` when no placement is possible — an
    /// engine-level stalemate, not an error.
    ///
    /// The game is mutated during the search and restored before returning;
    /// on return it compares equal to the state passed in.
    pub fn find_best_move(&mut self, game: &mut Game, max_depth: u8) -> Option<BestMove> {
        let max_depth = max_depth.max(1);
        self.nodes = 0;

        let mut best: Option<BestMove> = None;

        // Root keeps the full window for every sibling: the move list is
        // short and exact root scores make the choice reproducible.
        for (_, pos, kind) in self.ordered_moves(game, true) {
            let snapshot = Snapshot::capture(game);
            apply_move(game, pos, kind, self.me);
            let score = self.minimax(game, max_depth - 1, -Score::INF, Score::INF, false);
            snapshot.restore(game);

            if best.map_or(true, |b| score > b.score) {
                best = Some(BestMove { pos, kind, score });
            }
        }

        best
    }

    /// Candidate moves for the side to move, sorted descending by the
    /// placement heuristic (always scored from this agent's perspective).
    /// Cat placements carry a flat bonus: they cannot be booped back out.
    fn ordered_moves(&self, game: &Game, maximizing: bool) -> Vec<(i32, Pos, PieceKind)> {
        let player = if maximizing { self.me } else { self.me.opponent() };
        let mut moves = Vec::new();

        for kind in [PieceKind::Kitten, PieceKind::Cat] {
            if !game.player(player).can_place(kind) {
                continue;
            }
            let bonus = match kind {
                PieceKind::Kitten => 0,
                PieceKind::Cat => Score::CAT_MOVE_BONUS,
            };
            for idx in 0..TOTAL_CELLS {
                let pos = Pos::from_index(idx);
                if game.board.is_empty(pos) {
                    let score = evaluate_placement(&game.board, pos, kind, self.me) + bonus;
                    moves.push((score, pos, kind));
                }
            }
        }

        // Stable sort: ties stay in kitten-first, row-major order
        moves.sort_by(|a, b| b.0.cmp(&a.0));
        moves
    }

    fn minimax(&mut self, game: &mut Game, depth: u8, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        let to_move = if maximizing { self.me } else { self.me.opponent() };
        let hash = self.zobrist.hash(game, to_move);

        if let Some(entry) = self.tt.probe(hash, depth) {
            match entry.entry_type {
                EntryType::Exact => return entry.score,
                EntryType::LowerBound => alpha = alpha.max(entry.score),
                EntryType::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        // Decided positions score as wins biased toward the shortest path;
        // the bias is the remaining depth, so a nearer win scores higher.
        if has_line(&game.board, self.me, PieceKind::Cat) {
            return Score::WIN + depth as i32;
        }
        if has_line(&game.board, self.me.opponent(), PieceKind::Cat) {
            return -(Score::WIN + depth as i32);
        }

        if depth == 0 {
            return evaluate_board(game, self.me);
        }

        let moves = self.ordered_moves(game, maximizing);
        if moves.is_empty() {
            return evaluate_board(game, self.me);
        }

        let mut best = if maximizing { -Score::INF } else { Score::INF };
        let mut entry_type = EntryType::UpperBound;

        for (_, pos, kind) in moves {
            let snapshot = Snapshot::capture(game);
            apply_move(game, pos, kind, to_move);
            let value = self.minimax(game, depth - 1, alpha, beta, !maximizing);
            snapshot.restore(game);

            if maximizing {
                if value > best {
                    best = value;
                    entry_type = EntryType::Exact;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    entry_type = EntryType::Exact;
                }
                beta = beta.min(best);
            }

            if beta <= alpha {
                entry_type = if maximizing {
                    EntryType::LowerBound
                } else {
                    EntryType::UpperBound
                };
                break;
            }
        }

        self.tt.store(hash, depth, best, entry_type);
        best
    }
}
