//! Boop rule engine and search agent
//!
//! Boop is a two-player abstract game on a 6x6 grid. Each player places
//! kittens (light) and cats (heavy); a placed piece "boops" adjacent pieces
//! of equal or lesser weight one cell away, off the board if there is no
//! room. Three kittens in a row graduate into cat placement rights; three
//! cats in a row win.
//!
//! # Architecture
//!
//! - [`board`]: grid, pieces, positions
//! - [`rules`]: boop propagation and line detection
//! - [`game`]: the rule engine driving one full turn
//! - [`eval`]: placement heuristic and static evaluation
//! - [`search`]: minimax agent with alpha-beta pruning and a
//!   transposition table, mutating the shared game state through an exact
//!   snapshot/restore protocol
//!
//! # Quick start
//!
//! ```
//! use boop::{Agent, Color, Game, PieceKind};
//!
//! let mut game = Game::new();
//! game.place_piece(2, 2, PieceKind::Kitten);
//!
//! // The agent plays the gray seat
//! let mut agent = Agent::new(Color::Gray);
//! if let Some(best) = agent.find_best_move(&mut game, 2) {
//!     game.place_piece(best.pos.row as i32, best.pos.col as i32, best.kind);
//! }
//! ```

pub mod board;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Piece, PieceKind, Pos, BOARD_SIZE};
pub use game::{Game, PlaceError, PlayerState};
pub use search::{
    ranked_placements, Agent, BestMove, EntryType, Snapshot, TTEntry, TranspositionTable,
    ZobristTable,
};
