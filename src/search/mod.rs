//! Search: minimax with alpha-beta pruning, transposition caching, and
//! in-place backtracking over the shared game state

pub mod minimax;
pub mod tt;
pub mod zobrist;

// Re-exports
pub use minimax::{ranked_placements, Agent, BestMove, Snapshot};
pub use tt::{EntryType, TTEntry, TranspositionTable};
pub use zobrist::ZobristTable;
