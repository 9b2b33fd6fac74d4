//! Position evaluation and move-ordering heuristics

pub mod heuristic;
pub mod weights;

// Re-exports
pub use heuristic::{evaluate_board, evaluate_placement};
pub use weights::Score;
