//! Game rules for Boop (boop propagation, line detection)

pub mod boop;
pub mod lines;

// Re-exports
pub use boop::{execute_boops, NEIGHBOR_OFFSETS};
pub use lines::{aligns_at, find_lines, has_line, Line, LINE_DIRECTIONS};
