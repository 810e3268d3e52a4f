//! Static board graph: adjacency and winning lines.
//!
//! Nothing here is mutable. The rules engine and the AI read these tables;
//! the AI shuffles its own copies when it wants a random visiting order.

pub mod adjacency;
pub mod lines;

pub use adjacency::{adjacent_to, are_adjacent};
pub use lines::{winning_lines, WinningLine};
