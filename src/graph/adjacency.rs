//! Static adjacency of the circular board.
//!
//! Ring position `i` touches its two ring neighbours and the center.
//! The center touches every ring position.

use crate::core::Position;

const P: [Position; Position::COUNT] = Position::ALL;

/// Neighbour lists in canonical order, indexed by `Position::index()`.
static ADJACENCY: [&[Position]; Position::COUNT] = [
    &[P[1], P[7], P[8]],
    &[P[0], P[2], P[8]],
    &[P[1], P[3], P[8]],
    &[P[2], P[4], P[8]],
    &[P[3], P[5], P[8]],
    &[P[4], P[6], P[8]],
    &[P[5], P[7], P[8]],
    &[P[6], P[0], P[8]],
    &[P[0], P[1], P[2], P[3], P[4], P[5], P[6], P[7]],
];

/// Positions reachable from `position` in one move.
///
/// ```
/// use circular_ttt::core::Position;
/// use circular_ttt::graph::adjacent_to;
///
/// assert_eq!(adjacent_to(Position::ALL[2]).len(), 3);
/// assert_eq!(adjacent_to(Position::CENTER).len(), 8);
/// ```
#[must_use]
pub fn adjacent_to(position: Position) -> &'static [Position] {
    ADJACENCY[position.index()]
}

/// Check whether two positions share an edge.
#[must_use]
pub fn are_adjacent(a: Position, b: Position) -> bool {
    adjacent_to(a).contains(&b)
}
