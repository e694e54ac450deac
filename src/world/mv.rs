use crate::world::prelude::*;

/// A single agent's parsed intent for one turn: a direction to move in,
/// plus the missile targets it asked to fire at (not yet validated against
/// missile count or cardinality — that happens during pipeline step 7).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub missile_targets: Vec<Coord>,
}

impl Move {
    /// The no-op move: used for a blank reply from a dead agent, which is
    /// legal and simply does nothing.
    pub fn noop() -> Move {
        Move::default()
    }
}
