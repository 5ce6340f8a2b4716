use std::fmt::{self, Display, Formatter};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UCTError {
    #[error("UCT does not support this game: {0}")]
    UnsupportedGameKind(UnsupportedReason),

    /// The root has no children to choose from, which means the game was already over.
    #[error("The root node has no children. The game is already over at the provided state.")]
    EmptyTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    Stochastic,
    SimultaneousMove,
}

impl Display for UnsupportedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::Stochastic => write!(f, "the game contains chance events"),
            UnsupportedReason::SimultaneousMove => write!(f, "the game is not strictly alternating"),
        }
    }
}
