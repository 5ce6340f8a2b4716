/// Describes the structural properties of a game that searches may depend on.
pub trait GameKind {
    /// True when the game contains chance events.
    fn is_stochastic(&self) -> bool;

    /// True when exactly one player acts at every non-terminal state.
    fn is_alternating_move(&self) -> bool;
}
