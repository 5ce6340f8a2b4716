use super::value::Value;

pub trait GameEngine {
    type Action;
    type State;
    type Value: Value;

    /// Returns a new state with the action applied. The provided state is left untouched.
    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;

    /// The 1 based index of the player to move. Only meaningful while the state is not terminal.
    fn player_to_move(&self, game_state: &Self::State) -> usize;

    /// Returns the utilities of every player once the game is over, otherwise None.
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Value>;

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        self.terminal_state(game_state).is_some()
    }
}
