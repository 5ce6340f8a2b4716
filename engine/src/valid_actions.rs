use crate::GameEngine;

pub trait ValidActions: GameEngine {
    /// All legal actions at the given state. The order is stable for a given state.
    fn valid_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;
}
