use rand::seq::SliceRandom;
use rand::Rng;

use crate::ValidActions;

pub trait RandomPlayout: ValidActions {
    /// Plays uniformly random valid actions until the game is over and returns the terminal state.
    ///
    /// Games are assumed to be finite, every non-terminal state must have at least one valid action.
    fn random_playout<R: Rng + ?Sized>(&self, game_state: Self::State, rng: &mut R) -> Self::State {
        let mut game_state = game_state;

        while !self.is_terminal(&game_state) {
            let actions = self.valid_actions(&game_state);
            let action = match actions.choose(rng) {
                Some(action) => action,
                None => panic!("Non-terminal state has no valid actions"),
            };

            game_state = self.take_action(&game_state, action);
        }

        game_state
    }
}
