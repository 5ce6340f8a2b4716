use engine::{GameEngine, GameKind, Players, RandomPlayout, ValidActions};

use super::{Action, GameState, Value};

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Value = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        game_state.drop_piece(action.column())
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        game_state.is_terminal()
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }
}

impl ValidActions for Engine {
    fn valid_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        if game_state.is_terminal().is_some() {
            return vec![];
        }

        game_state.valid_actions()
    }
}

impl RandomPlayout for Engine {}

impl Players for Engine {
    fn player_count(&self) -> usize {
        2
    }
}

impl GameKind for Engine {
    fn is_stochastic(&self) -> bool {
        false
    }

    fn is_alternating_move(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_take_action_switches_player() {
        let engine = Engine::new();
        let mut state = GameState::initial();
        assert_eq!(engine.player_to_move(&state), 1);

        state = engine.take_action(&state, &Action::DropPiece(4));
        assert_eq!(engine.player_to_move(&state), 2);

        state = engine.take_action(&state, &Action::DropPiece(4));
        assert_eq!(engine.player_to_move(&state), 1);
    }

    #[test]
    fn test_initial_state_has_all_columns() {
        let engine = Engine::new();
        assert_eq!(engine.valid_actions(&GameState::initial()).len(), 7);
    }

    #[test]
    fn test_terminal_state_has_no_valid_actions() {
        let engine = Engine::new();
        let state = [1, 2, 1, 2, 1, 2, 1]
            .iter()
            .fold(GameState::initial(), |s, c| engine.take_action(&s, &Action::DropPiece(*c)));

        assert_eq!(engine.terminal_state(&state), Some(Value::P1_WIN));
        assert!(engine.valid_actions(&state).is_empty());
    }

    #[test]
    fn test_random_playout_ends_with_bounded_utilities() {
        let engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let end = engine.random_playout(GameState::initial(), &mut rng);
            let value = engine.terminal_state(&end).unwrap();

            assert!(end.number_of_actions() >= 7);
            for player in engine.players() {
                let utility = engine::Value::get_value_for_player(&value, player);
                assert!((-1.0..=1.0).contains(&utility));
            }
            assert_eq!(value.0[0], -value.0[1]);
        }
    }

    #[test]
    fn test_game_kind() {
        let engine = Engine::new();
        assert!(!engine.is_stochastic());
        assert!(engine.is_alternating_move());
        assert_eq!(engine.player_count(), 2);
    }
}
