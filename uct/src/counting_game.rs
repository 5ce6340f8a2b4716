use engine::{GameEngine, GameKind, GameState, Players, RandomPlayout, ValidActions};

pub const UPPER_BOUND: usize = 10;

/// Player 1 wins by counting up to `UPPER_BOUND`, player 2 wins by counting down to zero.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub p1_turn: bool,
    pub count: usize,
}

impl CountingGameState {
    pub fn new(p1_turn: bool, count: usize) -> Self {
        Self { p1_turn, count }
    }

    pub fn is_terminal_state(&self) -> Option<Value> {
        if self.count >= UPPER_BOUND {
            Some(Value([1.0, -1.0]))
        } else if self.count == 0 {
            Some(Value([-1.0, 1.0]))
        } else {
            None
        }
    }
}

impl GameState for CountingGameState {
    fn initial() -> Self {
        Self {
            p1_turn: true,
            count: UPPER_BOUND / 2,
        }
    }
}

#[derive(Default)]
pub struct CountingGameEngine {
    pub stochastic: bool,
    pub simultaneous: bool,
}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value(pub [f32; 2]);

impl engine::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;
    type Value = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let count = game_state.count;

        let new_count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            p1_turn: !game_state.p1_turn,
            count: new_count,
        }
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        game_state.is_terminal_state()
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        if game_state.p1_turn {
            1
        } else {
            2
        }
    }
}

impl ValidActions for CountingGameEngine {
    fn valid_actions(&self, _game_state: &Self::State) -> Vec<Self::Action> {
        vec![
            CountingAction::Increment,
            CountingAction::Decrement,
            CountingAction::Stay,
        ]
    }
}

impl RandomPlayout for CountingGameEngine {}

impl Players for CountingGameEngine {
    fn player_count(&self) -> usize {
        2
    }
}

impl GameKind for CountingGameEngine {
    fn is_stochastic(&self) -> bool {
        self.stochastic
    }

    fn is_alternating_move(&self) -> bool {
        !self.simultaneous
    }
}
