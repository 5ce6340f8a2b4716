use serde::{Deserialize, Serialize};

/// Utilities of player 1 and player 2 at the end of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Value(pub [f32; 2]);

impl Value {
    pub const P1_WIN: Value = Value([1.0, -1.0]);
    pub const P2_WIN: Value = Value([-1.0, 1.0]);
    pub const DRAW: Value = Value([0.0, 0.0]);

    /// The winning player, None for a draw.
    pub fn winner(&self) -> Option<usize> {
        if self.0[0] > self.0[1] {
            Some(1)
        } else if self.0[1] > self.0[0] {
            Some(2)
        } else {
            None
        }
    }
}

impl engine::value::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "Player {} wins ({}, {})", player, self.0[0], self.0[1]),
            None => write!(f, "Draw ({}, {})", self.0[0], self.0[1]),
        }
    }
}
