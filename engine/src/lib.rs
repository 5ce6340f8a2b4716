pub mod engine;
pub mod game_kind;
pub mod game_state;
pub mod players;
pub mod playout;
pub mod valid_actions;
pub mod value;

pub use crate::engine::*;
pub use crate::game_kind::*;
pub use crate::game_state::*;
pub use crate::players::*;
pub use crate::playout::*;
pub use crate::valid_actions::*;
pub use crate::value::*;
