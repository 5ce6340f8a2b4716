#![allow(clippy::inconsistent_digit_grouping)]
#![allow(clippy::unusual_byte_groupings)]

pub mod action;
pub mod engine;
pub mod game_state;
pub mod value;

mod board;

use board::*;

pub use action::*;
pub use self::engine::*;
pub use game_state::*;
pub use value::*;
