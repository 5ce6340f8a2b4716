//! Single threaded UCT (UCB1 applied to trees) search for deterministic, alternating move games.
//!
//! A search grows a fresh tree from the given state, one node per iteration, estimates new nodes
//! through uniformly random playouts and finally plays the most visited root child.

mod agent;
mod backpropagation;
mod budget;
mod cancellation;
#[cfg(test)]
mod counting_game;
mod error;
mod final_action;
mod node;
mod node_details;
mod options;
mod selection;
mod tie_break;
mod tree;
mod uct;

pub use agent::*;
pub use budget::*;
pub use cancellation::*;
pub use error::*;
pub use final_action::*;
pub use node::*;
pub use node_details::*;
pub use options::*;
pub use selection::{exploration_log, ucb1};
pub use tie_break::*;
pub use tree::*;
pub use uct::*;
