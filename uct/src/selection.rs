use engine::{Players, ValidActions};
use generational_arena::Index;
use rand::Rng;

use crate::{ReservoirMax, SearchTree};

/// UCB1 score of a child from the perspective of the player to move at its parent.
///
/// `exploration_log` is `c * ln(max(1, parent_visits))` and is shared by all siblings. The child
/// must have been visited at least once.
pub fn ucb1(score_sum: f64, visits: usize, exploration_log: f64) -> f64 {
    debug_assert!(visits > 0, "UCB1 is undefined for an unvisited child");

    let visits = visits as f64;
    let exploit = score_sum / visits;
    let explore = (exploration_log / visits).sqrt();

    exploit + explore
}

pub fn exploration_log(exploration: f32, parent_visits: usize) -> f64 {
    f64::from(exploration) * (parent_visits.max(1) as f64).ln()
}

/// Walks down from the root and returns the node to simulate from.
///
/// At most one node is created per call. The walk stops at a terminal node, at a freshly expanded
/// node, or at a child that has not been visited yet.
pub(crate) fn select_and_expand<E, R>(
    tree: &mut SearchTree<E::State, E::Action>,
    engine: &E,
    exploration: f32,
    rng: &mut R,
) -> Index
where
    E: ValidActions + Players,
    R: Rng + ?Sized,
{
    let mut current = tree.root();

    loop {
        if tree.node(current).is_terminal() {
            return current;
        }

        if let Some(action) = tree.node_mut(current).take_random_unexpanded_action(rng) {
            let game_state = engine.take_action(tree.node(current).game_state(), &action);
            return tree.add_child(engine, current, action, game_state);
        }

        let mover = engine.player_to_move(tree.node(current).game_state());
        let child = match select_child(tree, current, mover, exploration, rng) {
            Some(child) => child,
            None => return current,
        };

        if tree.node(child).visits() == 0 {
            return child;
        }

        current = child;
    }
}

/// Picks the child with the highest UCB1 score for `mover`, breaking ties uniformly at random.
pub(crate) fn select_child<S, A, R>(
    tree: &SearchTree<S, A>,
    parent: Index,
    mover: usize,
    exploration: f32,
    rng: &mut R,
) -> Option<Index>
where
    R: Rng + ?Sized,
{
    let exploration_log = exploration_log(exploration, tree.node(parent).visits());
    let mut best = ReservoirMax::new();

    for (index, child) in tree.child_nodes(parent) {
        let score = ucb1(child.score_sum(mover), child.visits(), exploration_log);
        best.offer(index, score, rng);
    }

    best.into_best()
}
