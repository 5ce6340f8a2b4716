use std::time::Instant;

use engine::{GameKind, Players, RandomPlayout};
use log::{debug, warn};
use rand::Rng;

use crate::backpropagation::backpropagate;
use crate::selection::select_and_expand;
use crate::{
    robust_child, CancellationToken, SearchBudget, SearchStats, SearchTree, StopReason, UCTError,
    UCTOptions, UnsupportedReason, DEFAULT_EXPLORATION,
};

/// Whether UCT can search the game. Games with chance events or with more than one player acting
/// at a time are rejected.
pub fn supports_game<G: GameKind>(game: &G) -> bool {
    check_game_kind(game).is_ok()
}

pub fn check_game_kind<G: GameKind>(game: &G) -> Result<(), UCTError> {
    if game.is_stochastic() {
        return Err(UCTError::UnsupportedGameKind(UnsupportedReason::Stochastic));
    }

    if !game.is_alternating_move() {
        return Err(UCTError::UnsupportedGameKind(
            UnsupportedReason::SimultaneousMove,
        ));
    }

    Ok(())
}

/// Single threaded UCT search. Every call builds a fresh tree which is dropped once the decision
/// has been made.
pub struct UCT<'a, E> {
    engine: &'a E,
    exploration: f32,
    cancellation: CancellationToken,
}

impl<'a, E> UCT<'a, E>
where
    E: RandomPlayout + Players + GameKind,
    E::State: Clone,
    E::Action: Clone,
{
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            exploration: DEFAULT_EXPLORATION,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_options(engine: &'a E, options: &UCTOptions) -> Self {
        Self::new(engine).with_exploration(options.exploration)
    }

    pub fn with_exploration(self, exploration: f32) -> Self {
        Self {
            exploration,
            ..self
        }
    }

    pub fn with_cancellation(self, cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            ..self
        }
    }

    /// A handle to the flag polled between iterations. Raising it stops the current search.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn exploration(&self) -> f32 {
        self.exploration
    }

    pub fn supports_game(&self) -> bool {
        supports_game(self.engine)
    }

    /// Searches from `game_state` and returns the action leading to the most visited root child.
    pub fn select_action<R: Rng + ?Sized>(
        &self,
        game_state: &E::State,
        budget: SearchBudget,
        rng: &mut R,
    ) -> Result<E::Action, UCTError> {
        let tree = self.search(game_state, budget, rng)?;
        robust_child(&tree, rng)
    }

    /// Same as `select_action` with raw limits, non-positive seconds or negative iterations are
    /// unbounded.
    pub fn select_action_with_limits<R: Rng + ?Sized>(
        &self,
        game_state: &E::State,
        max_seconds: f64,
        max_iterations: i64,
        rng: &mut R,
    ) -> Result<E::Action, UCTError> {
        let budget = SearchBudget::from_limits(max_seconds, max_iterations);
        self.select_action(game_state, budget, rng)
    }

    /// Runs iterations until the budget is spent, the cancellation flag is raised, or the root
    /// turns out to be terminal. The returned tree can be inspected before making a decision.
    pub fn search<R: Rng + ?Sized>(
        &self,
        game_state: &E::State,
        budget: SearchBudget,
        rng: &mut R,
    ) -> Result<SearchTree<E::State, E::Action>, UCTError> {
        check_game_kind(self.engine)?;

        if budget.is_unbounded() {
            warn!("Searching without an iteration or time limit, only cancellation will stop the search");
        }

        let start = Instant::now();
        let deadline = budget.deadline(start);
        let max_iterations = budget.max_iterations.unwrap_or(usize::MAX);
        let mut tree = SearchTree::new(self.engine, game_state.clone());
        let mut iterations = 0;

        let stop_reason = loop {
            if tree.root_node().is_terminal() {
                break StopReason::TerminalRoot;
            }

            if iterations >= max_iterations {
                break StopReason::IterationLimit;
            }

            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                break StopReason::TimeLimit;
            }

            if self.cancellation.is_cancelled() {
                break StopReason::Cancelled;
            }

            self.iterate(&mut tree, rng);
            iterations += 1;
        };

        let stats = SearchStats {
            iterations,
            elapsed: start.elapsed(),
            stop_reason: Some(stop_reason),
        };

        debug!(
            "Search stopped by {:?} after {} iterations in {:?}, tree has {} nodes",
            stop_reason,
            stats.iterations,
            stats.elapsed,
            tree.len()
        );

        tree.set_stats(stats);

        Ok(tree)
    }

    /// One full selection, expansion, simulation and backpropagation cycle.
    fn iterate<R: Rng + ?Sized>(&self, tree: &mut SearchTree<E::State, E::Action>, rng: &mut R) {
        let selected = select_and_expand(tree, self.engine, self.exploration, rng);
        let game_state = tree.node(selected).game_state();

        let value = match self.engine.terminal_state(game_state) {
            Some(value) => value,
            None => self.simulate(game_state.clone(), rng),
        };

        backpropagate(tree, selected, &value);
    }

    fn simulate<R: Rng + ?Sized>(&self, game_state: E::State, rng: &mut R) -> E::Value {
        let terminal_state = self.engine.random_playout(game_state, rng);

        match self.engine.terminal_state(&terminal_state) {
            Some(value) => value,
            None => panic!("Random playout ended on a non-terminal state"),
        }
    }
}
