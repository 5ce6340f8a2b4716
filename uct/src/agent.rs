use std::fmt::{Debug, Display};

use common::create_rng_from_optional_seed;
use engine::{GameKind, Players, RandomPlayout};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::{robust_child, CancellationToken, NodeDetails, SearchStats, UCTError, UCTOptions, UCT};

const FRIENDLY_NAME: &str = "UCT";

/// The action chosen for a position together with what the search saw.
pub struct Decision<A> {
    pub action: A,
    pub details: NodeDetails<A>,
    pub stats: SearchStats,
}

/// A game playing agent backed by a UCT search with its own options, rng and stop flag.
pub struct UCTAgent<'a, E, R = StdRng> {
    engine: &'a E,
    options: UCTOptions,
    rng: R,
    cancellation: CancellationToken,
    player: Option<usize>,
}

impl<'a, E> UCTAgent<'a, E, StdRng> {
    /// Seeds the agent from `options.seed` when present.
    pub fn new(engine: &'a E, options: UCTOptions) -> Self {
        let rng = create_rng_from_optional_seed(options.seed);
        Self::with_rng(engine, options, rng)
    }
}

impl<'a, E, R> UCTAgent<'a, E, R> {
    pub fn with_rng(engine: &'a E, options: UCTOptions, rng: R) -> Self {
        Self {
            engine,
            options,
            rng,
            cancellation: CancellationToken::new(),
            player: None,
        }
    }

    /// Shares an externally owned stop flag, such as one raised by a host thread.
    pub fn with_cancellation(self, cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            ..self
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        FRIENDLY_NAME
    }

    /// Records which player this agent will be moving for.
    pub fn init_ai(&mut self, player: usize) {
        info!("{} initialised as player {}", FRIENDLY_NAME, player);
        self.player = Some(player);
    }

    pub fn player(&self) -> Option<usize> {
        self.player
    }

    pub fn options(&self) -> &UCTOptions {
        &self.options
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }
}

impl<'a, E, R> UCTAgent<'a, E, R>
where
    E: RandomPlayout + Players + GameKind,
    E::State: Clone,
    E::Action: Clone + Debug,
    R: Rng,
{
    pub fn supports_game(&self) -> bool {
        self.uct().supports_game()
    }

    pub fn select_action(&mut self, game_state: &E::State) -> Result<E::Action, UCTError> {
        self.decide(game_state).map(|decision| decision.action)
    }

    pub fn decide(&mut self, game_state: &E::State) -> Result<Decision<E::Action>, UCTError> {
        self.warn_if_not_to_move(game_state);

        let uct = self.uct();
        let tree = uct.search(game_state, self.options.budget(), &mut self.rng)?;
        let action = robust_child(&tree, &mut self.rng)?;
        let mover = self.engine.player_to_move(game_state);
        let details = tree.root_details(mover, uct.exploration());

        debug!(
            "{} chose {:?} for player {} after {} iterations",
            FRIENDLY_NAME,
            action,
            mover,
            tree.stats().iterations
        );

        Ok(Decision {
            action,
            details,
            stats: tree.stats().clone(),
        })
    }

    fn warn_if_not_to_move(&self, game_state: &E::State) {
        if self.engine.is_terminal(game_state) {
            return;
        }

        let mover = self.engine.player_to_move(game_state);
        if let Some(player) = self.player.filter(|player| *player != mover) {
            warn!(
                "{} was initialised as player {} but is asked to move for player {}",
                FRIENDLY_NAME, player, mover
            );
        }
    }

    fn uct(&self) -> UCT<'a, E> {
        UCT::with_options(self.engine, &self.options).with_cancellation(self.cancellation.clone())
    }
}

impl<A: Display> Display for Decision<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "action: {}, iterations: {}, elapsed: {:?}, {}",
            self.action, self.stats.iterations, self.stats.elapsed, self.details
        )
    }
}
