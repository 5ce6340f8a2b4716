use std::time::Duration;

use engine::{Players, ValidActions};
use generational_arena::{Arena, Index};

use crate::UCTNode;

/// Why a search stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    IterationLimit,
    TimeLimit,
    Cancelled,
    TerminalRoot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub iterations: usize,
    pub elapsed: Duration,
    pub stop_reason: Option<StopReason>,
}

/// Arena owning every node created during a single decision.
///
/// Parents and children reference each other by index, the whole tree is released at once when
/// the arena is dropped.
#[derive(Debug)]
pub struct SearchTree<S, A> {
    arena: Arena<UCTNode<S, A>>,
    root: Index,
    stats: SearchStats,
}

impl<S, A> SearchTree<S, A> {
    pub fn new<E>(engine: &E, game_state: S) -> Self
    where
        E: ValidActions<State = S, Action = A> + Players,
    {
        let mut arena = Arena::new();
        let root = arena.insert(create_node(engine, None, None, game_state));

        Self {
            arena,
            root,
            stats: SearchStats::default(),
        }
    }

    /// Creates a node for the state and registers it as the latest child of the parent.
    pub(crate) fn add_child<E>(&mut self, engine: &E, parent: Index, action: A, game_state: S) -> Index
    where
        E: ValidActions<State = S, Action = A> + Players,
    {
        let node = create_node(engine, Some(parent), Some(action), game_state);
        let index = self.arena.insert(node);
        self.arena[parent].add_child(index);
        index
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_node(&self) -> &UCTNode<S, A> {
        &self.arena[self.root]
    }

    pub fn node(&self, index: Index) -> &UCTNode<S, A> {
        &self.arena[index]
    }

    pub(crate) fn node_mut(&mut self, index: Index) -> &mut UCTNode<S, A> {
        &mut self.arena[index]
    }

    pub fn child_nodes(&self, index: Index) -> impl Iterator<Item = (Index, &UCTNode<S, A>)> {
        self.arena[index]
            .children()
            .iter()
            .map(move |&child| (child, &self.arena[child]))
    }

    /// Every node of the tree in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (Index, &UCTNode<S, A>)> {
        self.arena.iter()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn set_stats(&mut self, stats: SearchStats) {
        self.stats = stats;
    }
}

fn create_node<E>(
    engine: &E,
    parent: Option<Index>,
    action: Option<E::Action>,
    game_state: E::State,
) -> UCTNode<E::State, E::Action>
where
    E: ValidActions + Players,
{
    let terminal = engine.is_terminal(&game_state);
    let actions = if terminal {
        Vec::new()
    } else {
        engine.valid_actions(&game_state)
    };

    UCTNode::new(
        parent,
        action,
        game_state,
        terminal,
        actions,
        engine.player_count(),
    )
}
