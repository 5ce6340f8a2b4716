use engine::Value;
use generational_arena::Index;
use rand::Rng;

/// A single position in the search tree.
///
/// Visits and score sums are only written by backpropagation. Children and unexpanded actions are
/// only written by expansion, an action moves from `unexpanded_actions` to `children` and never back.
#[derive(Debug)]
pub struct UCTNode<S, A> {
    parent: Option<Index>,
    action: Option<A>,
    game_state: S,
    terminal: bool,
    num_actions: usize,
    visits: usize,
    score_sums: Vec<f64>,
    children: Vec<Index>,
    unexpanded_actions: Vec<A>,
}

impl<S, A> UCTNode<S, A> {
    pub(crate) fn new(
        parent: Option<Index>,
        action: Option<A>,
        game_state: S,
        terminal: bool,
        unexpanded_actions: Vec<A>,
        player_count: usize,
    ) -> Self {
        Self {
            parent,
            action,
            game_state,
            terminal,
            num_actions: unexpanded_actions.len(),
            visits: 0,
            score_sums: vec![0.0; player_count + 1],
            children: Vec::new(),
            unexpanded_actions,
        }
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// The action that led from the parent to this node. None for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn game_state(&self) -> &S {
        &self.game_state
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of valid actions at the time the node was created.
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn score_sum(&self, player: usize) -> f64 {
        self.score_sums[player]
    }

    pub fn mean_score(&self, player: usize) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score_sums[player] / self.visits as f64
        }
    }

    pub fn player_count(&self) -> usize {
        self.score_sums.len() - 1
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn unexpanded_actions(&self) -> &[A] {
        &self.unexpanded_actions
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.unexpanded_actions.is_empty()
    }

    pub(crate) fn take_random_unexpanded_action<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<A> {
        if self.unexpanded_actions.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.unexpanded_actions.len());
        Some(self.unexpanded_actions.swap_remove(index))
    }

    pub(crate) fn add_child(&mut self, child: Index) {
        self.children.push(child);
    }

    pub(crate) fn record_visit<V: Value>(&mut self, value: &V) {
        self.visits += 1;

        for (player, score_sum) in self.score_sums.iter_mut().enumerate().skip(1) {
            *score_sum += f64::from(value.get_value_for_player(player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone)]
    struct Utilities([f32; 2]);

    impl Value for Utilities {
        fn get_value_for_player(&self, player: usize) -> f32 {
            self.0[player - 1]
        }
    }

    #[test]
    fn test_new_node_is_unvisited() {
        let node: UCTNode<(), u8> = UCTNode::new(None, None, (), false, vec![1, 2, 3], 2);

        assert_eq!(node.visits(), 0);
        assert_eq!(node.num_actions(), 3);
        assert_eq!(node.player_count(), 2);
        assert_eq!(node.score_sum(1), 0.0);
        assert_eq!(node.score_sum(2), 0.0);
        assert_eq!(node.mean_score(1), 0.0);
        assert!(node.action().is_none());
        assert!(!node.is_fully_expanded());
    }

    #[test]
    fn test_take_random_unexpanded_action_drains_all_actions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut node: UCTNode<(), u8> = UCTNode::new(None, None, (), false, vec![1, 2, 3], 2);
        let mut taken = Vec::new();

        while let Some(action) = node.take_random_unexpanded_action(&mut rng) {
            taken.push(action);
            assert_eq!(taken.len() + node.unexpanded_actions().len(), node.num_actions());
        }

        taken.sort();
        assert_eq!(taken, vec![1, 2, 3]);
        assert!(node.is_fully_expanded());
    }

    #[test]
    fn test_record_visit_accumulates_per_player() {
        let mut node: UCTNode<(), u8> = UCTNode::new(None, None, (), true, vec![], 2);

        node.record_visit(&Utilities([1.0, -1.0]));
        node.record_visit(&Utilities([0.0, 0.0]));
        node.record_visit(&Utilities([1.0, -1.0]));

        assert_eq!(node.visits(), 3);
        assert_approx_eq!(node.score_sum(1), 2.0);
        assert_approx_eq!(node.score_sum(2), -2.0);
        assert_approx_eq!(node.mean_score(1), 2.0 / 3.0);
        assert_eq!(node.score_sum(0), 0.0);
    }

    #[test]
    fn test_score_sum_keeps_counting_past_f32_precision() {
        let mut node: UCTNode<(), u8> = UCTNode::new(None, None, (), true, vec![], 2);
        let visits = (1 << 24) + 16;

        for _ in 0..visits {
            node.record_visit(&Utilities([1.0, -1.0]));
        }

        assert_eq!(node.visits(), visits);
        assert_eq!(node.score_sum(1), visits as f64);
        assert_eq!(node.score_sum(2), -(visits as f64));
        assert_eq!(node.mean_score(1), 1.0);
    }
}
