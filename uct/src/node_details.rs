use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use generational_arena::Index;
use itertools::Itertools;

use crate::selection::exploration_log;
use crate::SearchTree;

pub struct NodeDetails<A> {
    pub visits: usize,
    pub children: Vec<(A, UCB)>,
}

impl<A> NodeDetails<A> {
    pub fn best(&self) -> Option<&(A, UCB)> {
        self.children.first()
    }
}

impl<A: Display> Display for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = format!(
            "[{}]",
            self.children
                .iter()
                .fold(String::new(), |acc, (a, ucb)| acc
                    + &format!("\n\t(A: {}, {}),", a, ucb))
        );

        write!(
            f,
            "V: {visits}, Actions: {actions}",
            visits = self.visits,
            actions = actions
        )
    }
}

impl<A: Display> Debug for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Statistics of a single child as seen by the player to move at its parent.
#[derive(PartialEq, Clone, Copy)]
#[allow(non_snake_case)]
pub struct UCB {
    pub Nsa: usize,
    pub Qsa: f32,
    pub Usa: f32,
    pub UCB: f32,
}

impl Display for UCB {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Nsa: {Nsa}, Qsa: {Qsa:.3}, Usa: {Usa:.3}, UCB: {UCB:.3}",
            Nsa = self.Nsa,
            Qsa = self.Qsa,
            Usa = self.Usa,
            UCB = self.UCB,
        )
    }
}

impl Debug for UCB {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl UCB {
    /// Most visited first, then the highest mean score.
    fn cmp_visits_desc(&self, other: &Self) -> Ordering {
        other
            .Nsa
            .cmp(&self.Nsa)
            .then_with(|| other.Qsa.partial_cmp(&self.Qsa).unwrap_or(Ordering::Equal))
    }
}

impl<S, A: Clone> SearchTree<S, A> {
    /// Details of the children of `index` from the perspective of `mover`, most visited first.
    pub fn node_details(&self, index: Index, mover: usize, exploration: f32) -> NodeDetails<A> {
        let node = self.node(index);
        let exploration_log = exploration_log(exploration, node.visits());

        let children = self
            .child_nodes(index)
            .filter_map(|(_, child)| {
                let action = child.action()?.clone();
                let visits = child.visits();
                let (q, u) = if visits == 0 {
                    (0.0, f32::INFINITY)
                } else {
                    (
                        child.mean_score(mover) as f32,
                        (exploration_log / visits as f64).sqrt() as f32,
                    )
                };

                let ucb = UCB {
                    Nsa: visits,
                    Qsa: q,
                    Usa: u,
                    UCB: q + u,
                };

                Some((action, ucb))
            })
            .sorted_by(|(_, a), (_, b)| a.cmp_visits_desc(b))
            .collect();

        NodeDetails {
            visits: node.visits(),
            children,
        }
    }

    pub fn root_details(&self, mover: usize, exploration: f32) -> NodeDetails<A> {
        self.node_details(self.root(), mover, exploration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ucb(visits: usize, mean: f32) -> UCB {
        UCB {
            Nsa: visits,
            Qsa: mean,
            Usa: 0.0,
            UCB: mean,
        }
    }

    #[test]
    fn test_orders_by_visits_first() {
        assert_eq!(ucb(5, -1.0).cmp_visits_desc(&ucb(3, 1.0)), Ordering::Less);
        assert_eq!(ucb(3, 1.0).cmp_visits_desc(&ucb(5, -1.0)), Ordering::Greater);
    }

    #[test]
    fn test_orders_by_mean_on_equal_visits() {
        assert_eq!(ucb(4, 0.5).cmp_visits_desc(&ucb(4, 0.1)), Ordering::Less);
        assert_eq!(ucb(4, 0.5).cmp_visits_desc(&ucb(4, 0.5)), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        let details = NodeDetails {
            visits: 3,
            children: vec![(7, ucb(2, 0.5)), (1, ucb(1, -1.0))],
        };

        let display = format!("{}", details);

        assert!(display.starts_with("V: 3, Actions: ["));
        assert!(display.contains("(A: 7, Nsa: 2, Qsa: 0.500"));
    }
}
