use rand::Rng;

use crate::{ReservoirMax, SearchTree, UCTError};

/// Robust child: the action leading to the most visited child of the root.
///
/// Children with an equal visit count are chosen between uniformly at random.
pub fn robust_child<S, A, R>(tree: &SearchTree<S, A>, rng: &mut R) -> Result<A, UCTError>
where
    A: Clone,
    R: Rng + ?Sized,
{
    let mut best = ReservoirMax::new();

    for (_, child) in tree.child_nodes(tree.root()) {
        best.offer(child, child.visits(), rng);
    }

    best.into_best()
        .and_then(|child| child.action().cloned())
        .ok_or(UCTError::EmptyTree)
}
