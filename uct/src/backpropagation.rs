use engine::Value;
use generational_arena::Index;

use crate::SearchTree;

/// Adds the utilities of a finished game to every node from `leaf` up to and including the root.
pub(crate) fn backpropagate<S, A, V>(tree: &mut SearchTree<S, A>, leaf: Index, value: &V)
where
    V: Value,
{
    let mut current = Some(leaf);

    while let Some(index) = current {
        let node = tree.node_mut(index);
        node.record_visit(value);
        current = node.parent();
    }
}
