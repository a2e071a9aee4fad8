//! Path reconstruction from predecessor links.

use crate::node::{NO_PARENT, Node};

/// Walk predecessor links from `goal` back to `seed` and return the cells
/// in seed-to-goal order, excluding the seed and including the goal.
///
/// A chain that runs out (or loops) before reaching the seed means the run
/// state was corrupted; that is a bug, so it asserts in debug builds and
/// reports `None` in release builds for the caller to surface as an error.
pub(crate) fn reconstruct(nodes: &[Node], seed: usize, goal: usize) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut cur = goal;
    while cur != seed {
        if cur == NO_PARENT || path.len() > nodes.len() {
            debug_assert!(false, "predecessor chain broke before reaching the run seed");
            log::error!("predecessor chain broke before reaching the run seed");
            return None;
        }
        path.push(cur);
        cur = nodes[cur].parent;
    }
    path.reverse();
    Some(path)
}
