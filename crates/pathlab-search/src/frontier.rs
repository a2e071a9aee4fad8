//! The three frontier disciplines behind one type.

use std::collections::VecDeque;

use crate::node::Node;
use crate::run::Algorithm;

/// Pending-cell store. The variant decides the expansion order.
///
/// An exhausted frontier reports itself through [`pop_next`](Self::pop_next)
/// returning `None`. The scored variant keeps insertion order and scans
/// linearly for the lowest `f` on every pop, with ties going to the earliest
/// insertion. That is quadratic in the open-set size, but the tie-break is
/// part of the observable expansion order, which a heap would not preserve.
#[derive(Debug)]
pub(crate) enum Frontier {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Scored(Vec<usize>),
}

impl Frontier {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs | Algorithm::Dijkstra => Self::Fifo(VecDeque::new()),
            Algorithm::Dfs => Self::Lifo(Vec::new()),
            Algorithm::AStar => Self::Scored(Vec::new()),
        }
    }

    pub(crate) fn push(&mut self, idx: usize) {
        match self {
            Self::Fifo(q) => q.push_back(idx),
            Self::Lifo(s) => s.push(idx),
            Self::Scored(open) => open.push(idx),
        }
    }

    /// Remove and return the next cell per this frontier's policy.
    pub(crate) fn pop_next(&mut self, nodes: &[Node]) -> Option<usize> {
        match self {
            Self::Fifo(q) => q.pop_front(),
            Self::Lifo(s) => s.pop(),
            Self::Scored(open) => {
                if open.is_empty() {
                    return None;
                }
                let mut best = 0;
                for (i, &idx) in open.iter().enumerate().skip(1) {
                    // Strict comparison keeps the first minimum on ties.
                    if nodes[idx].f < nodes[open[best]].f {
                        best = i;
                    }
                }
                // remove, not swap_remove: the survivors keep their
                // insertion order for later tie-breaks.
                Some(open.remove(best))
            }
        }
    }

    /// Open-set membership. Only the scored variant is ever asked, but the
    /// answer is well-defined for all three.
    pub(crate) fn contains(&self, idx: usize) -> bool {
        match self {
            Self::Fifo(q) => q.contains(&idx),
            Self::Lifo(s) => s.contains(&idx),
            Self::Scored(open) => open.contains(&idx),
        }
    }
}
