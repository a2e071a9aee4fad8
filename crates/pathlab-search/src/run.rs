//! One search run: the per-cell scratch arena, the frontier, and the
//! one-expansion-per-call steppers.

use std::fmt;

use pathlab_grid::{Board, CellKind, Coord};

use crate::adjacency::{self, QUEUE_DIRS, STACK_DIRS};
use crate::distance;
use crate::frontier::Frontier;
use crate::node::Node;
use crate::path;
use crate::stats::Stats;

/// The search algorithms a run can animate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search. Unweighted, shortest path guaranteed.
    Bfs,
    /// Depth-first search. Walks one branch to exhaustion before backing up.
    Dfs,
    /// Uniform-cost search. Tracks per-cell cost; on this grid every step
    /// costs 1, so it expands exactly like BFS.
    Dijkstra,
    /// Heuristic best-first search over `f = g + h`.
    AStar,
}

impl Algorithm {
    /// All algorithms, in UI cycling order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    fn directions(self) -> &'static [Coord; 4] {
        match self {
            Self::Dfs => &STACK_DIRS,
            _ => &QUEUE_DIRS,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a run currently stands.
///
/// `Idle` is the no-run state reported by the engine; a live run moves
/// `Running` → `Succeeded` or `Failed` and then stays terminal until the
/// next start or reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl RunStatus {
    /// Whether this is an end state (`Succeeded` or `Failed`).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// A cell whose kind changed during a step, for incremental redraws.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellDelta {
    pub coord: Coord,
    pub kind: CellKind,
}

/// Marker for a corrupted run detected mid-step.
pub(crate) struct MalformedRun;

/// Live state of one search, created at start and dropped at reset.
pub(crate) struct Run {
    pub(crate) algorithm: Algorithm,
    pub(crate) status: RunStatus,
    pub(crate) frontier: Frontier,
    pub(crate) nodes: Vec<Node>,
    pub(crate) seed: usize,
    pub(crate) goal: usize,
    pub(crate) path: Vec<usize>,
    pub(crate) stats: Option<Stats>,
    pub(crate) diagonal_priority: bool,
}

impl Run {
    /// Build the scratch arena and seed the frontier. The caller has
    /// validated `seed` and `goal` against the board.
    pub(crate) fn new(
        board: &Board,
        algorithm: Algorithm,
        seed: usize,
        goal: usize,
        diagonal_priority: bool,
    ) -> Self {
        let mut nodes = vec![Node::default(); board.cell_count()];
        adjacency::build(board, algorithm.directions(), &mut nodes);
        // The seed enters with g = h = f = 0, so A* selects it first.
        nodes[seed].visited = true;
        let mut frontier = Frontier::new(algorithm);
        frontier.push(seed);
        Self {
            algorithm,
            status: RunStatus::Running,
            frontier,
            nodes,
            seed,
            goal,
            path: Vec::new(),
            stats: None,
            diagonal_priority,
        }
    }

    fn estimate(&self, a: Coord, b: Coord) -> i32 {
        if self.diagonal_priority {
            distance::squared_axes(a, b)
        } else {
            distance::manhattan(a, b)
        }
    }

    /// Perform one unit of work: expand a single cell (or finish).
    ///
    /// Cell-kind changes are appended to `changed`. The endpoint cells keep
    /// their designation kinds, so they never appear there.
    pub(crate) fn step(
        &mut self,
        board: &mut Board,
        changed: &mut Vec<CellDelta>,
    ) -> Result<(), MalformedRun> {
        debug_assert_eq!(self.status, RunStatus::Running);
        match self.algorithm {
            Algorithm::AStar => self.step_astar(board, changed),
            _ => self.step_uniform(board, changed),
        }
    }

    /// BFS, DFS and Dijkstra differ only in frontier discipline and in
    /// Dijkstra's cost stamping; the expansion protocol is shared.
    fn step_uniform(
        &mut self,
        board: &mut Board,
        changed: &mut Vec<CellDelta>,
    ) -> Result<(), MalformedRun> {
        let Some(current) = self.frontier.pop_next(&self.nodes) else {
            self.fail(board);
            return Ok(());
        };
        // Leaving the frontier: frontier color becomes visited color.
        if board.mark(current, CellKind::Visited) {
            changed.push(CellDelta {
                coord: board.coord_of(current),
                kind: CellKind::Visited,
            });
        }
        if current == self.goal {
            return self.succeed(board, changed);
        }
        let current_g = self.nodes[current].g;
        let neighbors = std::mem::take(&mut self.nodes[current].neighbors);
        for &ni in &neighbors {
            if self.nodes[ni].visited || board.kind(ni) == CellKind::Obstacle {
                continue;
            }
            if self.algorithm == Algorithm::Dijkstra {
                if ni == self.seed {
                    // The seed keeps cost 0.
                    continue;
                }
                self.nodes[ni].g = current_g + 1;
            }
            self.nodes[ni].visited = true;
            self.nodes[ni].parent = current;
            if board.mark(ni, CellKind::Frontier) {
                changed.push(CellDelta {
                    coord: board.coord_of(ni),
                    kind: CellKind::Frontier,
                });
            }
            self.frontier.push(ni);
        }
        self.nodes[current].neighbors = neighbors;
        Ok(())
    }

    fn step_astar(
        &mut self,
        board: &mut Board,
        changed: &mut Vec<CellDelta>,
    ) -> Result<(), MalformedRun> {
        let Some(current) = self.frontier.pop_next(&self.nodes) else {
            self.fail(board);
            return Ok(());
        };
        if current == self.goal {
            return self.succeed(board, changed);
        }
        // Selection removed it from the open set; it is closed from here on
        // and never reopened, even under the inadmissible heuristic.
        self.nodes[current].closed = true;
        if board.mark(current, CellKind::Visited) {
            changed.push(CellDelta {
                coord: board.coord_of(current),
                kind: CellKind::Visited,
            });
        }
        let current_g = self.nodes[current].g;
        let goal_coord = board.coord_of(self.goal);
        let neighbors = std::mem::take(&mut self.nodes[current].neighbors);
        for &ni in &neighbors {
            if self.nodes[ni].closed || board.kind(ni) == CellKind::Obstacle {
                continue;
            }
            let tentative_g = current_g + 1;
            if self.frontier.contains(ni) {
                // Relax an open cell only on strict improvement.
                if tentative_g < self.nodes[ni].g {
                    let h = self.estimate(board.coord_of(ni), goal_coord);
                    let n = &mut self.nodes[ni];
                    n.g = tentative_g;
                    n.h = h;
                    n.f = tentative_g + h;
                    n.parent = current;
                }
            } else {
                let h = self.estimate(board.coord_of(ni), goal_coord);
                let n = &mut self.nodes[ni];
                n.visited = true;
                n.g = tentative_g;
                n.h = h;
                n.f = tentative_g + h;
                n.parent = current;
                if board.mark(ni, CellKind::Frontier) {
                    changed.push(CellDelta {
                        coord: board.coord_of(ni),
                        kind: CellKind::Frontier,
                    });
                }
                self.frontier.push(ni);
            }
        }
        self.nodes[current].neighbors = neighbors;
        Ok(())
    }

    /// Exhausted frontier: no path exists. A normal outcome, not an error.
    fn fail(&mut self, board: &Board) {
        self.status = RunStatus::Failed;
        self.stats = Some(Stats::measure(board, false));
    }

    fn succeed(
        &mut self,
        board: &mut Board,
        changed: &mut Vec<CellDelta>,
    ) -> Result<(), MalformedRun> {
        let Some(path) = path::reconstruct(&self.nodes, self.seed, self.goal) else {
            self.status = RunStatus::Failed;
            return Err(MalformedRun);
        };
        for &idx in &path {
            if board.mark(idx, CellKind::Path) {
                changed.push(CellDelta {
                    coord: board.coord_of(idx),
                    kind: CellKind::Path,
                });
            }
        }
        self.status = RunStatus::Succeeded;
        self.stats = Some(Stats::measure(board, true));
        self.path = path;
        Ok(())
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(algorithm, back);
        }
    }

    #[test]
    fn cell_delta_round_trip() {
        let delta = CellDelta {
            coord: Coord::new(2, 3),
            kind: CellKind::Frontier,
        };
        let json = serde_json::to_string(&delta).unwrap();
        let back: CellDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(delta, back);
    }
}
