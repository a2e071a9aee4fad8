//! The engine facade: board edits, run control, stepping, queries.

use std::fmt;

use pathlab_grid::{Board, BoardError, CellKind, Coord};

use crate::run::{Algorithm, CellDelta, Run, RunStatus};
use crate::stats::Stats;

/// Tunables consumed when a run starts.
///
/// Changing the config never affects a run already in flight; the engine
/// snapshots it at [`Engine::start`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Replace the Manhattan heuristic with squared axis deltas, which
    /// biases A* exploration toward the diagonal. Inadmissible on purpose;
    /// the other algorithms ignore it.
    pub diagonal_priority: bool,
}

/// What one [`Engine::step`] did: the status afterwards and the cells
/// whose kind changed, for incremental redraws.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    pub status: RunStatus,
    pub changed: Vec<CellDelta>,
}

/// Snapshot of a single cell: its kind plus whatever cost fields the
/// current run tracks for it (`g` for Dijkstra; `g`, `h`, `f` for A*).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub kind: CellKind,
    pub g: Option<i32>,
    pub h: Option<i32>,
    pub f: Option<i32>,
}

/// The interactive search engine: one board, at most one run.
///
/// The caller paces execution by calling [`step`](Self::step); each call
/// performs at most one cell expansion, so an animation loop can draw
/// between calls. Board edits are rejected while a run is in progress;
/// [`reset_run`](Self::reset_run) cancels it.
pub struct Engine {
    board: Board,
    run: Option<Run>,
    config: SearchConfig,
}

impl Engine {
    /// An engine over a blank `side` × `side` board.
    pub fn new(side: usize) -> Self {
        Self::from_board(Board::new(side))
    }

    /// An engine over an existing board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            run: None,
            config: SearchConfig::default(),
        }
    }

    /// The underlying board, for rendering and inspection.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The config that the next [`start`](Self::start) will snapshot.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Mutable access to the config. Takes effect at the next start.
    #[inline]
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Place a designation. Rejected while a run is in progress.
    pub fn place(&mut self, c: Coord, kind: CellKind) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::Busy);
        }
        self.board.place(c, kind)?;
        Ok(())
    }

    /// Revert a cell to blank. Rejected while a run is in progress.
    pub fn erase(&mut self, c: Coord) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::Busy);
        }
        self.board.erase(c)?;
        Ok(())
    }

    /// Wipe the board and drop any finished run. Rejected while running.
    pub fn clear_board(&mut self) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::Busy);
        }
        self.run = None;
        self.board.clear();
        Ok(())
    }

    /// Drop the run (cancelling it if live) and revert its marks.
    /// Designations stay. Idempotent.
    pub fn reset_run(&mut self) {
        self.board.reset_marks();
        self.run = None;
    }

    /// Begin a run with the given algorithm.
    ///
    /// Requires a placed Start and End and no run in progress. Marks from a
    /// previous finished run are reverted, and that run is replaced.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::Busy);
        }
        let start = self.board.start().ok_or(EngineError::StartUnplaced)?;
        let end = self.board.end().ok_or(EngineError::EndUnplaced)?;
        let seed = self.board.index_of(start).ok_or(EngineError::StartUnplaced)?;
        let goal = self.board.index_of(end).ok_or(EngineError::EndUnplaced)?;
        self.board.reset_marks();
        self.run = Some(Run::new(
            &self.board,
            algorithm,
            seed,
            goal,
            self.config.diagonal_priority,
        ));
        Ok(())
    }

    /// Perform one unit of search work.
    ///
    /// With no run in progress (idle or terminal) this is a no-op that
    /// reports the current status, so render loops can call it blindly.
    /// The only error is a corrupted run, which also leaves it `Failed`.
    pub fn step(&mut self) -> Result<StepReport, EngineError> {
        let Some(run) = self.run.as_mut() else {
            return Ok(StepReport {
                status: RunStatus::Idle,
                changed: Vec::new(),
            });
        };
        if run.status != RunStatus::Running {
            return Ok(StepReport {
                status: run.status,
                changed: Vec::new(),
            });
        }
        let mut changed = Vec::new();
        match run.step(&mut self.board, &mut changed) {
            Ok(()) => Ok(StepReport {
                status: run.status,
                changed,
            }),
            Err(_) => Err(EngineError::MalformedRun),
        }
    }

    /// Whether a run is in progress (started and not yet terminal).
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(
            self.run.as_ref().map(|r| r.status),
            Some(RunStatus::Running)
        )
    }

    /// Current run status; `Idle` when no run exists.
    #[inline]
    pub fn status(&self) -> RunStatus {
        self.run.as_ref().map_or(RunStatus::Idle, |r| r.status)
    }

    /// The algorithm of the current run, if any.
    #[inline]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.run.as_ref().map(|r| r.algorithm)
    }

    /// Inspect one cell. Out-of-bounds coordinates are rejected.
    pub fn cell(&self, c: Coord) -> Result<CellView, EngineError> {
        let idx = self
            .board
            .index_of(c)
            .ok_or(BoardError::OutOfBounds(c))?;
        let mut view = CellView {
            kind: self.board.kind(idx),
            g: None,
            h: None,
            f: None,
        };
        if let Some(run) = &self.run {
            let node = &run.nodes[idx];
            if node.visited {
                match run.algorithm {
                    Algorithm::Dijkstra => view.g = Some(node.g),
                    Algorithm::AStar => {
                        view.g = Some(node.g);
                        view.h = Some(node.h);
                        view.f = Some(node.f);
                    }
                    _ => {}
                }
            }
        }
        Ok(view)
    }

    /// Final numbers for the current run; `None` until it reaches a
    /// terminal state.
    #[inline]
    pub fn stats(&self) -> Option<Stats> {
        self.run.as_ref().and_then(|r| r.stats)
    }

    /// The reconstructed path in start-to-end order, start cell excluded,
    /// end cell included. Empty unless the run succeeded.
    pub fn path(&self) -> Vec<Coord> {
        match &self.run {
            Some(run) => run.path.iter().map(|&i| self.board.coord_of(i)).collect(),
            None => Vec::new(),
        }
    }
}

/// Errors from engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A run is in progress; edits and starts are rejected until it
    /// finishes or is reset.
    Busy,
    /// No Start cell is placed.
    StartUnplaced,
    /// No End cell is placed.
    EndUnplaced,
    /// The run state is corrupted (broken predecessor chain).
    MalformedRun,
    /// A board-level rejection, e.g. an out-of-bounds coordinate.
    Board(BoardError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "engine: a run is already in progress"),
            Self::StartUnplaced => write!(f, "engine: no start cell is placed"),
            Self::EndUnplaced => write!(f, "engine: no end cell is placed"),
            Self::MalformedRun => {
                write!(f, "engine: run state is corrupted (broken predecessor chain)")
            }
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for EngineError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
