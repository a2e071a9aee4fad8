//! Stepwise grid search for the pathlab sandbox.
//!
//! Four algorithms animate over a [`pathlab_grid::Board`], one cell
//! expansion per [`Engine::step`] call, so a front-end can pace and draw
//! the exploration:
//!
//! | Algorithm | Frontier | Guarantee |
//! |---|---|---|
//! | [`Algorithm::Bfs`] | FIFO queue | shortest path |
//! | [`Algorithm::Dfs`] | LIFO stack | finds *a* path |
//! | [`Algorithm::Dijkstra`] | FIFO queue (uniform costs) | shortest path |
//! | [`Algorithm::AStar`] | scored set, lowest `f` first | shortest path under the Manhattan heuristic |
//!
//! Everything goes through the [`Engine`] facade: it owns the board, gates
//! edits while a run is live, and exposes per-cell views, the reconstructed
//! path, and end-of-run [`Stats`].

mod adjacency;
mod distance;
mod engine;
mod frontier;
mod node;
mod path;
mod run;
mod stats;

pub use distance::{manhattan, squared_axes};
pub use engine::{CellView, Engine, EngineError, SearchConfig, StepReport};
pub use run::{Algorithm, CellDelta, RunStatus};
pub use stats::Stats;
