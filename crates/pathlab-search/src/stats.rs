//! End-of-run measurements.

use pathlab_grid::{Board, CellKind};

/// Final numbers for a finished run.
///
/// `path_length` counts the cells walked after leaving the start, end cell
/// included, and is 0 for a failed run. `visited_count` counts every cell
/// the search expanded, path and end cells included.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub visited_count: usize,
    pub path_length: usize,
    pub succeeded: bool,
}

impl Stats {
    /// Measure a board in its terminal state.
    ///
    /// The end cell never carries a run mark, so on success it is counted
    /// into both totals here instead of during the scan.
    pub(crate) fn measure(board: &Board, succeeded: bool) -> Self {
        let mut visited_count = 0;
        let mut path_length = 0;
        for &kind in board.cells() {
            match kind {
                CellKind::Visited => visited_count += 1,
                CellKind::Path => {
                    visited_count += 1;
                    path_length += 1;
                }
                _ => {}
            }
        }
        if succeeded {
            visited_count += 1;
            path_length += 1;
        }
        Self {
            visited_count,
            path_length,
            succeeded,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = Stats {
            visited_count: 12,
            path_length: 5,
            succeeded: true,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
