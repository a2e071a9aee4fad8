//! The editable square board a search runs on.
//!
//! A [`Board`] is a flat arena of [`CellKind`]s plus the bookkeeping for the
//! single-occupancy Start and End designations. It knows nothing about
//! algorithms; the engine addresses it through flat indices and paints run
//! marks through [`mark`](Board::mark), which refuses to overwrite the
//! endpoint designations.

use crate::cell::CellKind;
use crate::geom::Coord;
use std::fmt;

/// A square grid of cells with tracked Start/End occupants.
///
/// Cells are stored row-major (`row * side + col`). Boards can be built
/// blank with [`new`](Self::new) or parsed from an ASCII layout with
/// [`parse`](Self::parse); [`Display`](fmt::Display) produces the same
/// layout back, which is also handy for debugging dumps.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    side: usize,
    cells: Vec<CellKind>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Board {
    /// Create a blank `side` × `side` board.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![CellKind::Blank; side * side],
            start: None,
            end: None,
        }
    }

    /// Parse a board from an ASCII layout.
    ///
    /// One line per row, one glyph per cell (see [`CellKind::glyph`]).
    /// The layout must be square and contain at most one `S` and one `E`.
    /// Leading/trailing whitespace is trimmed from the whole string but
    /// not from individual lines.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let s = s.trim();
        let lines: Vec<&str> = if s.is_empty() {
            Vec::new()
        } else {
            s.lines().collect()
        };
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        for (line, l) in lines.iter().enumerate() {
            if l.chars().count() != cols {
                return Err(BoardError::Ragged { line });
            }
        }
        if rows != cols {
            return Err(BoardError::NotSquare { rows, cols });
        }

        let side = rows;
        let mut board = Self::new(side);
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let coord = Coord::new(row as i32, col as i32);
                let kind = CellKind::from_glyph(ch)
                    .ok_or(BoardError::UnknownGlyph { ch, coord })?;
                match kind {
                    CellKind::Start => {
                        if board.start.is_some() {
                            return Err(BoardError::DuplicateKind { kind, coord });
                        }
                        board.start = Some(coord);
                    }
                    CellKind::End => {
                        if board.end.is_some() {
                            return Err(BoardError::DuplicateKind { kind, coord });
                        }
                        board.end = Some(coord);
                    }
                    _ => {}
                }
                board.cells[row * side + col] = kind;
            }
        }
        Ok(board)
    }

    /// Side length in cells.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side`²).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The full cell arena, row-major.
    #[inline]
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// The current Start cell, if placed.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The current End cell, if placed.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        let side = self.side as i32;
        if c.row < 0 || c.row >= side || c.col < 0 || c.col >= side {
            return None;
        }
        Some(c.row as usize * self.side + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        assert!(idx < self.cells.len());
        Coord::new((idx / self.side) as i32, (idx % self.side) as i32)
    }

    /// The kind at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.index_of(c).map(|i| self.cells[i])
    }

    /// The kind at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    #[inline]
    pub fn kind(&self, idx: usize) -> CellKind {
        self.cells[idx]
    }

    /// Place a designation at a coordinate.
    ///
    /// Placing `Start` or `End` moves the designation: the previous occupant
    /// cell (if any) reverts to blank. Placing anything over the current
    /// Start or End cell drops that tracking. Run marks are not placeable.
    pub fn place(&mut self, c: Coord, kind: CellKind) -> Result<(), BoardError> {
        let idx = self.index_of(c).ok_or(BoardError::OutOfBounds(c))?;
        if kind.is_run_mark() {
            return Err(BoardError::NotPlaceable(kind));
        }
        // Whatever occupied the target is gone now.
        if self.start == Some(c) {
            self.start = None;
        }
        if self.end == Some(c) {
            self.end = None;
        }
        match kind {
            CellKind::Start => {
                if let Some(old) = self.start.take() {
                    if let Some(old_idx) = self.index_of(old) {
                        self.cells[old_idx] = CellKind::Blank;
                    }
                }
                self.start = Some(c);
            }
            CellKind::End => {
                if let Some(old) = self.end.take() {
                    if let Some(old_idx) = self.index_of(old) {
                        self.cells[old_idx] = CellKind::Blank;
                    }
                }
                self.end = Some(c);
            }
            _ => {}
        }
        self.cells[idx] = kind;
        Ok(())
    }

    /// Revert a cell to blank. Equivalent to placing [`CellKind::Blank`].
    pub fn erase(&mut self, c: Coord) -> Result<(), BoardError> {
        self.place(c, CellKind::Blank)
    }

    /// Paint a run mark at a flat index, preserving Start/End designations.
    ///
    /// Returns whether the cell's kind actually changed, so callers can
    /// collect redraw deltas.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    pub fn mark(&mut self, idx: usize, kind: CellKind) -> bool {
        debug_assert!(kind.is_run_mark());
        let cur = self.cells[idx];
        if cur == CellKind::Start || cur == CellKind::End || cur == kind {
            return false;
        }
        self.cells[idx] = kind;
        true
    }

    /// Revert every run mark to blank, leaving designations alone.
    pub fn reset_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.is_run_mark() {
                *cell = CellKind::Blank;
            }
        }
    }

    /// Wipe the whole board back to blank, dropping Start/End.
    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Blank);
        self.start = None;
        self.end = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.side {
                write!(f, "{}", self.cells[row * self.side + col].glyph())?;
            }
        }
        Ok(())
    }
}

/// Errors from board edits and layout parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate outside the board was rejected (never clamped).
    OutOfBounds(Coord),
    /// A run mark was passed to a designation edit.
    NotPlaceable(CellKind),
    /// A layout line has a different width than the first.
    Ragged { line: usize },
    /// The layout is rectangular but not square.
    NotSquare { rows: usize, cols: usize },
    /// A layout character maps to no cell kind.
    UnknownGlyph { ch: char, coord: Coord },
    /// A second Start or End in a layout.
    DuplicateKind { kind: CellKind, coord: Coord },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "board: coordinate {c} is out of bounds"),
            Self::NotPlaceable(kind) => {
                write!(f, "board: {kind:?} is a run mark, not a placeable designation")
            }
            Self::Ragged { line } => {
                write!(f, "board layout: line {line} has a different width")
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "board layout: {rows} rows by {cols} columns, expected square")
            }
            Self::UnknownGlyph { ch, coord } => {
                write!(f, "board layout: unknown glyph \u{201c}{ch}\u{201d} at {coord}")
            }
            Self::DuplicateKind { kind, coord } => {
                write!(f, "board layout: second {kind:?} at {coord}")
            }
        }
    }
}

impl std::error::Error for BoardError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let board = Board::parse("S.#\n...\n#.E").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), board.to_string());
        assert_eq!(back.start(), board.start());
        assert_eq!(back.end(), board.end());
    }

    #[test]
    fn cell_kind_round_trip() {
        let kind = CellKind::Frontier;
        let json = serde_json::to_string(&kind).unwrap();
        let back: CellKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
