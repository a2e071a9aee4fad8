//! Cell vocabulary shared by the board, the engine, and front-ends.

/// What a board cell currently is.
///
/// The first four kinds are *designations* placed by the user; the last three
/// are *run marks* painted by the search engine while a run is animating.
/// Every consumer matches on this exhaustively, so adding a kind is a
/// compile-visible change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Walkable, untouched.
    #[default]
    Blank,
    /// Impassable wall.
    Obstacle,
    /// Search origin. At most one per board.
    Start,
    /// Search goal. At most one per board.
    End,
    /// Discovered and queued, not yet expanded.
    Frontier,
    /// Expanded (or discovered, for algorithms without a re-coloring pass).
    Visited,
    /// On the reconstructed start-to-end path.
    Path,
}

impl CellKind {
    /// The glyph used in textual board layouts and dumps.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Blank => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Frontier => '+',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). Returns `None` for unknown characters.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Blank,
            '#' => Self::Obstacle,
            'S' => Self::Start,
            'E' => Self::End,
            '+' => Self::Frontier,
            'o' => Self::Visited,
            '*' => Self::Path,
            _ => return None,
        })
    }

    /// Whether this kind is painted by a run rather than placed by the user.
    #[inline]
    pub const fn is_run_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Whether this kind is a user placement the board accepts in an edit.
    #[inline]
    pub const fn is_designation(self) -> bool {
        !self.is_run_mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellKind; 7] = [
        CellKind::Blank,
        CellKind::Obstacle,
        CellKind::Start,
        CellKind::End,
        CellKind::Frontier,
        CellKind::Visited,
        CellKind::Path,
    ];

    #[test]
    fn glyphs_round_trip() {
        for kind in ALL {
            assert_eq!(CellKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(CellKind::from_glyph('?'), None);
    }

    #[test]
    fn designation_and_run_mark_partition() {
        for kind in ALL {
            assert_ne!(kind.is_designation(), kind.is_run_mark());
        }
        assert!(CellKind::Start.is_designation());
        assert!(CellKind::Frontier.is_run_mark());
    }
}
