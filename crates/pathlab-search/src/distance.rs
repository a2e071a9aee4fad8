use pathlab_grid::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Sum of squared axis deltas.
///
/// Not a metric and not admissible as an A* heuristic: it overestimates
/// hard whenever one axis delta is large, which pulls exploration toward
/// the diagonal between the two cells. Used for the diagonal-priority mode.
#[inline]
pub fn squared_axes(a: Coord, b: Coord) -> i32 {
    let dr = a.row - b.row;
    let dc = a.col - b.col;
    dr * dr + dc * dc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 0);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn squared_axes_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(squared_axes(a, b), 25);
        assert_eq!(squared_axes(b, a), 25);
        assert_eq!(squared_axes(a, a), 0);
    }

    #[test]
    fn squared_axes_overestimates_off_axis() {
        let a = Coord::new(0, 0);
        let b = Coord::new(5, 5);
        assert!(squared_axes(a, b) > manhattan(a, b));
    }
}
