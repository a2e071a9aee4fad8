//! Ordered neighbor lists, built once per run.
//!
//! The probe order is a behavioral contract: combined with the frontier's
//! pop policy it decides which branch a search explores first, so it is
//! pinned per algorithm family and covered by tests.

use pathlab_grid::{Board, Coord};

use crate::node::Node;

/// Probe order for the queue-driven algorithms (BFS, Dijkstra, A*):
/// down, right, up, left.
pub(crate) const QUEUE_DIRS: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(0, -1),
];

/// Probe order for the stack-driven algorithm (DFS): left, down, right, up.
/// With LIFO popping the last push wins, so DFS walks upward first.
pub(crate) const STACK_DIRS: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
];

/// Fill every node's neighbor list in `dirs` order.
///
/// Off-board probes are dropped here; obstacle cells are kept, since
/// passability is the stepper's concern, not the graph's.
pub(crate) fn build(board: &Board, dirs: &[Coord; 4], nodes: &mut [Node]) {
    for (idx, node) in nodes.iter_mut().enumerate() {
        let c = board.coord_of(idx);
        node.neighbors.clear();
        for d in dirs {
            if let Some(ni) = board.index_of(c + *d) {
                node.neighbors.push(ni);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(board: &Board, dirs: &[Coord; 4]) -> Vec<Node> {
        let mut nodes = vec![Node::default(); board.cell_count()];
        build(board, dirs, &mut nodes);
        nodes
    }

    fn coords(board: &Board, neighbors: &[usize]) -> Vec<Coord> {
        neighbors.iter().map(|&i| board.coord_of(i)).collect()
    }

    #[test]
    fn queue_order_is_down_right_up_left() {
        let board = Board::new(3);
        let nodes = built(&board, &QUEUE_DIRS);
        let center = board.index_of(Coord::new(1, 1)).unwrap();
        assert_eq!(
            coords(&board, &nodes[center].neighbors),
            vec![
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(0, 1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn stack_order_is_left_down_right_up() {
        let board = Board::new(3);
        let nodes = built(&board, &STACK_DIRS);
        let center = board.index_of(Coord::new(1, 1)).unwrap();
        assert_eq!(
            coords(&board, &nodes[center].neighbors),
            vec![
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(0, 1),
            ]
        );
    }

    #[test]
    fn corners_drop_off_board_probes() {
        let board = Board::new(3);
        let nodes = built(&board, &QUEUE_DIRS);
        let corner = board.index_of(Coord::new(0, 0)).unwrap();
        assert_eq!(
            coords(&board, &nodes[corner].neighbors),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn obstacles_stay_in_the_graph() {
        let board = Board::parse(".#.\n...\n...").unwrap();
        let nodes = built(&board, &QUEUE_DIRS);
        let origin = board.index_of(Coord::new(0, 0)).unwrap();
        let wall = board.index_of(Coord::new(0, 1)).unwrap();
        assert!(nodes[origin].neighbors.contains(&wall));
    }
}
