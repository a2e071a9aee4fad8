//! Random obstacle scatter for dressing a board quickly.

use pathlab_grid::{CellKind, Coord};
use pathlab_search::Engine;
use rand::{Rng, RngExt};

/// Chance, in percent, that a blank cell turns into an obstacle.
const FILL_PCT: i32 = 25;

/// Sprinkles obstacles over the blank cells. Designations and existing
/// obstacles are left alone, so repeated calls only thicken the field.
pub fn sprinkle(engine: &mut Engine, rng: &mut impl Rng) {
    let side = engine.board().side() as i32;
    for row in 0..side {
        for col in 0..side {
            let c = Coord::new(row, col);
            if engine.board().at(c) != Some(CellKind::Blank) {
                continue;
            }
            if rng.random_range(0..100) < FILL_PCT {
                let _ = engine.place(c, CellKind::Obstacle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn engine_with_ends() -> Engine {
        let mut engine = Engine::new(10);
        engine.place(Coord::new(0, 0), CellKind::Start).unwrap();
        engine.place(Coord::new(9, 9), CellKind::End).unwrap();
        engine
    }

    #[test]
    fn leaves_designations_alone() {
        let mut engine = engine_with_ends();
        sprinkle(&mut engine, &mut StdRng::seed_from_u64(7));

        assert_eq!(engine.board().start(), Some(Coord::new(0, 0)));
        assert_eq!(engine.board().end(), Some(Coord::new(9, 9)));
        let obstacles = engine
            .board()
            .cells()
            .iter()
            .filter(|&&k| k == CellKind::Obstacle)
            .count();
        assert!(obstacles > 0);
        assert!(obstacles < engine.board().cell_count() - 2);
    }

    #[test]
    fn same_seed_same_board() {
        let mut a = engine_with_ends();
        let mut b = engine_with_ends();
        sprinkle(&mut a, &mut StdRng::seed_from_u64(99));
        sprinkle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.board().to_string(), b.board().to_string());
    }
}
