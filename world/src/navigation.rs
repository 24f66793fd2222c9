//! Orthogonal neighbor enumeration used by the world's query surface.

use checkpoint_route_core::{CellCoord, Direction};

/// In-bounds orthogonal neighbors of `cell`, ordered north, south, west, east.
///
/// The order is part of the search contract: frontier ties are resolved by
/// insertion order, so it must never depend on anything but the cell itself.
pub(crate) fn neighbors(cell: CellCoord, columns: u32, rows: u32) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    for direction in Direction::ALL {
        let Some(candidate) = cell.step(direction) else {
            continue;
        };
        if candidate.column() >= columns || candidate.row() >= rows {
            continue;
        }
        candidates[count] = Some(candidate);
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cells_enumerate_north_south_west_east() {
        let found: Vec<_> = neighbors(CellCoord::new(1, 1), 3, 3).collect();
        assert_eq!(
            found,
            vec![
                CellCoord::new(1, 0),
                CellCoord::new(1, 2),
                CellCoord::new(0, 1),
                CellCoord::new(2, 1),
            ]
        );
    }

    #[test]
    fn corner_cells_skip_out_of_bounds_candidates() {
        let found: Vec<_> = neighbors(CellCoord::new(0, 0), 3, 4).collect();
        assert_eq!(found, vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]);

        let found: Vec<_> = neighbors(CellCoord::new(2, 3), 3, 4).collect();
        assert_eq!(found, vec![CellCoord::new(2, 2), CellCoord::new(1, 3)]);
    }

    #[test]
    fn single_row_grid_only_moves_sideways() {
        let found: Vec<_> = neighbors(CellCoord::new(1, 0), 3, 1).collect();
        assert_eq!(found, vec![CellCoord::new(0, 0), CellCoord::new(2, 0)]);
    }
}
