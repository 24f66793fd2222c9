//! Corridor carving for generated worlds.
//!
//! Generated terrain starts as solid rough ground. Straight corridors are cut
//! between every pair of points of interest, and a small clearing with two
//! lateral corridors is opened around each point so that routes can swing
//! past a checkpoint instead of being funnelled through it.

use checkpoint_route_core::{CellCoord, TerrainKind};

use crate::grid::TerrainGrid;

const CLEARING_RADIUS: i64 = 2;
const LATERAL_OFFSET: i64 = 3;
const LATERAL_REACH: i64 = 5;

/// Builds rough terrain with corridors linking the provided points.
pub(crate) fn generate(columns: u32, rows: u32, points: &[CellCoord]) -> TerrainGrid {
    let mut grid = TerrainGrid::filled(columns, rows, TerrainKind::Rough);

    for (offset, &from) in points.iter().enumerate() {
        for &to in &points[offset + 1..] {
            carve_line(&mut grid, from, to);
        }
    }

    for &point in points {
        open_clearing(&mut grid, point);
    }

    grid
}

/// Terrain laid down in a carved cell, alternating in a checkerboard.
fn corridor_terrain(column: i64, row: i64) -> TerrainKind {
    if (column + row) % 2 == 0 {
        TerrainKind::Clear
    } else {
        TerrainKind::Difficult
    }
}

fn carve_line(grid: &mut TerrainGrid, from: CellCoord, to: CellCoord) {
    let (from_column, from_row) = signed(from);
    let (to_column, to_row) = signed(to);
    let delta_column = to_column - from_column;
    let delta_row = to_row - from_row;
    let steps = delta_column.abs().max(delta_row.abs());

    if steps == 0 {
        return;
    }

    let step_column = delta_column as f64 / steps as f64;
    let step_row = delta_row as f64 / steps as f64;

    for step in 0..=steps {
        let column = (from_column as f64 + step_column * step as f64).round() as i64;
        let row = (from_row as f64 + step_row * step as f64).round() as i64;
        if let Some(cell) = cell_at(grid, column, row) {
            grid.set(cell, corridor_terrain(column, row));
        }
    }
}

fn open_clearing(grid: &mut TerrainGrid, center: CellCoord) {
    let (center_column, center_row) = signed(center);

    for row_offset in -CLEARING_RADIUS..=CLEARING_RADIUS {
        for column_offset in -CLEARING_RADIUS..=CLEARING_RADIUS {
            let column = center_column + column_offset;
            let row = center_row + row_offset;
            if let Some(cell) = cell_at(grid, column, row) {
                grid.carve_if_rough(cell, corridor_terrain(column, row));
            }
        }
    }

    for row_offset in -LATERAL_REACH..=LATERAL_REACH {
        let row = center_row + row_offset;
        for column in [center_column - LATERAL_OFFSET, center_column + LATERAL_OFFSET] {
            if let Some(cell) = cell_at(grid, column, row) {
                grid.carve_if_rough(cell, corridor_terrain(column, row));
            }
        }
    }
}

fn signed(cell: CellCoord) -> (i64, i64) {
    (i64::from(cell.column()), i64::from(cell.row()))
}

fn cell_at(grid: &TerrainGrid, column: i64, row: i64) -> Option<CellCoord> {
    let column = u32::try_from(column).ok()?;
    let row = u32::try_from(row).ok()?;
    let cell = CellCoord::new(column, row);
    grid.contains(cell).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_open(kind: Option<TerrainKind>) -> bool {
        matches!(kind, Some(TerrainKind::Clear | TerrainKind::Difficult))
    }

    #[test]
    fn straight_corridor_alternates_terrain() {
        let mut grid = TerrainGrid::filled(10, 1, TerrainKind::Rough);
        carve_line(&mut grid, CellCoord::new(0, 0), CellCoord::new(9, 0));

        for column in 0..10 {
            let expected = corridor_terrain(i64::from(column), 0);
            assert_eq!(grid.get(CellCoord::new(column, 0)), Some(expected));
        }
        assert_eq!(grid.get(CellCoord::new(0, 0)), Some(TerrainKind::Clear));
        assert_eq!(grid.get(CellCoord::new(1, 0)), Some(TerrainKind::Difficult));
    }

    #[test]
    fn diagonal_corridor_rounds_half_away_from_zero() {
        let mut grid = TerrainGrid::filled(5, 3, TerrainKind::Rough);
        carve_line(&mut grid, CellCoord::new(0, 0), CellCoord::new(4, 2));

        for cell in [
            CellCoord::new(0, 0),
            CellCoord::new(1, 1),
            CellCoord::new(2, 1),
            CellCoord::new(3, 2),
            CellCoord::new(4, 2),
        ] {
            assert!(is_open(grid.get(cell)), "{cell} should be carved");
        }
        assert_eq!(grid.get(CellCoord::new(1, 0)), Some(TerrainKind::Rough));
        assert_eq!(grid.get(CellCoord::new(4, 0)), Some(TerrainKind::Rough));
    }

    #[test]
    fn clearing_leaves_far_cells_rough() {
        let grid = generate(20, 20, &[CellCoord::new(10, 10)]);

        assert!(is_open(grid.get(CellCoord::new(8, 8))));
        assert!(is_open(grid.get(CellCoord::new(7, 15))));
        assert!(is_open(grid.get(CellCoord::new(13, 5))));
        assert_eq!(grid.get(CellCoord::new(0, 0)), Some(TerrainKind::Rough));
        assert_eq!(grid.get(CellCoord::new(10, 16)), Some(TerrainKind::Rough));
    }

    #[test]
    fn generation_is_deterministic() {
        let points = [
            CellCoord::new(1, 1),
            CellCoord::new(7, 3),
            CellCoord::new(4, 9),
        ];
        assert_eq!(generate(12, 12, &points), generate(12, 12, &points));
    }
}
