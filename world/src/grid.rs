//! Dense terrain storage backing the world model.

use checkpoint_route_core::{CellCoord, TerrainKind};

/// Row-major terrain grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TerrainGrid {
    columns: u32,
    rows: u32,
    cells: Vec<TerrainKind>,
}

impl TerrainGrid {
    pub(crate) fn filled(columns: u32, rows: u32, kind: TerrainKind) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![kind; capacity],
        }
    }

    pub(crate) fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    pub(crate) fn get(&self, cell: CellCoord) -> Option<TerrainKind> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    pub(crate) fn set(&mut self, cell: CellCoord, kind: TerrainKind) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = kind;
            }
        }
    }

    /// Replaces rough terrain only, leaving already carved cells untouched.
    pub(crate) fn carve_if_rough(&mut self, cell: CellCoord, kind: TerrainKind) {
        if self.get(cell) == Some(TerrainKind::Rough) {
            self.set(cell, kind);
        }
    }

    pub(crate) fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[TerrainKind]> {
        let width = usize::try_from(self.columns).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }
}
