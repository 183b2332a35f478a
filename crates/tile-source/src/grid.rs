//! Square grids of tiles.

use crate::tile::Tile;

/// A fully populated `width x width` grid of tiles.
///
/// Indexed `[x][y]`: the outer index is the horizontal tile position and the
/// inner index the vertical one, matching how the server numbers tiles.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Wrap pre-built cells. Returns `None` unless the cells form a
    /// non-empty square.
    pub fn from_cells(cells: Vec<Vec<Tile>>) -> Option<Self> {
        let width = cells.len();
        if width == 0 || cells.iter().any(|column| column.len() != width) {
            return None;
        }
        Some(Self { cells })
    }

    pub(crate) fn from_cells_unchecked(cells: Vec<Vec<Tile>>) -> Self {
        Self { cells }
    }

    /// Tiles along each edge.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.cells.get(x).and_then(|column| column.get(y))
    }

    /// Consume the grid, yielding owned tiles with their position.
    pub fn into_tiles(self) -> impl Iterator<Item = (usize, usize, Tile)> {
        self.cells
            .into_iter()
            .enumerate()
            .flat_map(|(x, column)| column.into_iter().enumerate().map(move |(y, tile)| (x, y, tile)))
    }
}
