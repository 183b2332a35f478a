//! Grid acquisition with slot rollback.
//!
//! Tiles are fetched one at a time in grid order. The newest slot is often
//! not published yet, in which case the server answers with its placeholder
//! picture. Only the first tile is checked: if it is a placeholder the slot
//! is stepped back and the tile refetched, up to a fixed budget. Every later
//! tile is requested at whatever slot the first one settled on. If the
//! budget runs out the placeholder is kept; that is not an error.

use tracing::{debug, info, instrument, warn};

use himawari_common::{AcquisitionTime, Band, SatResult, ZoomLevel, DEFAULT_BASE_URL};

use crate::fetch::TileFetcher;
use crate::grid::Grid;
use crate::tile::Tile;

/// Settings for [`GridAcquirer`].
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Server prefix the band templates are rooted at
    pub base_url: String,
    /// Maximum number of slot rollbacks for the first tile
    pub max_rollbacks: u32,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_rollbacks: 3,
        }
    }
}

/// Result of a successful acquisition.
#[derive(Debug)]
pub struct Acquisition {
    pub grid: Grid,
    /// Slot the tiles were requested for, after rounding and rollbacks
    pub time: AcquisitionTime,
    /// Rollbacks performed on the first tile
    pub rollbacks: u32,
}

/// Drives a [`TileFetcher`] over a whole grid.
pub struct GridAcquirer<F> {
    fetcher: F,
    config: AcquireConfig,
}

impl<F: TileFetcher> GridAcquirer<F> {
    pub fn new(fetcher: F, config: AcquireConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch every tile for `band` at `zoom`, starting from the slot that
    /// contains `requested`.
    ///
    /// Any fetch or decode failure aborts the whole acquisition.
    #[instrument(skip(self), fields(band = %band, zoom = %zoom))]
    pub async fn acquire(
        &self,
        band: Band,
        zoom: ZoomLevel,
        requested: AcquisitionTime,
    ) -> SatResult<Acquisition> {
        let grid_width = zoom.grid_width();
        let template = band.url_template(&self.config.base_url);

        let mut time = requested;
        time.round();
        info!(
            requested = %requested,
            slot = %time,
            grid_width = grid_width,
            "Acquiring tile grid"
        );

        let mut rollbacks = 0;
        let mut cells = Vec::with_capacity(grid_width as usize);

        for x in 0..grid_width {
            let mut column = Vec::with_capacity(grid_width as usize);
            for y in 0..grid_width {
                let url = template.tile_url(grid_width, &time, x, y);
                let mut tile = self.fetcher.fetch(&url).await?;

                if x == 0 && y == 0 {
                    tile = self
                        .settle_first_tile(tile, &mut time, &mut rollbacks, |t| {
                            template.tile_url(grid_width, t, x, y)
                        })
                        .await?;
                }

                column.push(tile);
            }
            cells.push(column);
        }

        debug!(tiles = grid_width * grid_width, slot = %time, "Grid complete");

        Ok(Acquisition {
            grid: Grid::from_cells_unchecked(cells),
            time,
            rollbacks,
        })
    }

    /// Roll the slot back while the first tile is a placeholder and budget
    /// remains. Stops as soon as real imagery comes back.
    async fn settle_first_tile(
        &self,
        mut tile: Tile,
        time: &mut AcquisitionTime,
        rollbacks: &mut u32,
        url_for: impl Fn(&AcquisitionTime) -> String,
    ) -> SatResult<Tile> {
        while tile.is_placeholder() && *rollbacks < self.config.max_rollbacks {
            time.rollback();
            *rollbacks += 1;
            warn!(
                slot = %time,
                attempt = *rollbacks,
                max_rollbacks = self.config.max_rollbacks,
                "Placeholder image received, rolling back"
            );

            tile = self.fetcher.fetch(&url_for(time)).await?;
        }

        if tile.is_placeholder() {
            warn!(
                slot = %time,
                "Still no imagery after rolling back, keeping placeholder"
            );
        }

        Ok(tile)
    }
}
