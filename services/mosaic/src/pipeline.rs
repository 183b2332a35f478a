//! One end-to-end run: acquire the grid, composite it, write the PNG.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use himawari_common::{AcquisitionTime, SatResult};
use renderer::{render, write_png};
use tile_source::{GridAcquirer, TileFetcher};

use crate::cli::MosaicConfig;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct MosaicSummary {
    pub output: PathBuf,
    /// Slot the imagery was taken from
    pub slot: AcquisitionTime,
    pub rollbacks: u32,
    pub width: u32,
    pub height: u32,
}

/// Run the whole pipeline with `fetcher` as the tile source.
///
/// No output file is written unless every tile was fetched and decoded.
pub async fn run<F: TileFetcher>(config: &MosaicConfig, fetcher: F) -> SatResult<MosaicSummary> {
    let start = Instant::now();

    let acquirer = GridAcquirer::new(fetcher, config.acquire.clone());
    let acquisition = acquirer
        .acquire(config.band, config.zoom, config.time)
        .await?;

    if acquisition.rollbacks > 0 {
        info!(
            requested = %config.time,
            slot = %acquisition.time,
            rollbacks = acquisition.rollbacks,
            "Using earlier imagery slot"
        );
    }

    let canvas = render(
        config.band,
        acquisition.grid,
        config.background,
        config.foreground,
    );
    write_png(&canvas, &config.output)?;

    let summary = MosaicSummary {
        output: config.output.clone(),
        slot: acquisition.time,
        rollbacks: acquisition.rollbacks,
        width: canvas.width(),
        height: canvas.height(),
    };

    info!(
        output = %summary.output.display(),
        slot = %summary.slot,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Mosaic complete"
    );

    Ok(summary)
}
