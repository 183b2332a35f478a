//! Himawari-8 mosaic downloader.
//!
//! Downloads the tile grid for one band, zoom level and time from the
//! Himawari-8 real-time tile server and stitches it into a single PNG:
//! - Rounds the requested time down to the 10-minute publication slot
//! - Steps back to earlier slots while the server has no imagery yet
//! - Tints single-band imagery over a solid background

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use himawari_common::AcquisitionTime;
use mosaic::cli::Args;
use mosaic::logging::init_tracing;
use tile_source::HttpTileFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_format)?;

    let config = match args.into_config(AcquisitionTime::now()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid arguments");
            std::process::exit(e.exit_code());
        }
    };

    info!(
        band = %config.band,
        description = config.band.description(),
        zoom = %config.zoom,
        resolution = config.zoom.resolution(),
        requested = %config.time,
        "Starting Himawari mosaic"
    );

    let fetcher = match HttpTileFetcher::new(&config.fetch) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "Failed to initialize tile fetcher");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = mosaic::run(&config, fetcher).await {
        error!(error = %e, "Mosaic failed");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
