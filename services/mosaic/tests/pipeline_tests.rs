//! End-to-end runs of the mosaic pipeline against an in-memory tile source.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{Rgba, RgbaImage};

use himawari_common::{AcquisitionTime, Band, Color, SatError, SatResult, ZoomLevel};
use mosaic::{run, MosaicConfig};
use test_utils::{solid_tile, temp_output, unwritable_output};
use tile_source::{AcquireConfig, FetchConfig, Tile, TileFetcher, PLACEHOLDER_DIGEST};

// ============================================================================
// Helpers
// ============================================================================

/// Hands out scripted tiles, then a fallback tile for every further request.
struct MemoryFetcher {
    script: Mutex<VecDeque<SatResult<Tile>>>,
    fallback: RgbaImage,
    requested: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    fn new(fallback: RgbaImage, script: Vec<SatResult<Tile>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            fallback,
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl TileFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> SatResult<Tile> {
        self.requested.lock().unwrap().push(url.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Tile::from_parts(self.fallback.clone(), "real")))
    }
}

fn config(band: Band, zoom: u8, output: &Path) -> MosaicConfig {
    MosaicConfig {
        band,
        zoom: ZoomLevel::new(zoom).unwrap(),
        time: AcquisitionTime::from_ymd_hm(2017, 2, 3, 19, 14).unwrap(),
        background: Color::BLACK,
        foreground: Color::WHITE,
        output: output.to_path_buf(),
        acquire: AcquireConfig {
            base_url: "http://tiles.test/img/".to_string(),
            ..AcquireConfig::default()
        },
        fetch: FetchConfig::default(),
    }
}

fn load(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

// ============================================================================
// Successful runs
// ============================================================================

#[tokio::test]
async fn test_full_color_single_tile() {
    let (_dir, output) = temp_output("earth.png");
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([10, 120, 200, 255])), vec![]);

    let summary = run(&config(Band::FULL_COLOR, 1, &output), fetcher.clone())
        .await
        .unwrap();

    assert_eq!(
        fetcher.requested(),
        vec!["http://tiles.test/img/D531106/1d/550/2017/02/03/191000_0_0.png"]
    );
    assert_eq!((summary.width, summary.height), (550, 550));
    assert_eq!(summary.rollbacks, 0);
    assert_eq!(summary.output, output);

    let written = load(&output);
    assert_eq!(written.dimensions(), (550, 550));
    assert_eq!(written.get_pixel(275, 275), &Rgba([10, 120, 200, 255]));
}

#[tokio::test]
async fn test_zoom_two_writes_four_tiles() {
    let (_dir, output) = temp_output("earth.png");
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([0, 0, 0, 255])), vec![]);

    let summary = run(&config(Band::FULL_COLOR, 2, &output), fetcher.clone())
        .await
        .unwrap();

    assert_eq!(fetcher.requested().len(), 4);
    assert_eq!((summary.width, summary.height), (1100, 1100));
    assert_eq!(load(&output).dimensions(), (1100, 1100));
}

#[tokio::test]
async fn test_spectral_band_is_tinted() {
    let (_dir, output) = temp_output("band.png");
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([40, 40, 40, 255])), vec![]);

    let mut config = config(Band::spectral(13).unwrap(), 1, &output);
    config.foreground = Color::rgb(255, 0, 0);

    run(&config, fetcher.clone()).await.unwrap();

    assert_eq!(
        fetcher.requested(),
        vec!["http://tiles.test/img/FULL_24h/B13/1d/550/2017/02/03/191000_0_0.png"]
    );
    assert_eq!(load(&output).get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
}

#[tokio::test]
async fn test_transparent_band_shows_background() {
    let (_dir, output) = temp_output("band.png");
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([200, 200, 200, 0])), vec![]);

    let mut config = config(Band::spectral(1).unwrap(), 1, &output);
    config.background = Color::rgb(0, 0, 255);

    run(&config, fetcher).await.unwrap();

    assert_eq!(load(&output).get_pixel(100, 100), &Rgba([0, 0, 255, 255]));
}

#[tokio::test]
async fn test_reports_rolled_back_slot() {
    let (_dir, output) = temp_output("earth.png");
    let placeholder = Ok(Tile::from_parts(RgbaImage::new(550, 550), PLACEHOLDER_DIGEST));
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([1, 2, 3, 255])), vec![placeholder]);

    let summary = run(&config(Band::FULL_COLOR, 1, &output), fetcher.clone())
        .await
        .unwrap();

    assert_eq!(summary.rollbacks, 1);
    assert_eq!(
        summary.slot,
        AcquisitionTime::from_ymd_hm(2017, 2, 3, 19, 0).unwrap()
    );
    assert_eq!(
        fetcher.requested()[1],
        "http://tiles.test/img/D531106/1d/550/2017/02/03/190000_0_0.png"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let (_dir, output) = temp_output("earth.png");
    let failure = Err(SatError::Transport {
        url: "http://tiles.test/img/x.png".to_string(),
        message: "HTTP error: 500 Internal Server Error".to_string(),
    });
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([1, 2, 3, 255])), vec![failure]);

    let err = run(&config(Band::FULL_COLOR, 1, &output), fetcher)
        .await
        .unwrap_err();

    assert!(err.is_fetch_error());
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_io_error() {
    let (dir, _) = temp_output("unused.png");
    let output = unwritable_output(&dir);
    let fetcher = MemoryFetcher::new(solid_tile(Rgba([1, 2, 3, 255])), vec![]);

    let err = run(&config(Band::FULL_COLOR, 1, &output), fetcher)
        .await
        .unwrap_err();

    assert!(matches!(err, SatError::Io { .. }));
    assert_eq!(err.exit_code(), 2);
}
