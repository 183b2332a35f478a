//! Command-line arguments and the validated run configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use himawari_common::{AcquisitionTime, Band, Color, SatResult, ZoomLevel, DEFAULT_BASE_URL};
use tile_source::{AcquireConfig, FetchConfig};

#[derive(Parser, Debug)]
#[command(name = "himawari-mosaic")]
#[command(about = "Download Himawari-8 imagery tiles and stitch them into one image")]
pub struct Args {
    /// Band to download: "standard" for full colour, or 01-16
    #[arg(long, env = "HIMAWARI_BAND", default_value = "standard")]
    pub band: Band,

    /// Zoom level 1-5 (grid of 1x1 up to 16x16 tiles)
    #[arg(long, env = "HIMAWARI_ZOOM", default_value = "2")]
    pub zoom: ZoomLevel,

    /// Year of the image (default: current UTC year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month of the image (default: current UTC month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Day of the image (default: current UTC day)
    #[arg(long)]
    pub day: Option<u32>,

    /// Hour of the image, 24h UTC (default: current UTC hour)
    #[arg(long)]
    pub hour: Option<u32>,

    /// Minute of the image, rounded down to 10 minutes (default: current UTC minute)
    #[arg(long)]
    pub minute: Option<u32>,

    /// Canvas background colour as #RRGGBB
    #[arg(long, default_value = "#000000")]
    pub background: Color,

    /// Tint applied to single-band imagery as #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    pub foreground: Color,

    /// Output PNG path
    #[arg(short, long, env = "HIMAWARI_OUTPUT", default_value = "output.png")]
    pub output: PathBuf,

    /// Tile server root URL
    #[arg(long, env = "HIMAWARI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "60")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[arg(long, default_value = "30")]
    pub connect_timeout_secs: u64,

    /// Earlier slots to try while the first tile is a placeholder
    #[arg(long, default_value = "3")]
    pub max_rollbacks: u32,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Everything one run needs, validated.
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    pub band: Band,
    pub zoom: ZoomLevel,
    /// Requested time, not yet rounded to a slot
    pub time: AcquisitionTime,
    pub background: Color,
    pub foreground: Color,
    pub output: PathBuf,
    pub acquire: AcquireConfig,
    pub fetch: FetchConfig,
}

impl Args {
    /// Resolve defaults against `now` and validate the requested time.
    pub fn into_config(self, now: AcquisitionTime) -> SatResult<MosaicConfig> {
        let time = AcquisitionTime::from_ymd_hm(
            self.year.unwrap_or_else(|| now.year()),
            self.month.unwrap_or_else(|| now.month()),
            self.day.unwrap_or_else(|| now.day()),
            self.hour.unwrap_or_else(|| now.hour()),
            self.minute.unwrap_or_else(|| now.minute()),
        )?;

        Ok(MosaicConfig {
            band: self.band,
            zoom: self.zoom,
            time,
            background: self.background,
            foreground: self.foreground,
            output: self.output,
            acquire: AcquireConfig {
                base_url: self.base_url,
                max_rollbacks: self.max_rollbacks,
            },
            fetch: FetchConfig {
                request_timeout: Duration::from_secs(self.timeout_secs),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                ..FetchConfig::default()
            },
        })
    }
}
